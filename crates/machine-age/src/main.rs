use anyhow::Result;
use clap::Parser;
use machine_age::{check, cli::Cli, config::EffectiveConfig, errors::{classify_exit_code, EXIT_EXCEEDED}, logging::init_logging, report::RenderOptions};
use std::process;
use std::time::Instant;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_level, &cli.log_format) {
        eprintln!("error: {e:#}");
        process::exit(classify_exit_code(&e));
    }
    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => { eprintln!("error: {e:#}"); classify_exit_code(&e) }
    };
    info!(took_ms=%start.elapsed().as_millis(), event="cli.finished", exit_code=exit_code);
    if exit_code != 0 { process::exit(exit_code); }
    Ok(())
}

async fn run(cli: Cli) -> Result<i32> {
    let cfg = EffectiveConfig::load()?.with_cli(&cli);
    let opts = RenderOptions { format: cli.output, only_exceeded: cli.only_exceeded };
    let summary = check::handle(&cfg, opts).await?;
    Ok(if cli.fail_on_exceeded && summary.exceeded > 0 { EXIT_EXCEEDED } else { 0 })
}
