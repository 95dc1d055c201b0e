use anyhow::Result;
use chrono::Utc;
use std::io::Write;
use tracing::{info, warn};
use crate::cluster::connect;
use crate::config::EffectiveConfig;
use crate::errors::CliError;
use crate::evaluator::evaluate;
use crate::lister::list_machines;
use crate::report::{render, RenderOptions, ReportContext, Summary};

/// One listing-and-report pass. The wall clock is read once, after the list returns.
#[tracing::instrument(skip_all, fields(namespace = %cfg.selector.namespace))]
pub async fn handle(cfg: &EffectiveConfig, opts: RenderOptions) -> Result<Summary> {
    let client = connect(cfg.kubeconfig.as_deref(), cfg.context.as_deref()).await?;
    let machines = list_machines(client, &cfg.selector).await?;
    let now = Utc::now();
    let results = evaluate(&machines, now, cfg.threshold);
    for r in results.iter().filter(|r| r.age.is_none()) {
        warn!(machine=%r.name, "machine.creation_timestamp.missing");
    }
    let ctx = ReportContext { namespace: &cfg.selector.namespace, threshold: cfg.threshold, evaluated_at: now };
    let mut stdout = std::io::stdout().lock();
    let summary = render(&mut stdout, &ctx, &results, opts).map_err(CliError::from)?;
    stdout.flush().map_err(CliError::from)?;
    info!(total=summary.total, exceeded=summary.exceeded, threshold=%cfg.threshold, "machines.check.done");
    Ok(summary)
}
