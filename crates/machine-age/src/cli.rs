use clap::{Parser, builder::NonEmptyStringValueParser};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat { #[default] Auto, Text, Json }

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat { #[default] Text, Json }

#[derive(Parser, Debug)]
#[command(name = "machine-age", version, about = "Flag OpenShift Machines older than an age threshold")]
pub struct Cli {
    /// Path to the kubeconfig file (default: KUBECONFIG, ~/.kube/config, then in-cluster)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub context: Option<String>,
    /// Age threshold in days (default 21)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub age: Option<u32>,
    /// Namespace holding the Machine objects (default openshift-machine-api)
    #[arg(long, short = 'n', value_parser = NonEmptyStringValueParser::new())]
    pub namespace: Option<String>,
    /// Label key used to select machines by role
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub label_key: Option<String>,
    /// Label value the role key must match (default master)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub role: Option<String>,
    /// Report format: text|json
    #[arg(long, short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
    /// Print only machines over the threshold
    #[arg(long, default_value_t = false)]
    pub only_exceeded: bool,
    /// Exit with code 1 when any machine is over the threshold
    #[arg(long, default_value_t = false)]
    pub fail_on_exceeded: bool,
    /// Log level: trace|debug|info|warn|error
    #[arg(long, default_value = "info")]
    pub log_level: String,
    /// Log format: auto|text|json
    #[arg(long, value_enum, default_value = "auto")]
    pub log_format: LogFormat,
}
