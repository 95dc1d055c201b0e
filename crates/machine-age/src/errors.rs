use thiserror::Error;
use std::fmt;

/// Exit code used with `--fail-on-exceeded` when at least one machine is over the threshold.
pub const EXIT_EXCEEDED: i32 = 1;

#[derive(Error, Debug)]
pub enum CliErrorKind {
    #[error("usage error: {0}")] Usage(String),
    /// Config file, environment override or kubeconfig could not be used.
    #[error("config error: {0}")] Config(String),
    #[error("runtime error: {0}")] Runtime(String),
    /// Writing the report to stdout failed.
    #[error("io error: {0}")] Io(String),
    /// The Machine list call failed: API unreachable, credentials rejected, or namespace/CRD missing.
    #[error("query error: {0}")] Query(String),
}

#[derive(Debug)]
pub struct CliError { pub kind: CliErrorKind, pub source: Option<anyhow::Error> }
impl fmt::Display for CliError { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.kind.fmt(f) } }
impl std::error::Error for CliError { fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { self.source.as_ref().map(|e| e.as_ref() as _) } }

impl CliErrorKind { pub fn code(&self) -> i32 { match self { Self::Usage(_) => 2, Self::Config(_) => 10, Self::Runtime(_) => 20, Self::Io(_) => 30, Self::Query(_) => 40 } } }

impl CliError {
    pub fn new(kind: CliErrorKind) -> Self { Self { kind, source: None } }
    pub fn with_source<E: Into<anyhow::Error>>(kind: CliErrorKind, err: E) -> Self { Self { kind, source: Some(err.into()) } }
    pub fn config<E: Into<anyhow::Error>>(msg: impl Into<String>, err: E) -> Self { Self::with_source(CliErrorKind::Config(msg.into()), err) }
}

impl From<std::io::Error> for CliError { fn from(e: std::io::Error) -> Self { Self::with_source(CliErrorKind::Io(e.to_string()), e) } }

/// Walks the error chain and maps the first classified error to a process exit code.
pub fn classify_exit_code(e: &anyhow::Error) -> i32 {
    use std::error::Error;
    let mut cur: &dyn Error = e.as_ref();
    loop {
        if let Some(cli) = cur.downcast_ref::<CliError>() { tracing::debug!(?cli, code=cli.kind.code(), "classified_cli_error"); return cli.kind.code(); }
        if cur.downcast_ref::<std::io::Error>().is_some() { return 30; }
        if let Some(src) = cur.source() { cur = src; } else { break; }
    }
    20
}
