use anyhow::{Result, Context};
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};
use tracing::debug;
use crate::cli::Cli;
use crate::errors::{CliError, CliErrorKind};
use crate::lister::MachineSelector;
use crate::models::AgeThreshold;

pub const ENV_NAMESPACE: &str = "MACHINE_AGE_NAMESPACE";
pub const ENV_ROLE: &str = "MACHINE_AGE_ROLE";
pub const ENV_DAYS: &str = "MACHINE_AGE_DAYS";

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub namespace: Option<String>,
    pub label_key: Option<String>,
    pub role: Option<String>,
    pub age_days: Option<u32>,
}

/// Settings after layering: CLI flag > environment > config file > built-in default.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub selector: MachineSelector,
    pub threshold: AgeThreshold,
}

impl EffectiveConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path(), |k| std::env::var(k).ok())
    }

    pub fn load_from(cfg_path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        debug!(path=?cfg_path, exists=?cfg_path.exists(), "config.load.attempt");
        let mut file_cfg: FileConfig = if cfg_path.exists() {
            let content = fs::read_to_string(cfg_path).with_context(|| format!("read config {cfg_path:?}"))
                .map_err(|e| CliError::with_source(CliErrorKind::Config("failed to read config".into()), e))?;
            match toml::from_str(&content) {
                Ok(v) => { debug!("config.parse.success"); v }
                Err(e) => { debug!(error=?e, "config.parse.error"); return Err(CliError::with_source(CliErrorKind::Config("failed to parse config".into()), e).into()); }
            }
        } else { FileConfig::default() };

        let lookup = |k: &str| env(k).filter(|v| !v.is_empty());
        if let Some(ns) = lookup(ENV_NAMESPACE) { file_cfg.namespace = Some(ns); }
        if let Some(role) = lookup(ENV_ROLE) { file_cfg.role = Some(role); }
        if let Some(days) = lookup(ENV_DAYS) {
            let parsed = days.parse::<u32>()
                .map_err(|e| CliError::with_source(CliErrorKind::Config(format!("{ENV_DAYS} must be a whole number of days, got {days:?}")), e))?;
            file_cfg.age_days = Some(parsed);
        }

        let days = file_cfg.age_days.unwrap_or(AgeThreshold::DEFAULT_DAYS);
        if days == 0 { return Err(CliError::new(CliErrorKind::Config("age_days must be at least 1".into())).into()); }
        for (key, value) in [("namespace", &file_cfg.namespace), ("label_key", &file_cfg.label_key), ("role", &file_cfg.role)] {
            if value.as_deref() == Some("") { return Err(CliError::new(CliErrorKind::Config(format!("{key} must not be empty"))).into()); }
        }
        let defaults = MachineSelector::default();
        Ok(Self {
            kubeconfig: file_cfg.kubeconfig,
            context: file_cfg.context,
            selector: MachineSelector {
                namespace: file_cfg.namespace.unwrap_or(defaults.namespace),
                label_key: file_cfg.label_key.unwrap_or(defaults.label_key),
                label_value: file_cfg.role.unwrap_or(defaults.label_value),
            },
            threshold: AgeThreshold::days(days),
        })
    }

    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(p) = &cli.kubeconfig { self.kubeconfig = Some(p.clone()); }
        if let Some(c) = &cli.context { self.context = Some(c.clone()); }
        if let Some(ns) = &cli.namespace { self.selector.namespace = ns.clone(); }
        if let Some(k) = &cli.label_key { self.selector.label_key = k.clone(); }
        if let Some(r) = &cli.role { self.selector.label_value = r.clone(); }
        if let Some(days) = cli.age { self.threshold = AgeThreshold::days(days); }
        self
    }
}

pub fn config_dir() -> PathBuf { dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("machine-age") }
pub fn config_file_path() -> PathBuf { config_dir().join("config.toml") }
