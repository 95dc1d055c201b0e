use anyhow::Result;
use kube::{Client, Config, config::{KubeConfigOptions, Kubeconfig}};
use std::path::Path;
use tracing::debug;
use crate::errors::CliError;

/// Builds an authenticated client. An explicit kubeconfig path is read as-is;
/// otherwise the standard discovery chain applies (KUBECONFIG, ~/.kube/config, in-cluster).
pub async fn connect(kubeconfig: Option<&Path>, context: Option<&str>) -> Result<Client> {
    let options = KubeConfigOptions { context: context.map(str::to_owned), ..Default::default() };
    let config = match kubeconfig {
        Some(path) => {
            debug!(path=%path.display(), "kubeconfig.read");
            let raw = Kubeconfig::read_from(path).map_err(|e| CliError::config(format!("failed to read kubeconfig {}", path.display()), e))?;
            Config::from_custom_kubeconfig(raw, &options).await.map_err(|e| CliError::config("invalid kubeconfig", e))?
        }
        None if context.is_some() => Config::from_kubeconfig(&options).await.map_err(|e| CliError::config("invalid kubeconfig", e))?,
        None => Config::infer().await.map_err(|e| CliError::config("no usable cluster configuration found", e))?,
    };
    debug!(cluster_url=%config.cluster_url, namespace=%config.default_namespace, "kubeconfig.resolved");
    let client = Client::try_from(config).map_err(|e| CliError::config("failed to build cluster client", e))?;
    Ok(client)
}
