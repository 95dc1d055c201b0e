use anyhow::Result;
use kube::{Api, Client, ResourceExt, api::ListParams};
use machine_api::Machine;
use tracing::{debug, info};
use crate::errors::{CliError, CliErrorKind};
use crate::models::{MachineList, MachineRecord};

pub const DEFAULT_NAMESPACE: &str = "openshift-machine-api";
pub const DEFAULT_ROLE_LABEL: &str = "machine.openshift.io/cluster-api-machine-role";
pub const DEFAULT_ROLE: &str = "master";

/// Namespace plus `key=value` label match for the list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSelector {
    pub namespace: String,
    pub label_key: String,
    pub label_value: String,
}

impl Default for MachineSelector {
    fn default() -> Self {
        Self { namespace: DEFAULT_NAMESPACE.into(), label_key: DEFAULT_ROLE_LABEL.into(), label_value: DEFAULT_ROLE.into() }
    }
}

impl MachineSelector {
    pub fn label_selector(&self) -> String { format!("{}={}", self.label_key, self.label_value) }
}

pub fn list_params(selector: &MachineSelector) -> ListParams {
    ListParams::default().labels(&selector.label_selector())
}

impl From<&Machine> for MachineRecord {
    fn from(m: &Machine) -> Self {
        Self { name: m.name_any(), created_at: m.metadata.creation_timestamp.as_ref().map(|t| t.0) }
    }
}

/// Single read-only list call. Either every matching machine comes back or the call fails.
pub async fn list_machines(client: Client, selector: &MachineSelector) -> Result<MachineList> {
    let api: Api<Machine> = Api::namespaced(client, &selector.namespace);
    let lp = list_params(selector);
    debug!(namespace=%selector.namespace, selector=%selector.label_selector(), "machines.list.start");
    let list = api.list(&lp).await.map_err(|e| {
        let msg = describe_list_error(&e, selector);
        CliError::with_source(CliErrorKind::Query(msg), e)
    })?;
    let records: MachineList = list.items.iter().map(MachineRecord::from).collect();
    info!(namespace=%selector.namespace, count=records.len(), "machines.list.done");
    Ok(records)
}

fn describe_list_error(e: &kube::Error, selector: &MachineSelector) -> String {
    match e {
        kube::Error::Api(ae) if ae.code == 404 => format!("namespace {} or the Machine resource type was not found", selector.namespace),
        kube::Error::Api(ae) if ae.code == 401 || ae.code == 403 => format!("not permitted to list machines in {}: {}", selector.namespace, ae.message),
        _ => format!("failed to list machines in {}", selector.namespace),
    }
}
