use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Machine as served by the OpenShift machine API. The age check reads only
/// `metadata`, so the spec carries no fields and the status is not modelled;
/// whatever the cluster puts there is ignored on deserialization.
#[derive(CustomResource, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[kube(
    group = "machine.openshift.io",
    version = "v1beta1",
    kind = "Machine",
    namespaced,
    schema = "disabled"
)]
pub struct MachineSpec {}

pub use MachineSpec as Spec;
