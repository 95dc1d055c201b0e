use kube::Resource;
use machine_api::{Machine, MachineSpec};
use serde_json::json;

#[test]
fn resource_metadata_points_at_machine_api() {
    assert_eq!(Machine::api_version(&()), "machine.openshift.io/v1beta1");
    assert_eq!(Machine::kind(&()), "Machine");
    assert_eq!(Machine::plural(&()), "machines");
}

#[test]
fn deserializes_cluster_object_ignoring_spec_and_status() {
    let obj = json!({
        "apiVersion": "machine.openshift.io/v1beta1",
        "kind": "Machine",
        "metadata": {
            "name": "ocp-master-0",
            "namespace": "openshift-machine-api",
            "creationTimestamp": "2024-03-01T12:00:00Z",
            "labels": {"machine.openshift.io/cluster-api-machine-role": "master"}
        },
        "spec": {
            "providerID": "aws:///us-east-1a/i-0abc",
            "providerSpec": {"value": {"instanceType": "m6i.xlarge"}}
        },
        "status": {"phase": "Running", "nodeRef": {"kind": "Node"}}
    });
    let m: Machine = serde_json::from_value(obj).unwrap();
    assert_eq!(m.metadata.name.as_deref(), Some("ocp-master-0"));
    assert_eq!(m.spec, MachineSpec {});
    let ts = m.metadata.creation_timestamp.unwrap();
    assert_eq!(ts.0.to_rfc3339(), "2024-03-01T12:00:00+00:00");
}

#[test]
fn empty_spec_serializes_to_empty_object() {
    let j = serde_json::to_value(MachineSpec::default()).unwrap();
    assert_eq!(j, json!({}));
}
