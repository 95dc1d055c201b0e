use assert_cmd::Command;
use std::path::Path;

/// Isolated from the caller's config, kubeconfig, proxies and log filter.
fn bin(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("machine-age").unwrap();
    cmd.env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("KUBECONFIG")
        .env_remove("RUST_LOG")
        .env_remove("MACHINE_AGE_NAMESPACE")
        .env_remove("MACHINE_AGE_ROLE")
        .env_remove("MACHINE_AGE_DAYS");
    for var in ["HTTP_PROXY", "HTTPS_PROXY", "http_proxy", "https_proxy", "ALL_PROXY", "all_proxy"] { cmd.env_remove(var); }
    cmd
}

fn code(cmd: &mut Command) -> i32 { cmd.assert().failure().get_output().status.code().unwrap() }

#[test]
fn unknown_flag_is_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(code(bin(tmp.path()).arg("--nonexistent")), 2);
}

#[test]
fn zero_day_threshold_is_usage_error() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(code(bin(tmp.path()).args(["--age", "0"])), 2);
}

#[test]
fn empty_selector_values_are_usage_errors() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(code(bin(tmp.path()).args(["--role", ""])), 2);
    assert_eq!(code(bin(tmp.path()).args(["--label-key", ""])), 2);
    assert_eq!(code(bin(tmp.path()).args(["--namespace", ""])), 2);
}

#[test]
fn invalid_config_toml_is_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_dir = tmp.path().join("machine-age");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "***").unwrap();
    assert_eq!(code(&mut bin(tmp.path())), 10, "expected config code 10");
}

#[test]
fn missing_kubeconfig_is_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("no-such-kubeconfig");
    let assert = bin(tmp.path()).arg("--kubeconfig").arg(&missing).assert().failure();
    let out = assert.get_output();
    assert_eq!(out.status.code(), Some(10));
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read kubeconfig"));
}

fn write_unreachable_kubeconfig(dir: &Path) -> std::path::PathBuf {
    let kubeconfig = dir.join("kubeconfig");
    std::fs::write(&kubeconfig, r#"apiVersion: v1
kind: Config
clusters:
- name: local
  cluster:
    server: http://127.0.0.1:1
contexts:
- name: local
  context:
    cluster: local
    user: dev
current-context: local
users:
- name: dev
  user:
    token: dev-token
"#).unwrap();
    kubeconfig
}

#[test]
fn unknown_context_is_config_error() {
    let tmp = tempfile::tempdir().unwrap();
    let kubeconfig = write_unreachable_kubeconfig(tmp.path());
    let assert = bin(tmp.path()).arg("--kubeconfig").arg(&kubeconfig).args(["--context", "nope"]).assert().failure();
    let out = assert.get_output();
    assert_eq!(out.status.code(), Some(10), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
}

#[test]
fn unreachable_api_server_is_query_error() {
    let tmp = tempfile::tempdir().unwrap();
    let kubeconfig = write_unreachable_kubeconfig(tmp.path());
    let assert = bin(tmp.path()).arg("--kubeconfig").arg(&kubeconfig).assert().failure();
    let out = assert.get_output();
    assert_eq!(out.status.code(), Some(40), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty(), "no partial report on failure");
}
