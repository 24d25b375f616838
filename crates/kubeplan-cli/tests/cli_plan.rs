use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn kubeplan_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kubeplan").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("KUBEPLAN_CONFIG")
        .env_remove("KUBEPLAN_SERVICE_SUBNET")
        .env_remove("KUBEPLAN_POD_SUBNET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_versions_for_git_version() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["versions", "--git-version", "v1.34.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kubernetes:            v1.34.0"))
        .stdout(predicate::str::contains("Minimum control plane: v1.33.0"))
        .stdout(predicate::str::contains("Minimum kubelet:       v1.31.0"));
}

#[test]
fn test_versions_reads_build_info_from_config() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".kubeplan");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[build-info]\nmajor = \"1\"\nminor = \"33\"\ngit-version = \"v1.33.1\"\n",
    )
    .unwrap();

    kubeplan_cmd(&home)
        .args(["versions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kubernetes:            v1.33.0"));
}

#[test]
fn test_plan_json() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args([
            "plan",
            "--git-version",
            "v1.34.2",
            "--pod-subnet",
            "10.244.0.0/16",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""etcd_version": "3.6.4-0""#))
        .stdout(predicate::str::contains(r#""dns_ip": "10.96.0.10""#))
        .stdout(predicate::str::contains(r#""pod_subnet": "10.244.0.0/16""#));
}

#[test]
fn test_plan_human_readable() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["plan", "--git-version", "v1.33.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("etcd:                  3.5.21-0"))
        .stdout(predicate::str::contains("API server virtual IP: 10.96.0.1"));
}

#[test]
fn test_plan_fallback_warning_on_stderr() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .env("RUST_LOG", "off")
        .args(["plan", "--git-version", "v1.40.0", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""etcd_version": "3.6.4-0""#))
        .stderr(predicate::str::contains("falling back"));
}

#[test]
fn test_plan_rejects_oversized_service_subnet() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["plan", "--git-version", "v1.34.0", "--service-subnet", "10.0.0.0/8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_malformed_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "[networking\n").unwrap();

    kubeplan_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["addresses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
