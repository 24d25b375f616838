use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn kubeplan_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kubeplan").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("KUBEPLAN_CONFIG")
        .env_remove("KUBEPLAN_SERVICE_SUBNET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_addresses_default_subnet() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["addresses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.96.0.0/12"))
        .stdout(predicate::str::contains("dual-stack").not())
        .stdout(predicate::str::contains("API server virtual IP: 10.96.0.1\n"))
        .stdout(predicate::str::contains("Cluster DNS IP:        10.96.0.10\n"));
}

#[test]
fn test_addresses_dual_stack_flag() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["addresses", "--service-subnet", "fd00::/108,10.96.0.0/12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fd00::/108 (dual-stack)"))
        .stdout(predicate::str::contains("fd00::a"))
        .stdout(predicate::str::contains("secondary:           10.96.0.0/12"));
}

#[test]
fn test_addresses_from_env() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .env("KUBEPLAN_SERVICE_SUBNET", "10.32.0.0/24")
        .args(["addresses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.32.0.10"));
}

#[test]
fn test_addresses_subnet_too_small() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["addresses", "--service-subnet", "10.96.0.0/31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too small"));
}

#[test]
fn test_addresses_invalid_cidr() {
    let home = TempDir::new().unwrap();
    kubeplan_cmd(&home)
        .args(["addresses", "--service-subnet", "10.96.0.0/40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CIDR '10.96.0.0/40'"));
}
