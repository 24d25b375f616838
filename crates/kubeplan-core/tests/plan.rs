use kubeplan_core::plan::{external_etcd_supported, plan, PlanInputs};
use kubeplan_core::{DEFAULT_ETCD_VERSION, DEFAULT_SERVICE_SUBNET, MIN_EXTERNAL_ETCD_VERSION};
use kubeplan_util::errors::KubeplanError;
use kubeplan_version::skew::{placeholder_version, BuildInfo};
use kubeplan_version::table::SkewTable;

fn inputs<'a>(info: &'a BuildInfo, table: &'a SkewTable, subnet: &'a str) -> PlanInputs<'a> {
    PlanInputs {
        build_info: info,
        etcd: table,
        service_subnet: subnet,
        pod_subnet: None,
    }
}

#[test]
fn test_plan_for_release_build() {
    let info = BuildInfo::from_git_version("v1.34.2").unwrap();
    let table = SkewTable::supported_etcd();
    let p = plan(inputs(&info, &table, DEFAULT_SERVICE_SUBNET)).unwrap();

    assert_eq!(p.kubernetes_version.to_string(), "1.34.0");
    assert_eq!(p.minimum_control_plane_version.to_string(), "1.33.0");
    assert_eq!(p.minimum_kubelet_version.to_string(), "1.31.0");
    assert_eq!(p.etcd_version.to_string(), DEFAULT_ETCD_VERSION);
    assert!(p.etcd_warning.is_none());
    assert_eq!(p.api_server_virtual_ip.to_string(), "10.96.0.1");
    assert_eq!(p.dns_ip.to_string(), "10.96.0.10");
    assert!(!p.dual_stack);
}

#[test]
fn test_plan_for_unpopulated_build_uses_placeholder() {
    let info = BuildInfo::default();
    let table = SkewTable::supported_etcd();
    let p = plan(inputs(&info, &table, DEFAULT_SERVICE_SUBNET)).unwrap();

    assert_eq!(p.kubernetes_version, placeholder_version());
    assert_eq!(p.etcd_version.to_string(), MIN_EXTERNAL_ETCD_VERSION);
    assert!(p.etcd_warning.is_some());
}

#[test]
fn test_plan_dual_stack_keeps_secondary() {
    let info = BuildInfo::from_git_version("v1.33.0").unwrap();
    let table = SkewTable::supported_etcd();
    let p = plan(inputs(&info, &table, "10.96.0.0/16,fd00::/112")).unwrap();

    assert_eq!(p.service_subnet.to_string(), "10.96.0.0/16");
    assert_eq!(p.secondary_service_subnets.len(), 1);
    assert_eq!(p.secondary_service_subnets[0].to_string(), "fd00::/112");
    assert!(p.dual_stack);
}

#[test]
fn test_plan_with_pod_subnet() {
    let info = BuildInfo::from_git_version("v1.34.0").unwrap();
    let table = SkewTable::supported_etcd();
    let p = plan(PlanInputs {
        pod_subnet: Some("10.244.0.0/16"),
        ..inputs(&info, &table, DEFAULT_SERVICE_SUBNET)
    })
    .unwrap();
    assert_eq!(p.pod_subnet.map(|n| n.to_string()).as_deref(), Some("10.244.0.0/16"));
}

#[test]
fn test_plan_rejects_oversized_service_subnet() {
    let info = BuildInfo::from_git_version("v1.34.0").unwrap();
    let table = SkewTable::supported_etcd();
    let err = plan(inputs(&info, &table, "10.0.0.0/8")).unwrap_err();
    assert!(matches!(err, KubeplanError::ServiceSubnetTooLarge { .. }));
}

#[test]
fn test_plan_serializes_to_json() {
    let info = BuildInfo::from_git_version("v1.34.2").unwrap();
    let table = SkewTable::supported_etcd();
    let p = plan(inputs(&info, &table, DEFAULT_SERVICE_SUBNET)).unwrap();

    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["kubernetes_version"], "1.34.0");
    assert_eq!(json["service_subnet"], "10.96.0.0/12");
    assert_eq!(json["dns_ip"], "10.96.0.10");
    assert_eq!(json["dual_stack"], false);
    assert!(json.get("etcd_warning").is_none());
}

#[test]
fn test_external_etcd_minimum() {
    assert!(external_etcd_supported("3.5.21-0").unwrap());
    assert!(external_etcd_supported("v3.6.4").unwrap());
    assert!(!external_etcd_supported("3.5.15-0").unwrap());
    assert!(external_etcd_supported("3.5").is_err());
}

#[test]
fn test_builtin_table_matches_etcd_constants() {
    let table = SkewTable::supported_etcd();
    assert_eq!(table.first().map(|(_, v)| v), Some(MIN_EXTERNAL_ETCD_VERSION));
    assert_eq!(table.last().map(|(_, v)| v), Some(DEFAULT_ETCD_VERSION));
}
