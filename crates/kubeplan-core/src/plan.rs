//! The bootstrap plan: versions and well-known addresses for a new cluster.

use std::net::IpAddr;

use ipnet::IpNet;
use kubeplan_net::address::{derive_address, API_SERVER_ORDINAL, DNS_ORDINAL};
use kubeplan_net::validate::{validate_pod_subnet, validate_service_subnet};
use kubeplan_util::errors::Result;
use kubeplan_version::resolver::resolve_compatible_version;
use kubeplan_version::skew::{
    current_kubernetes_version, minimum_control_plane_version, minimum_kubelet_version, BuildInfo,
};
use kubeplan_version::table::SkewTable;
use kubeplan_version::version::KubeVersion;
use serde::Serialize;

use crate::MIN_EXTERNAL_ETCD_VERSION;

/// Everything a bootstrap needs to know up front.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub kubernetes_version: KubeVersion,
    pub minimum_control_plane_version: KubeVersion,
    pub minimum_kubelet_version: KubeVersion,
    pub etcd_version: KubeVersion,
    /// Set when the etcd version is a boundary fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etcd_warning: Option<String>,
    pub service_subnet: IpNet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_service_subnets: Vec<IpNet>,
    /// Whether the service subnets cover both address families.
    pub dual_stack: bool,
    pub api_server_virtual_ip: IpAddr,
    pub dns_ip: IpAddr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_subnet: Option<IpNet>,
}

/// Inputs to [`plan`], all supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct PlanInputs<'a> {
    pub build_info: &'a BuildInfo,
    pub etcd: &'a SkewTable,
    pub service_subnet: &'a str,
    pub pod_subnet: Option<&'a str>,
}

/// Resolve versions and derive service addresses.
pub fn plan(inputs: PlanInputs<'_>) -> Result<Plan> {
    let kubernetes_version = current_kubernetes_version(inputs.build_info)?;
    let etcd = resolve_compatible_version(inputs.etcd, &kubernetes_version.to_string())?;

    let services = validate_service_subnet(inputs.service_subnet)?;
    let service_subnet = services.primary();

    let pod_subnet = match inputs.pod_subnet {
        Some(list) => Some(validate_pod_subnet(list)?.primary()),
        None => None,
    };

    Ok(Plan {
        minimum_control_plane_version: minimum_control_plane_version(inputs.build_info)?,
        minimum_kubelet_version: minimum_kubelet_version(inputs.build_info)?,
        kubernetes_version,
        etcd_version: etcd.version,
        etcd_warning: etcd.warning.map(|w| w.to_string()),
        service_subnet,
        secondary_service_subnets: services.secondary().to_vec(),
        dual_stack: services.is_dual_stack(),
        api_server_virtual_ip: derive_address(&service_subnet, API_SERVER_ORDINAL)?,
        dns_ip: derive_address(&service_subnet, DNS_ORDINAL)?,
        pod_subnet,
    })
}

/// Whether an external etcd at `version` is new enough to be used.
pub fn external_etcd_supported(version: &str) -> Result<bool> {
    let requested = KubeVersion::parse(version)?;
    let minimum = KubeVersion::parse(MIN_EXTERNAL_ETCD_VERSION)?;
    Ok(requested >= minimum)
}
