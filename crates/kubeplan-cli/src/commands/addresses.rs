use kubeplan_util::errors::KubeplanResult as Result;

use kubeplan_core::config::GlobalConfig;
use kubeplan_net::address::{derive_address, API_SERVER_ORDINAL, DNS_ORDINAL};
use kubeplan_net::subnet::CidrSet;

pub fn exec(config: &GlobalConfig, service_subnet: Option<&str>) -> Result<()> {
    let list = service_subnet.unwrap_or(&config.networking.service_subnet);
    let subnets = CidrSet::parse(list)?;
    let primary = subnets.primary();

    if subnets.is_dual_stack() {
        println!("Service subnet:        {primary} (dual-stack)");
    } else {
        println!("Service subnet:        {primary}");
    }
    for net in subnets.secondary() {
        println!("  secondary:           {net}");
    }
    println!(
        "API server virtual IP: {}",
        derive_address(&primary, API_SERVER_ORDINAL)?
    );
    println!("Cluster DNS IP:        {}", derive_address(&primary, DNS_ORDINAL)?);
    Ok(())
}
