//! Addresses at fixed ordinals inside a network.
//!
//! Ordinal 0 is the network (base) address and ordinal N is base + N, so in
//! `10.96.0.0/12` ordinal 1 is `10.96.0.1` and ordinal 10 is `10.96.0.10`.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::IpNet;
use kubeplan_util::errors::{KubeplanError, Result};

use crate::subnet::parse_primary_subnet;

/// Ordinal of the internal API server service address.
pub const API_SERVER_ORDINAL: u128 = 1;

/// Ordinal of the cluster DNS service address. Lower ordinals are left to
/// other well-known services.
pub const DNS_ORDINAL: u128 = 10;

/// The address at `ordinal` counting from the base of `network`.
pub fn derive_address(network: &IpNet, ordinal: u128) -> Result<IpAddr> {
    let candidate = match network.network() {
        IpAddr::V4(base) => u32::try_from(ordinal)
            .ok()
            .and_then(|offset| u32::from(base).checked_add(offset))
            .map(|ip| IpAddr::V4(Ipv4Addr::from(ip))),
        IpAddr::V6(base) => u128::from(base)
            .checked_add(ordinal)
            .map(|ip| IpAddr::V6(Ipv6Addr::from(ip))),
    };

    match candidate {
        Some(ip) if network.contains(&ip) => Ok(ip),
        _ => Err(KubeplanError::SubnetTooSmall {
            network: network.to_string(),
            ordinal,
        }),
    }
}

/// Number of addresses in `network`, saturating for an IPv6 `/0`.
pub fn address_count(network: &IpNet) -> u128 {
    let host_bits = u32::from(network.max_prefix_len() - network.prefix_len());
    1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
}

/// The internal API server virtual IP: ordinal 1 of the primary service subnet.
pub fn api_server_virtual_ip(service_subnets: &str) -> Result<IpAddr> {
    let subnet = parse_primary_subnet(service_subnets)?;
    let ip = derive_address(&subnet, API_SERVER_ORDINAL)?;
    tracing::debug!("API server virtual IP in {subnet} is {ip}");
    Ok(ip)
}

/// The cluster DNS service IP: ordinal 10 of the primary service subnet.
pub fn dns_ip(service_subnets: &str) -> Result<IpAddr> {
    let subnet = parse_primary_subnet(service_subnets)?;
    let ip = derive_address(&subnet, DNS_ORDINAL)?;
    tracing::debug!("Cluster DNS IP in {subnet} is {ip}");
    Ok(ip)
}
