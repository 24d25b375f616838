//! Subnet size checks for service and pod ranges.

use ipnet::IpNet;
use kubeplan_util::errors::{KubeplanError, Result};

use crate::address::address_count;
use crate::subnet::CidrSet;

/// Smallest service subnet; the DNS service sits at the tenth address.
pub const MINIMUM_ADDRESSES_IN_SERVICE_SUBNET: u128 = 10;

/// Largest service subnet in host bits (`/12` for IPv4, `/108` for IPv6).
pub const MAXIMUM_BITS_FOR_SERVICE_SUBNET: u8 = 20;

/// A pod subnet smaller than this cannot hold more pods than services.
pub const MINIMUM_ADDRESSES_IN_POD_SUBNET: u128 = 14;

/// Check every network of a service CIDR list is neither too large for the
/// service allocator nor too small to hold the DNS address.
pub fn validate_service_subnet(list: &str) -> Result<CidrSet> {
    let set = CidrSet::parse(list)?;
    for net in set.iter() {
        check_max_host_bits(net, MAXIMUM_BITS_FOR_SERVICE_SUBNET)?;
        check_min_addresses(net, MINIMUM_ADDRESSES_IN_SERVICE_SUBNET)?;
    }
    Ok(set)
}

/// Check every network of a pod CIDR list holds enough addresses.
pub fn validate_pod_subnet(list: &str) -> Result<CidrSet> {
    let set = CidrSet::parse(list)?;
    for net in set.iter() {
        check_min_addresses(net, MINIMUM_ADDRESSES_IN_POD_SUBNET)?;
    }
    Ok(set)
}

fn check_max_host_bits(net: &IpNet, max_bits: u8) -> Result<()> {
    let bits = net.max_prefix_len();
    if bits - net.prefix_len() > max_bits {
        return Err(KubeplanError::ServiceSubnetTooLarge {
            network: net.to_string(),
            bits,
            min_prefix: bits - max_bits,
        });
    }
    Ok(())
}

fn check_min_addresses(net: &IpNet, required: u128) -> Result<()> {
    let available = address_count(net);
    if available < required {
        return Err(KubeplanError::SubnetCapacity {
            network: net.to_string(),
            available,
            required,
        });
    }
    Ok(())
}
