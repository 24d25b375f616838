//! Service subnet handling for cluster bootstrap planning.
//!
//! Parses comma-separated CIDR lists (the first network is the primary
//! subnet), derives the addresses that sit at fixed ordinals inside it, such
//! as the API server virtual IP and the cluster DNS IP, and validates subnet
//! sizes against what the service and pod allocators can handle.

pub mod address;
pub mod subnet;
pub mod validate;
