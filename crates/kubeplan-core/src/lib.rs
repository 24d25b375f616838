//! Core of the kubeplan bootstrap planner.
//!
//! Loads configuration, and combines version skew resolution with service
//! subnet addressing into a single [`plan::Plan`].
//!
//! This crate is free of network I/O; the only I/O is reading the config file.

/// Service subnet used when none is configured.
pub const DEFAULT_SERVICE_SUBNET: &str = "10.96.0.0/12";

/// etcd version deployed for the newest supported Kubernetes release.
pub const DEFAULT_ETCD_VERSION: &str = "3.6.4-0";

/// Oldest external etcd a cluster may be pointed at.
pub const MIN_EXTERNAL_ETCD_VERSION: &str = "3.5.21-0";

pub mod config;
pub mod plan;
