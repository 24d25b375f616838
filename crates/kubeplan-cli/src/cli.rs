//! CLI argument definitions for kubeplan.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "kubeplan",
    version,
    about = "Plan versions and service addresses for a Kubernetes bootstrap",
    long_about = "kubeplan resolves the Kubernetes version skew supported by this build, \
                  the etcd release compatible with a Kubernetes version, and the well-known \
                  virtual IPs derived from the service subnet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (defaults to ~/.kubeplan/config.toml)
    #[arg(long, global = true, env = "KUBEPLAN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current, minimum control plane and minimum kubelet versions
    Versions {
        /// Release tag to derive versions from instead of the build's own
        #[arg(long)]
        git_version: Option<String>,
    },

    /// Resolve the etcd version supported for a Kubernetes version
    Etcd {
        /// Kubernetes version (e.g., v1.34.2)
        kubernetes_version: String,
    },

    /// Show the API server and DNS virtual IPs of the service subnet
    Addresses {
        /// Comma-separated service CIDRs; the first one is used
        #[arg(long, env = "KUBEPLAN_SERVICE_SUBNET")]
        service_subnet: Option<String>,
    },

    /// Show the full bootstrap plan
    Plan {
        /// Comma-separated service CIDRs; the first one is used
        #[arg(long, env = "KUBEPLAN_SERVICE_SUBNET")]
        service_subnet: Option<String>,
        /// Comma-separated pod CIDRs
        #[arg(long, env = "KUBEPLAN_POD_SUBNET")]
        pod_subnet: Option<String>,
        /// Release tag to plan for instead of the build's own
        #[arg(long)]
        git_version: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
