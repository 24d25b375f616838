//! Command dispatch and handler modules.

mod addresses;
mod etcd;
mod plan;
mod versions;

use kubeplan_util::errors::KubeplanResult as Result;

use kubeplan_core::config::GlobalConfig;
use kubeplan_version::skew::BuildInfo;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load()?,
    };

    match cli.command {
        Command::Versions { git_version } => versions::exec(&config, git_version.as_deref()),
        Command::Etcd { kubernetes_version } => etcd::exec(&config, &kubernetes_version),
        Command::Addresses { service_subnet } => addresses::exec(&config, service_subnet.as_deref()),
        Command::Plan {
            service_subnet,
            pod_subnet,
            git_version,
            json,
        } => plan::exec(
            &config,
            service_subnet.as_deref(),
            pod_subnet.as_deref(),
            git_version.as_deref(),
            json,
        ),
    }
}

/// The version descriptor from `--git-version` if given, else from config or the build.
fn build_info(config: &GlobalConfig, git_version: Option<&str>) -> Result<BuildInfo> {
    match git_version {
        Some(v) => Ok(BuildInfo::from_git_version(v)?),
        None => Ok(config.build_info()),
    }
}
