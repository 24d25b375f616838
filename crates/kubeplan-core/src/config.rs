use kubeplan_util::errors::{KubeplanError, KubeplanResult};
use kubeplan_version::skew::BuildInfo;
use kubeplan_version::table::SkewTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::DEFAULT_SERVICE_SUBNET;

/// Global user configuration loaded from `~/.kubeplan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Overrides the version descriptor compiled into the binary.
    #[serde(default, rename = "build-info")]
    pub build_info: Option<BuildInfo>,

    #[serde(default)]
    pub networking: NetworkingConfig,

    #[serde(default)]
    pub etcd: EtcdConfig,
}

/// Cluster address ranges from `[networking]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkingConfig {
    #[serde(default = "default_service_subnet", rename = "service-subnet")]
    pub service_subnet: String,
    #[serde(default, rename = "pod-subnet")]
    pub pod_subnet: Option<String>,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            service_subnet: default_service_subnet(),
            pod_subnet: None,
        }
    }
}

fn default_service_subnet() -> String {
    DEFAULT_SERVICE_SUBNET.to_string()
}

/// etcd compatibility overrides from `[etcd]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EtcdConfig {
    /// Kubernetes minor version (as a string key) to etcd version.
    #[serde(default)]
    pub supported: BTreeMap<String, String>,
}

impl EtcdConfig {
    /// The configured table, or the built-in one when none is configured.
    pub fn table(&self) -> KubeplanResult<SkewTable> {
        if self.supported.is_empty() {
            return Ok(SkewTable::supported_etcd());
        }
        let mut table = SkewTable::new();
        for (minor, version) in &self.supported {
            let key = minor.trim().parse::<u8>().map_err(|e| KubeplanError::Config {
                message: format!("etcd table key '{minor}' is not a minor version (0-255): {e}"),
            })?;
            table.insert(key, version.clone());
        }
        Ok(table)
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.kubeplan/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> KubeplanResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration at `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> KubeplanResult<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| KubeplanError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            KubeplanError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// The configured version descriptor, else the one compiled into the binary.
    pub fn build_info(&self) -> BuildInfo {
        self.build_info
            .clone()
            .unwrap_or_else(BuildInfo::from_build_env)
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the kubeplan data directory (`~/.kubeplan/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".kubeplan")
}
