//! Minor-version skew against the build-injected Kubernetes version.

use kubeplan_util::errors::{KubeplanError, Result};
use semver::{Prerelease, Version};
use serde::{Deserialize, Serialize};

use crate::version::KubeVersion;

/// Returned in place of a skewed version when the build carried no version
/// descriptor (dev and test builds).
pub const PLACEHOLDER_VERSION: &str = "1.0.0-placeholder-version";

/// Skew of the oldest control plane that can be deployed.
pub const CONTROL_PLANE_SKEW: i64 = -1;

/// Skew of the oldest kubelet that is supported.
pub const KUBELET_SKEW: i64 = -3;

/// Version descriptor injected by the build system.
///
/// Any field may be empty in degraded builds; an empty `major` marks the whole
/// descriptor as unpopulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub minor: String,
    #[serde(default, rename = "git-version")]
    pub git_version: String,
}

impl BuildInfo {
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        git_version: impl Into<String>,
    ) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            git_version: git_version.into(),
        }
    }

    /// The descriptor compiled into this binary from `KUBEPLAN_VERSION_MAJOR`,
    /// `KUBEPLAN_VERSION_MINOR` and `KUBEPLAN_GIT_VERSION`.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("KUBEPLAN_VERSION_MAJOR").unwrap_or_default(),
            option_env!("KUBEPLAN_VERSION_MINOR").unwrap_or_default(),
            option_env!("KUBEPLAN_GIT_VERSION").unwrap_or_default(),
        )
    }

    /// Build a populated descriptor from a release tag such as `v1.34.2`.
    pub fn from_git_version(git_version: &str) -> Result<Self> {
        let v = KubeVersion::parse(git_version)?;
        Ok(Self::new(
            v.major().to_string(),
            v.minor().to_string(),
            git_version,
        ))
    }

    pub fn is_populated(&self) -> bool {
        !self.major.is_empty()
    }
}

/// `1.0.0-placeholder-version`.
pub fn placeholder_version() -> KubeVersion {
    let mut v = Version::new(1, 0, 0);
    v.pre = Prerelease::new("placeholder-version").unwrap_or_default();
    KubeVersion::from(v)
}

/// Apply `skew` to the minor of `reference`: `MAJOR.(MINOR+skew).0`.
///
/// Pre-release and build metadata are dropped.
pub fn skew_version(reference: &KubeVersion, skew: i64) -> Result<KubeVersion> {
    let skewed = i128::from(reference.minor()) + i128::from(skew);
    if skewed < 0 {
        return Err(KubeplanError::NegativeSkew {
            minor: reference.minor(),
            skew,
        });
    }
    let minor = u64::try_from(skewed).map_err(|_| KubeplanError::InvalidVersion {
        input: reference.to_string(),
        message: format!("minor version overflows with skew {skew}"),
    })?;
    Ok(KubeVersion::new(reference.major(), minor, 0))
}

/// The current release shifted by `skew` minor versions.
///
/// Falls back to [`placeholder_version`] when `info` is unpopulated, whatever
/// the skew.
pub fn compute_skewed_version(info: &BuildInfo, skew: i64) -> Result<KubeVersion> {
    if !info.is_populated() {
        tracing::debug!("Build version descriptor is empty, using {PLACEHOLDER_VERSION}");
        return Ok(placeholder_version());
    }
    let reference = KubeVersion::parse(&info.git_version)?;
    skew_version(&reference, skew)
}

/// The Kubernetes version this build deploys.
pub fn current_kubernetes_version(info: &BuildInfo) -> Result<KubeVersion> {
    compute_skewed_version(info, 0)
}

/// The oldest control plane version this build can deploy.
pub fn minimum_control_plane_version(info: &BuildInfo) -> Result<KubeVersion> {
    compute_skewed_version(info, CONTROL_PLANE_SKEW)
}

/// The oldest kubelet version this build supports.
pub fn minimum_kubelet_version(info: &BuildInfo) -> Result<KubeVersion> {
    compute_skewed_version(info, KUBELET_SKEW)
}
