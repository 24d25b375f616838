//! Kubernetes-style semantic versions.

use std::fmt;
use std::str::FromStr;

use kubeplan_util::errors::{KubeplanError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Serialize};

/// A parsed semantic version backed by semver.
///
/// Parsing accepts surrounding whitespace and an optional leading `v`
/// (`v1.34.0`), as Kubernetes release tags carry one. All three numeric components are required.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KubeVersion(Version);

impl KubeVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Parse a version string, echoing the offending input on failure.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(bare)
            .map(Self)
            .map_err(|e| KubeplanError::InvalidVersion {
                input: input.to_string(),
                message: e.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// The pre-release identifier, empty for releases.
    pub fn pre_release(&self) -> &str {
        self.0.pre.as_str()
    }

    pub fn is_pre_release(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// The same version with pre-release and build metadata stripped.
    pub fn release(&self) -> Self {
        let mut v = self.0.clone();
        v.pre = Prerelease::EMPTY;
        v.build = BuildMetadata::EMPTY;
        Self(v)
    }

    /// The version formatted as a release tag (`v1.34.0`).
    pub fn tag(&self) -> String {
        format!("v{}", self.0)
    }
}

impl fmt::Display for KubeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for KubeVersion {
    type Err = KubeplanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Version> for KubeVersion {
    fn from(v: Version) -> Self {
        Self(v)
    }
}
