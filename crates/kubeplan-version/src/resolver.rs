//! Map a Kubernetes release onto a supported dependency version.
//!
//! Lookup is by minor version. When the table has no exact entry, the
//! resolution clamps to the table boundaries: below the lowest key resolves
//! to the lowest entry, above the highest key to the highest entry. A minor
//! that falls in a gap between two keys is not interpolated and fails.

use kubeplan_util::errors::{KubeplanError, Result};

use crate::fallback::{Boundary, CompatibilityFallback};
use crate::table::SkewTable;
use crate::version::KubeVersion;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: KubeVersion,
    /// Present when the table had no exact entry and a boundary was used.
    pub warning: Option<CompatibilityFallback>,
}

/// Resolve the dependency version supported for `version` according to `table`.
pub fn resolve_compatible_version(table: &SkewTable, version: &str) -> Result<Resolution> {
    let requested = KubeVersion::parse(version)?;
    let key = minor_key(&requested, version)?;

    if let Some(entry) = table.get(key) {
        tracing::debug!("Minor {key} of {version} maps to {entry}");
        return Ok(Resolution {
            version: KubeVersion::parse(entry)?,
            warning: None,
        });
    }

    let ((min, min_entry), (max, max_entry)) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(KubeplanError::EmptyTable),
    };

    let (entry, boundary) = if key < min {
        (min_entry, Boundary::BelowMinimum { min })
    } else if key > max {
        (max_entry, Boundary::AboveMaximum { max })
    } else {
        let (lower, upper) = table.neighbours(key);
        return Err(KubeplanError::UnresolvedGap {
            input: version.to_string(),
            minor: key,
            lower: lower.unwrap_or(min),
            upper: upper.unwrap_or(max),
        });
    };

    let warning = CompatibilityFallback {
        requested: version.to_string(),
        resolved: entry.to_string(),
        boundary,
    };
    tracing::debug!("{warning}");

    let resolved = KubeVersion::parse(entry).inspect_err(|_| {
        tracing::warn!("{warning}");
    })?;

    Ok(Resolution {
        version: resolved,
        warning: Some(warning),
    })
}

/// Narrow the minor version to a table key.
fn minor_key(version: &KubeVersion, input: &str) -> Result<u8> {
    u8::try_from(version.minor()).map_err(|_| KubeplanError::MinorOutOfRange {
        input: input.to_string(),
        minor: version.minor(),
    })
}
