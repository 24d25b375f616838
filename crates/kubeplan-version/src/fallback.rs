//! Non-fatal warnings emitted when resolution clamps to a table boundary.

use std::fmt;

/// Which end of the compatibility table a resolution was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The requested minor is older than every table entry.
    BelowMinimum { min: u8 },
    /// The requested minor is newer than every table entry.
    AboveMaximum { max: u8 },
}

impl Boundary {
    /// The table key the resolution fell back to.
    pub fn key(&self) -> u8 {
        match self {
            Boundary::BelowMinimum { min } => *min,
            Boundary::AboveMaximum { max } => *max,
        }
    }
}

/// A resolution that succeeded only by falling back to the nearest boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityFallback {
    pub requested: String,
    pub resolved: String,
    pub boundary: Boundary,
}

impl fmt::Display for CompatibilityFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not find an officially supported version for {}, falling back to the nearest version ({})",
            self.requested, self.resolved
        )?;
        write!(f, " for minor {}", self.boundary.key())
    }
}
