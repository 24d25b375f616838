//! Version skew resolution for cluster bootstrap planning.
//!
//! Computes skewed releases (`MAJOR.(MINOR+n).0`) from a build-injected
//! version descriptor and maps a Kubernetes release onto the supported
//! version of a dependent component through a sparse compatibility table,
//! clamping to the table boundaries when no exact entry exists.

pub mod fallback;
pub mod resolver;
pub mod skew;
pub mod table;
pub mod version;
