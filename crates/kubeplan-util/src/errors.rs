use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all kubeplan operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum KubeplanError {
    /// A version string is not a valid semantic version.
    #[error("Invalid version '{input}': {message}")]
    #[diagnostic(help("Versions look like 1.34.0 or v1.34.0-rc.1"))]
    InvalidVersion { input: String, message: String },

    /// A CIDR segment could not be parsed.
    #[error("Invalid CIDR '{input}': {message}")]
    #[diagnostic(help("Subnets look like 10.96.0.0/12 or fd00::/108, separated by commas"))]
    InvalidCidr { input: String, message: String },

    /// No subnet was supplied.
    #[error("Received empty subnet list")]
    EmptyInput,

    /// The network cannot hold an address at the requested index.
    #[error("Subnet {network} is too small to hold an address at index {ordinal}")]
    SubnetTooSmall { network: String, ordinal: u128 },

    /// The minor version does not fit the 8-bit compatibility table key.
    #[error("Minor version {minor} of '{input}' exceeds the largest table key (255)")]
    MinorOutOfRange { input: String, minor: u64 },

    /// A compatibility table with no entries was used for resolution.
    #[error("Compatibility table has no entries")]
    EmptyTable,

    /// The minor version lies between two table keys with no entry of its own.
    #[error(
        "No supported version for {input}: minor {minor} falls between table entries {lower} and {upper}"
    )]
    #[diagnostic(help("Add an entry for this minor version to the compatibility table"))]
    UnresolvedGap {
        input: String,
        minor: u8,
        lower: u8,
        upper: u8,
    },

    /// A skew would move the minor version below zero.
    #[error("Version skew {skew} moves minor version {minor} below zero")]
    NegativeSkew { minor: u64, skew: i64 },

    /// A service subnet with more host bits than the allocator supports.
    #[error("Service subnet {network} is too large; for {bits}-bit addresses the mask must be >= /{min_prefix}")]
    ServiceSubnetTooLarge {
        network: String,
        bits: u8,
        min_prefix: u8,
    },

    /// A subnet that holds fewer addresses than its role requires.
    #[error("Subnet {network} holds {available} addresses but at least {required} are required")]
    SubnetCapacity {
        network: String,
        available: u128,
        required: u128,
    },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.kubeplan/config.toml for syntax errors"))]
    Config { message: String },
}

/// Result type for the pure kubeplan operations.
pub type Result<T> = std::result::Result<T, KubeplanError>;

/// Convenience alias for `miette::Result<T>`.
pub type KubeplanResult<T> = miette::Result<T>;
