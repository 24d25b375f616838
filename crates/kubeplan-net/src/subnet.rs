//! Comma-separated CIDR lists.

use std::fmt;
use std::str::FromStr;

use ipnet::IpNet;
use kubeplan_util::errors::{KubeplanError, Result};

/// An ordered, non-empty set of networks parsed from a CIDR list.
///
/// The first network is the primary subnet; the remaining ones (typically the
/// other address family of a dual-stack cluster) are kept in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrSet {
    primary: IpNet,
    secondary: Vec<IpNet>,
}

impl CidrSet {
    /// Parse `10.96.0.0/12,fd00::/108`-style input.
    ///
    /// Segments are trimmed and host bits are masked off, so `10.96.0.1/12`
    /// yields `10.96.0.0/12`.
    pub fn parse(list: &str) -> Result<Self> {
        if list.trim().is_empty() {
            return Err(KubeplanError::EmptyInput);
        }

        let mut networks = list
            .split(',')
            .map(|segment| parse_network(segment.trim()))
            .collect::<Result<Vec<_>>>()?
            .into_iter();

        let primary = networks.next().ok_or(KubeplanError::EmptyInput)?;
        Ok(Self {
            primary,
            secondary: networks.collect(),
        })
    }

    pub fn primary(&self) -> IpNet {
        self.primary
    }

    pub fn secondary(&self) -> &[IpNet] {
        &self.secondary
    }

    /// All networks, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &IpNet> {
        std::iter::once(&self.primary).chain(self.secondary.iter())
    }

    pub fn len(&self) -> usize {
        1 + self.secondary.len()
    }

    /// Always false; a set holds at least its primary network.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the set contains both an IPv4 and an IPv6 network.
    pub fn is_dual_stack(&self) -> bool {
        let v4 = self.iter().any(|n| matches!(n, IpNet::V4(_)));
        let v6 = self.iter().any(|n| matches!(n, IpNet::V6(_)));
        v4 && v6
    }
}

impl fmt::Display for CidrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        for net in &self.secondary {
            write!(f, ",{net}")?;
        }
        Ok(())
    }
}

impl FromStr for CidrSet {
    type Err = KubeplanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_network(segment: &str) -> Result<IpNet> {
    segment
        .parse::<IpNet>()
        .map(|net| net.trunc())
        .map_err(|e| KubeplanError::InvalidCidr {
            input: segment.to_string(),
            message: e.to_string(),
        })
}

/// The primary (first) network of a CIDR list.
pub fn parse_primary_subnet(list: &str) -> Result<IpNet> {
    CidrSet::parse(list).map(|set| set.primary())
}
