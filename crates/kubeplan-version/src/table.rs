//! Compatibility tables keyed by Kubernetes minor version.

use std::collections::BTreeMap;

/// Officially supported etcd versions keyed by Kubernetes minor release.
const SUPPORTED_ETCD: &[(u8, &str)] = &[
    (31, "3.5.21-0"),
    (32, "3.5.21-0"),
    (33, "3.5.21-0"),
    (34, "3.6.4-0"),
];

/// Sparse mapping from a minor version to the supported version string of a
/// dependent component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkewTable {
    entries: BTreeMap<u8, String>,
}

impl SkewTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in etcd table.
    pub fn supported_etcd() -> Self {
        SUPPORTED_ETCD.iter().copied().collect()
    }

    /// Insert or replace the entry for `minor`, returning the previous one.
    pub fn insert(&mut self, minor: u8, version: impl Into<String>) -> Option<String> {
        self.entries.insert(minor, version.into())
    }

    pub fn get(&self, minor: u8) -> Option<&str> {
        self.entries.get(&minor).map(String::as_str)
    }

    /// Entry with the lowest key.
    pub fn first(&self) -> Option<(u8, &str)> {
        self.entries
            .first_key_value()
            .map(|(k, v)| (*k, v.as_str()))
    }

    /// Entry with the highest key.
    pub fn last(&self) -> Option<(u8, &str)> {
        self.entries.last_key_value().map(|(k, v)| (*k, v.as_str()))
    }

    /// The closest keys strictly below and strictly above `minor`.
    pub fn neighbours(&self, minor: u8) -> (Option<u8>, Option<u8>) {
        let below = self.entries.range(..minor).next_back().map(|(k, _)| *k);
        let above = self
            .entries
            .range(minor.saturating_add(1)..)
            .next()
            .map(|(k, _)| *k)
            .filter(|k| *k > minor);
        (below, above)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(u8, S)> for SkewTable {
    fn from_iter<I: IntoIterator<Item = (u8, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}
