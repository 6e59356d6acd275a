//! Dependency name to version mapping for a single manifest

use serde::Serialize;
use std::collections::BTreeMap;

/// Dependencies declared by one manifest, keyed by module path
///
/// Names are unique; inserting an existing name replaces its version.
/// Iteration is in lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyTable {
    entries: BTreeMap<String, String>,
}

impl DependencyTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dependency version, returning the version it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(name.into(), version.into())
    }

    /// Returns the version recorded for a dependency
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names present in both tables, in lexicographic order
    pub fn common_names<'a>(
        &'a self,
        other: &'a DependencyTable,
    ) -> impl Iterator<Item = &'a str> {
        self.entries
            .keys()
            .filter(move |name| other.contains(name))
            .map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DependencyTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = DependencyTable::new();
        for (name, version) in iter {
            table.insert(name, version);
        }
        table
    }
}
