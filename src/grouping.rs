//! Ordered grouping of flat (key, value) records
//!
//! Both commands reshape the flat `results` array the API returns into
//! name-keyed groups: environment name -> environment IDs for `listenvs`,
//! host group title -> host names for `parseenv`. The ordering contract is
//! what downstream output depends on, so it is made explicit here instead
//! of leaning on a particular map implementation.

use std::collections::HashMap;

/// An ordered mapping from group key to an append-only list of values.
///
/// Keys keep the order of their first occurrence; each key's values keep
/// the order in which they were pushed. Duplicate keys accumulate.
#[derive(Debug, Clone, Default)]
pub struct GroupedResult<V> {
    groups: Vec<(String, Vec<V>)>,
    index: HashMap<String, usize>,
}

impl<V> GroupedResult<V> {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a value to the group for `key`, creating the group on first use
    pub fn push(&mut self, key: &str, value: V) {
        match self.index.get(key) {
            Some(&pos) => self.groups[pos].1.push(value),
            None => {
                self.index.insert(key.to_string(), self.groups.len());
                self.groups.push((key.to_string(), vec![value]));
            }
        }
    }

    /// Iterate groups in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[V])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no record has been pushed
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of values across all groups
    pub fn total_values(&self) -> usize {
        self.groups.iter().map(|(_, v)| v.len()).sum()
    }

    /// Values for a key, if present
    pub fn get(&self, key: &str) -> Option<&[V]> {
        self.index.get(key).map(|&pos| self.groups[pos].1.as_slice())
    }
}

/// Group a sequence of (key, value) pairs, preserving input order.
///
/// Pure and deterministic: every pair contributes exactly one value to
/// exactly one group, nothing is dropped or duplicated.
pub fn group<V>(pairs: impl IntoIterator<Item = (String, V)>) -> GroupedResult<V> {
    let mut grouped = GroupedResult::new();
    for (key, value) in pairs {
        grouped.push(&key, value);
    }
    grouped
}
