//! Grouping
//!
//! Groups keep first-occurrence order of their keys, and every input record
//! lands in exactly one group.

use super::order::CategoryOrder;
use crate::dataset::{LabelField, SleepRecord};
use std::collections::HashMap;
use std::hash::Hash;

/// Records partitioned by key, in first-occurrence key order
#[derive(Debug, Clone)]
pub struct Groups<'a, K> {
    entries: Vec<(K, Vec<&'a SleepRecord>)>,
}

impl<'a, K> Groups<'a, K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a SleepRecord])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Total number of records across all groups
    pub fn total_members(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn into_vec(self) -> Vec<(K, Vec<&'a SleepRecord>)> {
        self.entries
    }
}

impl<'a, K: PartialEq> Groups<'a, K> {
    /// Members of the group keyed by `key`
    pub fn get(&self, key: &K) -> Option<&[&'a SleepRecord]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }
}

impl<'a> Groups<'a, String> {
    /// Reorder groups by a canonical label order
    pub fn ordered(self, order: &CategoryOrder<'_>) -> Self {
        Self {
            entries: order.arrange(self.entries, |(k, _)| k.as_str()),
        }
    }
}

impl<'a, K> IntoIterator for Groups<'a, K> {
    type Item = (K, Vec<&'a SleepRecord>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Partition records by an extracted key
pub fn group_by<'a, K, F>(records: &[&'a SleepRecord], mut key: F) -> Groups<'a, K>
where
    K: Eq + Hash + Clone,
    F: FnMut(&SleepRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut entries: Vec<(K, Vec<&'a SleepRecord>)> = Vec::new();

    for &record in records {
        let k = key(record);
        match index.get(&k) {
            Some(&i) => entries[i].1.push(record),
            None => {
                index.insert(k.clone(), entries.len());
                entries.push((k, vec![record]));
            }
        }
    }

    Groups { entries }
}

/// Partition records by a label field
///
/// Records without the label group under the empty string; filter first to
/// exclude them.
pub fn group_by_label<'a>(records: &[&'a SleepRecord], field: LabelField) -> Groups<'a, String> {
    group_by(records, |r| r.label(field).unwrap_or_default().to_string())
}
