//! Count-weighted scatter buckets
//!
//! Records are binned by a label and a numeric value rounded to the nearest
//! half unit; each bin reports how many records fell into it.

use crate::dataset::{LabelField, NumericField, SleepRecord};
use crate::stats::round_to_half;
use serde::Serialize;
use std::collections::HashMap;

/// One (label, rounded value) bin
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bucket {
    pub label: String,
    /// Value rounded to the nearest 0.5
    pub value: f64,
    pub count: usize,
}

/// Bin records by `label` and half-rounded `value`, in first-occurrence order
///
/// Records missing either field are skipped.
pub fn bucket_counts(
    records: &[&SleepRecord],
    label: LabelField,
    value: NumericField,
) -> Vec<Bucket> {
    let mut index: HashMap<(String, u64), usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for record in records {
        let (Some(l), Some(v)) = (record.label(label), record.numeric(value)) else {
            continue;
        };
        let rounded = round_to_half(v);
        let key = (l.to_string(), rounded.to_bits());

        match index.get(&key) {
            Some(&i) => buckets[i].count += 1,
            None => {
                index.insert(key, buckets.len());
                buckets.push(Bucket {
                    label: l.to_string(),
                    value: rounded,
                    count: 1,
                });
            }
        }
    }

    buckets
}
