//! Record filtering
//!
//! A record participates in an aggregation only if every field the
//! aggregation needs is present. Missing values are never defaulted.

use crate::dataset::{Field, SleepRecord};

/// Keep the records carrying every `required` field, in input order
///
/// An empty requirement list keeps every record.
pub fn filter_records<'a, I>(records: I, required: &[Field]) -> Vec<&'a SleepRecord>
where
    I: IntoIterator<Item = &'a SleepRecord>,
{
    records
        .into_iter()
        .filter(|r| required.iter().all(|&f| r.has(f)))
        .collect()
}
