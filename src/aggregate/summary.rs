//! Group summaries
//!
//! Per-group statistics over a numeric field, and label frequency counts.

use super::group::Groups;
use super::order::CategoryOrder;
use crate::dataset::{LabelField, NumericField, SleepRecord};
use crate::stats;
use serde::Serialize;

/// Count, mean and spread of one numeric field within a group
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupSummary {
    pub label: String,
    /// Members in the group
    pub count: usize,
    /// `None` when no member carries the field
    pub mean: Option<f64>,
    /// Sample standard deviation; 0 for fewer than two values
    pub std_dev: f64,
}

/// Values of `field` across records, skipping records without it
pub fn numeric_values(records: &[&SleepRecord], field: NumericField) -> Vec<f64> {
    records.iter().filter_map(|r| r.numeric(field)).collect()
}

/// Summarize one group
pub fn summarize_group(label: &str, members: &[&SleepRecord], field: NumericField) -> GroupSummary {
    let values = numeric_values(members, field);
    GroupSummary {
        label: label.to_string(),
        count: members.len(),
        mean: stats::mean(&values),
        std_dev: stats::std_dev(&values),
    }
}

/// Summarize every group, keeping group order
pub fn summarize(groups: &Groups<'_, String>, field: NumericField) -> Vec<GroupSummary> {
    groups
        .iter()
        .map(|(label, members)| summarize_group(label, members, field))
        .collect()
}

/// How many records carry a label value
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Count observed values of `field`, optionally arranged by `order`
///
/// Only labels that occur are reported. Records without the label are not
/// counted.
pub fn count_labels(
    records: &[&SleepRecord],
    field: LabelField,
    order: Option<&CategoryOrder<'_>>,
) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for label in records.iter().filter_map(|r| r.label(field)) {
        match counts.iter_mut().find(|c| c.label == label) {
            Some(c) => c.count += 1,
            None => counts.push(LabelCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    match order {
        Some(order) => order.arrange(counts, |c| c.label.as_str()),
        None => counts,
    }
}

/// Count values of `field` against a fixed scale
///
/// Every level of the scale is reported, zero or not; labels outside the
/// scale follow in first-occurrence order.
pub fn count_labels_on_scale(
    records: &[&SleepRecord],
    field: LabelField,
    scale: &[&str],
) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = scale
        .iter()
        .map(|l| LabelCount {
            label: (*l).to_string(),
            count: 0,
        })
        .collect();

    for c in count_labels(records, field, None) {
        match counts.iter_mut().find(|s| s.label == c.label) {
            Some(s) => s.count = c.count,
            None => counts.push(c),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{filter_records, group_by_label, order::QUALITY_LEVELS};
    use crate::dataset::Dataset;

    fn nap_dataset() -> Dataset {
        vec![
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 6.0)
                .with_label(LabelField::NapNeed, "Yes")
                .with_label(LabelField::SleepQuality, "Tired"),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 8.0)
                .with_label(LabelField::NapNeed, "No")
                .with_label(LabelField::SleepQuality, "Well Rested"),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 7.0)
                .with_label(LabelField::NapNeed, "Yes")
                .with_label(LabelField::SleepQuality, "Tired"),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 7.5)
                .with_label(LabelField::NapNeed, "No"),
        ]
        .into()
    }

    #[test]
    fn test_summarize_groups() {
        let ds = nap_dataset();
        let records = filter_records(&ds, &[]);
        let groups = group_by_label(&records, LabelField::NapNeed);
        let summaries = summarize(&groups, NumericField::TotalSleep);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].label, "Yes");
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].mean, Some(6.5));
        assert!((summaries[0].std_dev - 0.5_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_summary_without_values_has_no_mean() {
        let record = SleepRecord::new().with_label(LabelField::Mood, "Neutral");
        let summary = summarize_group("Neutral", &[&record], NumericField::Deep);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_count_labels_observed_only() {
        let ds = nap_dataset();
        let records = filter_records(&ds, &[]);
        let order = CategoryOrder::new(QUALITY_LEVELS);
        let counts = count_labels(&records, LabelField::SleepQuality, Some(&order));

        assert_eq!(
            counts,
            vec![
                LabelCount { label: "Tired".into(), count: 2 },
                LabelCount { label: "Well Rested".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_count_labels_on_scale_keeps_zero_levels() {
        let ds = nap_dataset();
        let records = filter_records(&ds, &[]);
        let counts = count_labels_on_scale(&records, LabelField::SleepQuality, QUALITY_LEVELS);

        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(
            pairs,
            vec![("Tired", 2), ("Moderately Rested", 0), ("Well Rested", 1)]
        );
    }
}
