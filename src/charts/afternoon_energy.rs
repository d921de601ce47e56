//! Afternoon energy vs total sleep (count-weighted scatter)
//!
//! Nights are binned to the nearest half hour per energy level; the mean
//! line only covers the three canonical energy levels.

use crate::aggregate::{
    bucket_counts, filter_records, group_by_label, order::ENERGY_LEVELS, summarize, Bucket,
    CategoryOrder, GroupSummary,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AfternoonEnergyVsSleep {
    pub count: usize,
    pub buckets: Vec<Bucket>,
    /// Largest bucket, drives marker size
    pub max_bucket_count: usize,
    /// Smallest and largest rounded sleep value
    pub bucket_range: Option<(f64, f64)>,
    /// Mean total sleep per energy level present in the data
    pub means: Vec<GroupSummary>,
}

impl AfternoonEnergyVsSleep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn afternoon_energy_vs_sleep(dataset: &Dataset) -> AfternoonEnergyVsSleep {
    let records = filter_records(
        dataset,
        &[NumericField::TotalSleep.into(), LabelField::AfternoonEnergy.into()],
    );

    let buckets = bucket_counts(&records, LabelField::AfternoonEnergy, NumericField::TotalSleep);
    let max_bucket_count = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    let values: Vec<f64> = buckets.iter().map(|b| b.value).collect();

    let groups = group_by_label(&records, LabelField::AfternoonEnergy)
        .ordered(&CategoryOrder::new(ENERGY_LEVELS));

    AfternoonEnergyVsSleep {
        count: records.len(),
        max_bucket_count,
        bucket_range: stats::min_max(&values),
        means: summarize(&groups, NumericField::TotalSleep),
        buckets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    fn rec(energy: &str, total: f64) -> SleepRecord {
        SleepRecord::new()
            .with_label(LabelField::AfternoonEnergy, energy)
            .with_numeric(NumericField::TotalSleep, total)
    }

    #[test]
    fn test_buckets_and_means() {
        let ds: Dataset = vec![
            rec("High", 7.2),
            rec("Low", 5.9),
            rec("High", 6.8),
            rec("Sluggish", 4.0),
            rec("High", 8.0),
        ]
        .into();

        let chart = afternoon_energy_vs_sleep(&ds);
        assert_eq!(chart.count, 5);
        assert_eq!(chart.buckets.len(), 4);
        assert_eq!(chart.max_bucket_count, 2);
        assert_eq!(chart.bucket_range, Some((4.0, 8.0)));

        let total: usize = chart.buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, chart.count);

        // Moderate never occurs and unlisted answers have no mean line
        let labels: Vec<&str> = chart.means.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Low", "High"]);
        assert_eq!(chart.means[1].count, 3);
    }

    #[test]
    fn test_empty() {
        let chart = afternoon_energy_vs_sleep(&Dataset::empty());
        assert!(chart.is_empty());
        assert_eq!(chart.max_bucket_count, 0);
        assert!(chart.means.is_empty());
    }
}
