//! Sleep quality vs total sleep (scatter)

use crate::aggregate::{
    filter_records, group_by_label, order::QUALITY_LEVELS, summarize, CategoryOrder,
    GroupSummary, Unlisted,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats;
use serde::Serialize;

/// One night placed by duration and how rested it felt
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualityPoint {
    pub total_sleep: f64,
    pub quality: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityVsSleep {
    /// Records with both total sleep and a quality answer
    pub count: usize,
    /// One point per record, in file order
    pub points: Vec<QualityPoint>,
    /// Smallest and largest total sleep
    pub sleep_range: Option<(f64, f64)>,
    /// Mean total sleep per quality level
    pub groups: Vec<GroupSummary>,
}

impl QualityVsSleep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn sleep_quality_vs_total_sleep(dataset: &Dataset) -> QualityVsSleep {
    let records = filter_records(
        dataset,
        &[NumericField::TotalSleep.into(), LabelField::SleepQuality.into()],
    );

    let points: Vec<QualityPoint> = records
        .iter()
        .filter_map(|r| {
            Some(QualityPoint {
                total_sleep: r.total_sleep?,
                quality: r.label(LabelField::SleepQuality)?.to_string(),
            })
        })
        .collect();

    let sleeps: Vec<f64> = points.iter().map(|p| p.total_sleep).collect();

    let order = CategoryOrder::new(QUALITY_LEVELS).unlisted(Unlisted::Leading);
    let groups = group_by_label(&records, LabelField::SleepQuality).ordered(&order);

    QualityVsSleep {
        count: records.len(),
        sleep_range: stats::min_max(&sleeps),
        groups: summarize(&groups, NumericField::TotalSleep),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    #[test]
    fn test_points_and_ordered_groups() {
        let ds: Dataset = vec![
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 8.0)
                .with_label(LabelField::SleepQuality, "Well Rested"),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 5.0)
                .with_label(LabelField::SleepQuality, "Tired"),
            SleepRecord::new().with_numeric(NumericField::TotalSleep, 9.0),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 6.0)
                .with_label(LabelField::SleepQuality, "Tired"),
        ]
        .into();

        let chart = sleep_quality_vs_total_sleep(&ds);

        assert_eq!(chart.count, 3);
        assert_eq!(chart.points[0].quality, "Well Rested");
        assert_eq!(chart.sleep_range, Some((5.0, 8.0)));

        let labels: Vec<&str> = chart.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Tired", "Well Rested"]);
        assert_eq!(chart.groups[0].mean, Some(5.5));
    }

    #[test]
    fn test_missing_total_sleep_excluded() {
        let quality = |q: &str| SleepRecord::new().with_label(LabelField::SleepQuality, q);
        let ds: Dataset = vec![
            quality("Tired").with_numeric(NumericField::TotalSleep, 6.0),
            quality("Tired"),
            quality("Moderately Rested").with_numeric(NumericField::TotalSleep, 7.0),
            quality("Well Rested"),
            quality("Well Rested").with_numeric(NumericField::TotalSleep, 8.5),
        ]
        .into();

        let chart = sleep_quality_vs_total_sleep(&ds);
        assert_eq!(chart.count, 3);
        assert_eq!(chart.points.len(), 3);
        assert_eq!(chart.sleep_range, Some((6.0, 8.5)));

        let counts: Vec<usize> = chart.groups.iter().map(|g| g.count).collect();
        assert_eq!(counts, vec![1, 1, 1]);
    }

    #[test]
    fn test_empty_dataset() {
        let chart = sleep_quality_vs_total_sleep(&Dataset::empty());
        assert!(chart.is_empty());
        assert!(chart.groups.is_empty());
        assert_eq!(chart.sleep_range, None);
    }
}
