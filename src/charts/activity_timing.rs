//! Activity timing vs sleep duration (bars with per-night dots)
//!
//! Only the three canonical timings are charted; other answers are left out.

use crate::aggregate::{
    count_labels_on_scale, filter_records, group_by_label, numeric_values,
    order::{ACTIVITY_TIMINGS, QUALITY_LEVELS},
    CategoryOrder, LabelCount,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimingPoint {
    pub total_sleep: f64,
    pub quality: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimingGroup {
    pub timing: String,
    pub count: usize,
    pub mean_sleep: f64,
    /// Every quality level, including those with no nights
    pub quality_counts: Vec<LabelCount>,
    pub points: Vec<TimingPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityTimingVsSleep {
    pub count: usize,
    pub groups: Vec<TimingGroup>,
}

impl ActivityTimingVsSleep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn activity_timing_vs_sleep(dataset: &Dataset) -> ActivityTimingVsSleep {
    let records = filter_records(
        dataset,
        &[
            LabelField::ActivityTiming.into(),
            NumericField::TotalSleep.into(),
            LabelField::SleepQuality.into(),
        ],
    );

    let order = CategoryOrder::new(ACTIVITY_TIMINGS);
    let groups = group_by_label(&records, LabelField::ActivityTiming).ordered(&order);

    let groups: Vec<TimingGroup> = groups
        .iter()
        .filter_map(|(timing, members)| {
            let mean_sleep = stats::mean(&numeric_values(members, NumericField::TotalSleep))?;
            let points = members
                .iter()
                .filter_map(|r| {
                    Some(TimingPoint {
                        total_sleep: r.total_sleep?,
                        quality: r.label(LabelField::SleepQuality)?.to_string(),
                    })
                })
                .collect();

            Some(TimingGroup {
                timing: timing.clone(),
                count: members.len(),
                mean_sleep,
                quality_counts: count_labels_on_scale(
                    members,
                    LabelField::SleepQuality,
                    QUALITY_LEVELS,
                ),
                points,
            })
        })
        .collect();

    // unlisted timings are dropped, so count what was grouped
    ActivityTimingVsSleep {
        count: groups.iter().map(|g| g.count).sum(),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    fn rec(timing: &str, total: f64, quality: &str) -> SleepRecord {
        SleepRecord::new()
            .with_label(LabelField::ActivityTiming, timing)
            .with_numeric(NumericField::TotalSleep, total)
            .with_label(LabelField::SleepQuality, quality)
    }

    #[test]
    fn test_canonical_timings_only() {
        let ds: Dataset = vec![
            rec("Evening", 6.0, "Tired"),
            rec("Morning", 8.0, "Well Rested"),
            rec("Night", 5.0, "Tired"),
            rec("Morning", 7.0, "Tired"),
        ]
        .into();

        let chart = activity_timing_vs_sleep(&ds);
        assert_eq!(chart.count, 3);

        let timings: Vec<&str> = chart.groups.iter().map(|g| g.timing.as_str()).collect();
        assert_eq!(timings, vec!["Morning", "Evening"]);

        let morning = &chart.groups[0];
        assert_eq!(morning.count, 2);
        assert_eq!(morning.mean_sleep, 7.5);
        assert_eq!(morning.points.len(), 2);

        let counts: Vec<usize> = morning.quality_counts.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 0, 1]);
    }

    #[test]
    fn test_unlisted_timings_not_counted() {
        let ds: Dataset = vec![
            rec("Morning", 7.0, "Tired"),
            rec("Night", 5.0, "Tired"),
            rec("Night", 6.0, "Well Rested"),
        ]
        .into();

        let chart = activity_timing_vs_sleep(&ds);
        assert_eq!(chart.count, 1);
        assert_eq!(chart.groups.len(), 1);
        assert_eq!(
            chart.count,
            chart.groups.iter().map(|g| g.count).sum::<usize>()
        );

        let only_night: Dataset = vec![rec("Night", 5.0, "Tired")].into();
        assert!(activity_timing_vs_sleep(&only_night).is_empty());
    }
}
