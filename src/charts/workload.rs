//! Workload vs sleep duration (mean with standard-deviation error bars)

use crate::aggregate::{
    filter_records, group_by_label, numeric_values, order::WORKLOAD_LEVELS, summarize_group,
    CategoryOrder, GroupSummary, Unlisted,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkloadPoint {
    pub total_sleep: f64,
    /// Not required by this chart, so it may be absent
    pub quality: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkloadGroup {
    #[serde(flatten)]
    pub summary: GroupSummary,
    pub points: Vec<WorkloadPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkloadVsSleep {
    pub count: usize,
    pub groups: Vec<WorkloadGroup>,
    /// Longest night in the chart
    pub sleep_max: Option<f64>,
}

impl WorkloadVsSleep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn workload_vs_sleep(dataset: &Dataset) -> WorkloadVsSleep {
    let records = filter_records(
        dataset,
        &[NumericField::TotalSleep.into(), LabelField::Workload.into()],
    );

    let order = CategoryOrder::new(WORKLOAD_LEVELS).unlisted(Unlisted::Leading);
    let groups = group_by_label(&records, LabelField::Workload)
        .ordered(&order)
        .iter()
        .map(|(label, members)| WorkloadGroup {
            summary: summarize_group(label, members, NumericField::TotalSleep),
            points: members
                .iter()
                .filter_map(|r| {
                    Some(WorkloadPoint {
                        total_sleep: r.total_sleep?,
                        quality: r.label(LabelField::SleepQuality).map(str::to_string),
                    })
                })
                .collect(),
        })
        .collect();

    let sleep_max = stats::min_max(&numeric_values(&records, NumericField::TotalSleep))
        .map(|(_, hi)| hi);

    WorkloadVsSleep {
        count: records.len(),
        groups,
        sleep_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    fn rec(workload: &str, total: f64) -> SleepRecord {
        SleepRecord::new()
            .with_label(LabelField::Workload, workload)
            .with_numeric(NumericField::TotalSleep, total)
    }

    #[test]
    fn test_error_bars_per_workload() {
        let ds: Dataset = vec![
            rec("High Work", 5.0),
            rec("Low Work", 8.0),
            rec("High Work", 7.0),
            rec("Medium Work", 7.0),
            rec("Low Work", 8.0),
        ]
        .into();

        let chart = workload_vs_sleep(&ds);
        assert_eq!(chart.count, 5);
        assert_eq!(chart.sleep_max, Some(8.0));

        let labels: Vec<&str> = chart.groups.iter().map(|g| g.summary.label.as_str()).collect();
        assert_eq!(labels, vec!["Low Work", "Medium Work", "High Work"]);

        // identical values have no spread
        assert_eq!(chart.groups[0].summary.std_dev, 0.0);
        // a single night has no spread either
        assert_eq!(chart.groups[1].summary.std_dev, 0.0);

        let high = &chart.groups[2].summary;
        assert_eq!(high.mean, Some(6.0));
        assert!((high.std_dev - 2.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(chart.groups[2].points[0].quality, None);
    }
}
