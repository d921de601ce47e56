//! Sleep quality share (donut)

use crate::aggregate::{
    count_labels, filter_records, order::QUALITY_LEVELS, CategoryOrder, Unlisted,
};
use crate::dataset::{Dataset, LabelField};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualityShare {
    pub label: String,
    pub count: usize,
    /// Share of all answered nights, 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SleepQualitySummary {
    pub total: usize,
    pub shares: Vec<QualityShare>,
}

impl SleepQualitySummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

pub fn sleep_quality_summary(dataset: &Dataset) -> SleepQualitySummary {
    let records = filter_records(dataset, &[LabelField::SleepQuality.into()]);
    let total = records.len();

    let order = CategoryOrder::new(QUALITY_LEVELS).unlisted(Unlisted::Leading);
    let shares = count_labels(&records, LabelField::SleepQuality, Some(&order))
        .into_iter()
        .map(|c| QualityShare {
            percentage: c.count as f64 / total as f64 * 100.0,
            label: c.label,
            count: c.count,
        })
        .collect();

    SleepQualitySummary { total, shares }
}
