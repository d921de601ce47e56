//! Morning energy vs deep sleep (bubble scatter sized by total sleep)

use crate::aggregate::{
    filter_records, group_by_label, order::ENERGY_LEVELS, summarize, CategoryOrder,
    GroupSummary, Unlisted,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnergyPoint {
    pub deep: f64,
    pub energy: String,
    /// Drives bubble size
    pub total_sleep: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MorningEnergyVsDeep {
    pub count: usize,
    pub points: Vec<EnergyPoint>,
    /// Largest deep-sleep value
    pub deep_max: Option<f64>,
    /// Smallest and largest total sleep
    pub total_sleep_range: Option<(f64, f64)>,
    /// Total sleep range rounded to whole hours, for the size legend
    pub size_legend: Option<(f64, f64)>,
    /// Mean deep sleep per energy level
    pub groups: Vec<GroupSummary>,
}

impl MorningEnergyVsDeep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn morning_energy_vs_deep_sleep(dataset: &Dataset) -> MorningEnergyVsDeep {
    let records = filter_records(
        dataset,
        &[
            NumericField::Deep.into(),
            LabelField::MorningEnergy.into(),
            NumericField::TotalSleep.into(),
        ],
    );

    let points: Vec<EnergyPoint> = records
        .iter()
        .filter_map(|r| {
            Some(EnergyPoint {
                deep: r.deep?,
                energy: r.label(LabelField::MorningEnergy)?.to_string(),
                total_sleep: r.total_sleep?,
            })
        })
        .collect();

    let deeps: Vec<f64> = points.iter().map(|p| p.deep).collect();
    let totals: Vec<f64> = points.iter().map(|p| p.total_sleep).collect();
    let total_sleep_range = stats::min_max(&totals);

    let order = CategoryOrder::new(ENERGY_LEVELS).unlisted(Unlisted::Leading);
    let groups = group_by_label(&records, LabelField::MorningEnergy).ordered(&order);

    MorningEnergyVsDeep {
        count: records.len(),
        deep_max: stats::min_max(&deeps).map(|(_, hi)| hi),
        total_sleep_range,
        size_legend: total_sleep_range.map(|(lo, hi)| (lo.round(), hi.round())),
        groups: summarize(&groups, NumericField::Deep),
        points,
    }
}
