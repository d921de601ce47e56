//! Nap need vs sleep duration (mean bars with error bars and quality mix)

use crate::aggregate::{
    count_labels, filter_records, group_by_label, order::QUALITY_LEVELS, summarize_group,
    CategoryOrder, GroupSummary, LabelCount, Unlisted,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use serde::Serialize;

/// `Yes` leads; any other answer follows in the order it was first seen
const NAP_ORDER: &[&str] = &["Yes"];

#[derive(Debug, Clone, Serialize)]
pub struct NapGroup {
    #[serde(flatten)]
    pub summary: GroupSummary,
    /// Quality answers seen in this group, in quality order
    pub quality_counts: Vec<LabelCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NapNeedVsSleep {
    pub count: usize,
    pub groups: Vec<NapGroup>,
    /// Top of the tallest error bar
    pub y_max: Option<f64>,
}

impl NapNeedVsSleep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn nap_need_vs_sleep(dataset: &Dataset) -> NapNeedVsSleep {
    let records = filter_records(
        dataset,
        &[NumericField::TotalSleep.into(), LabelField::NapNeed.into()],
    );

    let quality_order = CategoryOrder::new(QUALITY_LEVELS).unlisted(Unlisted::Trailing);
    let groups: Vec<NapGroup> = group_by_label(&records, LabelField::NapNeed)
        .ordered(&CategoryOrder::new(NAP_ORDER).unlisted(Unlisted::Trailing))
        .iter()
        .map(|(label, members)| NapGroup {
            summary: summarize_group(label, members, NumericField::TotalSleep),
            quality_counts: count_labels(members, LabelField::SleepQuality, Some(&quality_order)),
        })
        .collect();

    let y_max = groups
        .iter()
        .filter_map(|g| g.summary.mean.map(|m| m + g.summary.std_dev))
        .reduce(f64::max);

    NapNeedVsSleep {
        count: records.len(),
        groups,
        y_max,
    }
}
