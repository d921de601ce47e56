//! Aggregation Engine
//!
//! Holds the loaded [`Dataset`] snapshot and runs chart recipes and ad-hoc
//! aggregations against it. The engine never mutates the snapshot and keeps
//! no cache: every call recomputes from the records.
//!
//! # Pipeline
//!
//! ```text
//! Dataset → Filter → Group → (Order) → Summarize → Chart output
//! ```

use crate::aggregate::{self, CategoryOrder, GroupSummary, Groups};
use crate::charts::{ChartData, ChartKind};
use crate::dataset::{Dataset, Field, LabelField, NumericField, SleepRecord};
use std::time::Instant;

/// Pure aggregation over one immutable dataset
#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    dataset: Dataset,
}

impl AggregationEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Compute one chart
    pub fn chart(&self, kind: ChartKind) -> ChartData {
        let start = Instant::now();
        let data = kind.compute(&self.dataset);

        tracing::debug!(
            chart = kind.slug(),
            records = self.dataset.len(),
            participating = data.count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Chart computed"
        );

        data
    }

    /// Compute every chart in dashboard order
    pub fn all_charts(&self) -> Vec<ChartData> {
        ChartKind::all().iter().map(|&kind| self.chart(kind)).collect()
    }

    /// Records carrying every `required` field
    pub fn filter(&self, required: &[Field]) -> Vec<&SleepRecord> {
        aggregate::filter_records(&self.dataset, required)
    }

    /// Filter, then group the survivors by a label
    ///
    /// The label itself is always required, so no group has an empty key.
    pub fn group(&self, required: &[Field], by: LabelField) -> Vec<(String, usize)> {
        let records = self.filter(&with_label(required, by));
        aggregate::group_by_label(&records, by)
            .iter()
            .map(|(label, members)| (label.clone(), members.len()))
            .collect()
    }

    /// Mean and spread of `value` per `by` label
    ///
    /// Records need both fields. Groups come out in `order` when given,
    /// first-occurrence order otherwise.
    pub fn summarize_by(
        &self,
        by: LabelField,
        value: NumericField,
        order: Option<&CategoryOrder<'_>>,
    ) -> Vec<GroupSummary> {
        let records = self.filter(&[value.into(), by.into()]);
        let groups: Groups<'_, String> = aggregate::group_by_label(&records, by);
        let groups = match order {
            Some(order) => groups.ordered(order),
            None => groups,
        };
        aggregate::summarize(&groups, value)
    }
}

impl From<Dataset> for AggregationEngine {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}

fn with_label(required: &[Field], label: LabelField) -> Vec<Field> {
    let mut fields = required.to_vec();
    let label: Field = label.into();
    if !fields.contains(&label) {
        fields.push(label);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{order::ENERGY_LEVELS, Unlisted};

    fn engine() -> AggregationEngine {
        let records = vec![
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 7.0)
                .with_label(LabelField::MorningEnergy, "High"),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 5.0)
                .with_label(LabelField::MorningEnergy, "Low"),
            SleepRecord::new().with_label(LabelField::MorningEnergy, "High"),
            SleepRecord::new()
                .with_numeric(NumericField::TotalSleep, 8.0)
                .with_label(LabelField::MorningEnergy, "High"),
            SleepRecord::new().with_numeric(NumericField::TotalSleep, 6.0),
        ];
        AggregationEngine::new(Dataset::new(records))
    }

    #[test]
    fn test_filter_counts_non_null() {
        let engine = engine();
        assert_eq!(engine.filter(&[NumericField::TotalSleep.into()]).len(), 4);
        assert_eq!(engine.filter(&[]).len(), 5);
    }

    #[test]
    fn test_group_is_lossless() {
        let engine = engine();
        let groups = engine.group(&[NumericField::TotalSleep.into()], LabelField::MorningEnergy);
        assert_eq!(groups, vec![("High".to_string(), 2), ("Low".to_string(), 1)]);

        let total: usize = groups.iter().map(|(_, n)| n).sum();
        let filtered = engine.filter(&[
            NumericField::TotalSleep.into(),
            LabelField::MorningEnergy.into(),
        ]);
        assert_eq!(total, filtered.len());
    }

    #[test]
    fn test_summarize_by_with_order() {
        let engine = engine();
        let order = CategoryOrder::new(ENERGY_LEVELS).unlisted(Unlisted::Drop);
        let summaries =
            engine.summarize_by(LabelField::MorningEnergy, NumericField::TotalSleep, Some(&order));

        let labels: Vec<&str> = summaries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Low", "High"]);
        assert_eq!(summaries[1].mean, Some(7.5));
    }

    #[test]
    fn test_all_charts_in_dashboard_order() {
        let charts = engine().all_charts();
        assert_eq!(charts.len(), 10);
        for (data, kind) in charts.iter().zip(ChartKind::all()) {
            assert_eq!(data.kind(), *kind);
        }
    }
}
