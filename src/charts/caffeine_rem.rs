//! Caffeine/alcohol before bed vs REM sleep (box plot)
//!
//! Boxes appear in first-occurrence order of the answers.

use crate::aggregate::{filter_records, group_by_label, numeric_values};
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats::BoxStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemBox {
    pub label: String,
    #[serde(flatten)]
    pub stats: BoxStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaffeineVsRem {
    pub count: usize,
    pub boxes: Vec<RemBox>,
    /// Highest drawn value across whiskers and outliers
    pub y_max: Option<f64>,
}

impl CaffeineVsRem {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn caffeine_vs_rem_sleep(dataset: &Dataset) -> CaffeineVsRem {
    let records = filter_records(
        dataset,
        &[NumericField::Rem.into(), LabelField::CaffeineBeforeBed.into()],
    );

    let boxes: Vec<RemBox> = group_by_label(&records, LabelField::CaffeineBeforeBed)
        .iter()
        .filter_map(|(label, members)| {
            let stats = BoxStats::compute(&numeric_values(members, NumericField::Rem))?;
            Some(RemBox {
                label: label.clone(),
                stats,
            })
        })
        .collect();

    let y_max = boxes
        .iter()
        .map(|b| b.stats.extent_max())
        .reduce(f64::max);

    CaffeineVsRem {
        count: records.len(),
        boxes,
        y_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    fn rec(answer: &str, rem: f64) -> SleepRecord {
        SleepRecord::new()
            .with_numeric(NumericField::Rem, rem)
            .with_label(LabelField::CaffeineBeforeBed, answer)
    }

    #[test]
    fn test_box_per_answer() {
        let mut records: Vec<SleepRecord> = (1..=9).map(|v| rec("No", f64::from(v))).collect();
        records.extend([rec("Yes", 1.0), rec("Yes", 1.1), rec("Yes", 1.2), rec("Yes", 4.0)]);
        let ds: Dataset = records.into();

        let chart = caffeine_vs_rem_sleep(&ds);
        assert_eq!(chart.count, 13);
        assert_eq!(chart.boxes.len(), 2);

        let no = &chart.boxes[0];
        assert_eq!(no.label, "No");
        assert_eq!(no.stats.median, 5.0);
        assert_eq!((no.stats.lower_fence, no.stats.upper_fence), (1.0, 9.0));

        let yes = &chart.boxes[1];
        assert_eq!(yes.stats.count, 4);
        assert_eq!(yes.stats.outliers, vec![4.0]);

        assert_eq!(chart.y_max, Some(9.0));
    }

    #[test]
    fn test_empty() {
        let chart = caffeine_vs_rem_sleep(&Dataset::empty());
        assert!(chart.is_empty());
        assert_eq!(chart.y_max, None);
    }
}
