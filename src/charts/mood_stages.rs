//! Mood after waking vs sleep stages (stacked bars)

use crate::aggregate::{
    filter_records, group_by_label, order::MOOD_LEVELS, stage_means, CategoryOrder, StageMeans,
    Unlisted,
};
use crate::dataset::{Dataset, LabelField, NumericField};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoodStages {
    pub mood: String,
    #[serde(flatten)]
    pub stages: StageMeans,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodVsSleepStages {
    pub count: usize,
    pub moods: Vec<MoodStages>,
    /// Tallest stack
    pub stack_max: Option<f64>,
}

impl MoodVsSleepStages {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn mood_vs_sleep_stages(dataset: &Dataset) -> MoodVsSleepStages {
    let records = filter_records(
        dataset,
        &[
            NumericField::Rem.into(),
            NumericField::Deep.into(),
            NumericField::Core.into(),
            LabelField::Mood.into(),
        ],
    );

    let order = CategoryOrder::new(MOOD_LEVELS).unlisted(Unlisted::Leading);
    let moods: Vec<MoodStages> = group_by_label(&records, LabelField::Mood)
        .ordered(&order)
        .iter()
        .filter_map(|(mood, members)| {
            Some(MoodStages {
                mood: mood.clone(),
                stages: stage_means(members)?,
            })
        })
        .collect();

    let stack_max = moods.iter().map(|m| m.stages.total()).reduce(f64::max);

    MoodVsSleepStages {
        count: records.len(),
        moods,
        stack_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    fn rec(mood: &str, rem: f64, deep: f64, core: f64) -> SleepRecord {
        SleepRecord::new()
            .with_label(LabelField::Mood, mood)
            .with_numeric(NumericField::Rem, rem)
            .with_numeric(NumericField::Deep, deep)
            .with_numeric(NumericField::Core, core)
    }

    #[test]
    fn test_stage_means_per_mood() {
        let ds: Dataset = vec![
            rec("Positive", 2.0, 1.0, 4.0),
            rec("Negative", 1.0, 0.5, 3.0),
            rec("Positive", 1.0, 1.0, 5.0),
            rec("Grumpy", 0.5, 0.5, 2.0),
            SleepRecord::new()
                .with_label(LabelField::Mood, "Neutral")
                .with_numeric(NumericField::Rem, 1.0),
        ]
        .into();

        let chart = mood_vs_sleep_stages(&ds);
        assert_eq!(chart.count, 4);

        let moods: Vec<&str> = chart.moods.iter().map(|m| m.mood.as_str()).collect();
        assert_eq!(moods, vec!["Grumpy", "Negative", "Positive"]);

        let positive = &chart.moods[2].stages;
        assert_eq!(positive.count, 2);
        assert_eq!((positive.rem, positive.deep, positive.core), (1.5, 1.0, 4.5));
        assert_eq!(chart.stack_max, Some(7.0));
    }
}
