//! Core data types for the sleep dataset
//!
//! This module defines the fundamental types every aggregation works on:
//! - `SleepRecord`: one daily survey observation
//! - `NumericField` / `LabelField` / `Field`: typed field selectors
//! - `Dataset`: an immutable, shared snapshot of all records
//! - `FieldCoverage`: how many records carry each field

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Numeric measurement columns (all in hours)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    /// Total time asleep
    TotalSleep,
    /// REM stage
    Rem,
    /// Deep stage
    Deep,
    /// Core (light) stage
    Core,
    /// Time awake during the night
    Awake,
}

impl NumericField {
    /// Get all numeric fields for iteration
    pub fn all() -> &'static [NumericField] {
        &[
            NumericField::TotalSleep,
            NumericField::Rem,
            NumericField::Deep,
            NumericField::Core,
            NumericField::Awake,
        ]
    }

    /// Exact CSV header this field is read from
    pub fn column(&self) -> &'static str {
        match self {
            NumericField::TotalSleep => "Total Sleep",
            NumericField::Rem => "Sleep Analysis [REM] (hr)",
            NumericField::Deep => "Sleep Analysis [Deep] (hr)",
            NumericField::Core => "Sleep Analysis [Core] (hr)",
            NumericField::Awake => "Sleep Analysis [Awake] (hr)",
        }
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericField::TotalSleep => write!(f, "total_sleep"),
            NumericField::Rem => write!(f, "rem"),
            NumericField::Deep => write!(f, "deep"),
            NumericField::Core => write!(f, "core"),
            NumericField::Awake => write!(f, "awake"),
        }
    }
}

/// Categorical survey answers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LabelField {
    /// How well-rested after waking up
    SleepQuality,
    /// Energy level in the morning
    MorningEnergy,
    /// Energy level in the afternoon
    AfternoonEnergy,
    /// Mood after waking up
    Mood,
    /// Caffeine or alcohol before bed (yes/no)
    CaffeineBeforeBed,
    /// Time of day physical activity was done
    ActivityTiming,
    /// Amount of work done
    Workload,
    /// Felt the need to nap (yes/no)
    NapNeed,
    /// Dinner time as a loosely formatted clock string
    DinnerTime,
}

impl LabelField {
    /// Get all label fields for iteration
    pub fn all() -> &'static [LabelField] {
        &[
            LabelField::SleepQuality,
            LabelField::MorningEnergy,
            LabelField::AfternoonEnergy,
            LabelField::Mood,
            LabelField::CaffeineBeforeBed,
            LabelField::ActivityTiming,
            LabelField::Workload,
            LabelField::NapNeed,
            LabelField::DinnerTime,
        ]
    }

    /// Exact CSV header this field is read from
    pub fn column(&self) -> &'static str {
        match self {
            LabelField::SleepQuality => "How well-rested do you feel upon waking up?",
            LabelField::MorningEnergy => "How was your energy level in the Morning?",
            LabelField::AfternoonEnergy => "How was your energy level in the Afternoon?",
            LabelField::Mood => "How was your mood after waking up?",
            LabelField::CaffeineBeforeBed => "Did you consume caffeine or alcohol before bed?",
            LabelField::ActivityTiming => {
                "If you have done any physical activity. What time have you done?"
            }
            LabelField::Workload => "If Yes, you worked today. How much work you did?",
            LabelField::NapNeed => "Did you feel the need to take a nap during the day?",
            LabelField::DinnerTime => "What time you had Dinner?",
        }
    }
}

impl std::fmt::Display for LabelField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelField::SleepQuality => write!(f, "sleep_quality"),
            LabelField::MorningEnergy => write!(f, "morning_energy"),
            LabelField::AfternoonEnergy => write!(f, "afternoon_energy"),
            LabelField::Mood => write!(f, "mood"),
            LabelField::CaffeineBeforeBed => write!(f, "caffeine_before_bed"),
            LabelField::ActivityTiming => write!(f, "activity_timing"),
            LabelField::Workload => write!(f, "workload"),
            LabelField::NapNeed => write!(f, "nap_need"),
            LabelField::DinnerTime => write!(f, "dinner_time"),
        }
    }
}

/// Any field a filter can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Numeric(NumericField),
    Label(LabelField),
}

impl From<NumericField> for Field {
    fn from(field: NumericField) -> Self {
        Field::Numeric(field)
    }
}

impl From<LabelField> for Field {
    fn from(field: LabelField) -> Self {
        Field::Label(field)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Numeric(n) => n.fmt(f),
            Field::Label(l) => l.fmt(f),
        }
    }
}

/// One daily survey observation
///
/// Numeric fields are `None` when unrecorded; label fields are `None` when
/// the answer was left blank. Neither is ever defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SleepRecord {
    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    pub total_sleep: Option<f64>,
    #[serde(default)]
    pub rem: Option<f64>,
    #[serde(default)]
    pub deep: Option<f64>,
    #[serde(default)]
    pub core: Option<f64>,
    #[serde(default)]
    pub awake: Option<f64>,

    #[serde(default)]
    pub sleep_quality: Option<String>,
    #[serde(default)]
    pub morning_energy: Option<String>,
    #[serde(default)]
    pub afternoon_energy: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub caffeine_before_bed: Option<String>,
    #[serde(default)]
    pub activity_timing: Option<String>,
    #[serde(default)]
    pub workload: Option<String>,
    #[serde(default)]
    pub nap_need: Option<String>,
    #[serde(default)]
    pub dinner_time: Option<String>,
}

impl SleepRecord {
    /// Create an empty record (every field unrecorded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a numeric field
    pub fn with_numeric(mut self, field: NumericField, value: f64) -> Self {
        self.set_numeric(field, Some(value));
        self
    }

    /// Builder method: set a label field
    pub fn with_label(mut self, field: LabelField, value: impl Into<String>) -> Self {
        self.set_label(field, Some(value.into()));
        self
    }

    /// Builder method: set the survey date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Read a numeric field
    pub fn numeric(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::TotalSleep => self.total_sleep,
            NumericField::Rem => self.rem,
            NumericField::Deep => self.deep,
            NumericField::Core => self.core,
            NumericField::Awake => self.awake,
        }
    }

    /// Read a label field; blank answers read as `None`
    pub fn label(&self, field: LabelField) -> Option<&str> {
        let value = match field {
            LabelField::SleepQuality => &self.sleep_quality,
            LabelField::MorningEnergy => &self.morning_energy,
            LabelField::AfternoonEnergy => &self.afternoon_energy,
            LabelField::Mood => &self.mood,
            LabelField::CaffeineBeforeBed => &self.caffeine_before_bed,
            LabelField::ActivityTiming => &self.activity_timing,
            LabelField::Workload => &self.workload,
            LabelField::NapNeed => &self.nap_need,
            LabelField::DinnerTime => &self.dinner_time,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether the record carries a usable value for `field`
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Numeric(n) => self.numeric(n).is_some(),
            Field::Label(l) => self.label(l).is_some(),
        }
    }

    pub fn set_numeric(&mut self, field: NumericField, value: Option<f64>) {
        let slot = match field {
            NumericField::TotalSleep => &mut self.total_sleep,
            NumericField::Rem => &mut self.rem,
            NumericField::Deep => &mut self.deep,
            NumericField::Core => &mut self.core,
            NumericField::Awake => &mut self.awake,
        };
        *slot = value;
    }

    /// Set a label field, normalizing blank strings to `None`
    pub fn set_label(&mut self, field: LabelField, value: Option<String>) {
        let slot = match field {
            LabelField::SleepQuality => &mut self.sleep_quality,
            LabelField::MorningEnergy => &mut self.morning_energy,
            LabelField::AfternoonEnergy => &mut self.afternoon_energy,
            LabelField::Mood => &mut self.mood,
            LabelField::CaffeineBeforeBed => &mut self.caffeine_before_bed,
            LabelField::ActivityTiming => &mut self.activity_timing,
            LabelField::Workload => &mut self.workload,
            LabelField::NapNeed => &mut self.nap_need,
            LabelField::DinnerTime => &mut self.dinner_time,
        };
        *slot = value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
    }
}

/// Immutable snapshot of every record in file order
///
/// Cloning is cheap: all clones share one allocation, so the snapshot can be
/// loaded once and handed to any number of engines or threads.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[SleepRecord]>,
}

impl Dataset {
    /// Wrap records into a shared snapshot
    pub fn new(records: Vec<SleepRecord>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }

    /// A snapshot with no records (what a failed load degrades to)
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn records(&self) -> &[SleepRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SleepRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count how many records carry each field, plus the date span
    pub fn field_coverage(&self) -> FieldCoverage {
        let numeric = NumericField::all()
            .iter()
            .map(|&f| {
                let n = self.iter().filter(|r| r.numeric(f).is_some()).count();
                (f, n)
            })
            .collect();

        let labels = LabelField::all()
            .iter()
            .map(|&f| {
                let n = self.iter().filter(|r| r.label(f).is_some()).count();
                (f, n)
            })
            .collect();

        let first_date = self.iter().filter_map(|r| r.date).min();
        let last_date = self.iter().filter_map(|r| r.date).max();

        FieldCoverage {
            total_records: self.len(),
            numeric,
            labels,
            first_date,
            last_date,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<SleepRecord>> for Dataset {
    fn from(records: Vec<SleepRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<SleepRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SleepRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a SleepRecord;
    type IntoIter = std::slice::Iter<'a, SleepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Per-field availability across a dataset
#[derive(Debug, Clone, Serialize)]
pub struct FieldCoverage {
    pub total_records: usize,
    pub numeric: Vec<(NumericField, usize)>,
    pub labels: Vec<(LabelField, usize)>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}
