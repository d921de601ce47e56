//! Chart Recipes
//!
//! Each dashboard chart is a pure function of a [`Dataset`], composed from
//! the primitives in [`crate::aggregate`]:
//!
//! | # | Chart | Shape |
//! |---|-------|-------|
//! | 1 | [`quality_vs_sleep`] | scatter + per-quality means |
//! | 2 | [`morning_energy`] | bubble scatter |
//! | 3 | [`caffeine_rem`] | box plot |
//! | 4 | [`activity_timing`] | bars + dots |
//! | 5 | [`mood_stages`] | stacked bars |
//! | 6 | [`workload`] | means with error bars |
//! | 7 | [`afternoon_energy`] | count-weighted scatter |
//! | 8 | [`nap`] | means with error bars |
//! | 9 | [`dinner`] | scatter + trend line |
//! | 10 | [`quality_summary`] | donut |

pub mod activity_timing;
pub mod afternoon_energy;
pub mod caffeine_rem;
pub mod dinner;
pub mod morning_energy;
pub mod mood_stages;
pub mod nap;
pub mod quality_summary;
pub mod quality_vs_sleep;
pub mod workload;

pub use activity_timing::{activity_timing_vs_sleep, ActivityTimingVsSleep};
pub use afternoon_energy::{afternoon_energy_vs_sleep, AfternoonEnergyVsSleep};
pub use caffeine_rem::{caffeine_vs_rem_sleep, CaffeineVsRem};
pub use dinner::{dinner_time_vs_sleep, DinnerBand, DinnerTimeVsSleep, Trend};
pub use morning_energy::{morning_energy_vs_deep_sleep, MorningEnergyVsDeep};
pub use mood_stages::{mood_vs_sleep_stages, MoodVsSleepStages};
pub use nap::{nap_need_vs_sleep, NapNeedVsSleep};
pub use quality_summary::{sleep_quality_summary, SleepQualitySummary};
pub use quality_vs_sleep::{sleep_quality_vs_total_sleep, QualityVsSleep};
pub use workload::{workload_vs_sleep, WorkloadVsSleep};

use crate::dataset::Dataset;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The ten dashboard charts, in dashboard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    QualityVsSleep,
    MorningEnergy,
    CaffeineRem,
    ActivityTiming,
    MoodStages,
    Workload,
    AfternoonEnergy,
    NapNeed,
    DinnerTime,
    QualitySummary,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::QualityVsSleep,
            ChartKind::MorningEnergy,
            ChartKind::CaffeineRem,
            ChartKind::ActivityTiming,
            ChartKind::MoodStages,
            ChartKind::Workload,
            ChartKind::AfternoonEnergy,
            ChartKind::NapNeed,
            ChartKind::DinnerTime,
            ChartKind::QualitySummary,
        ]
    }

    /// 1-based position on the dashboard
    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|k| k == self)
            .map_or(0, |i| i + 1)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::QualityVsSleep => "quality-vs-sleep",
            ChartKind::MorningEnergy => "morning-energy",
            ChartKind::CaffeineRem => "caffeine-rem",
            ChartKind::ActivityTiming => "activity-timing",
            ChartKind::MoodStages => "mood-stages",
            ChartKind::Workload => "workload",
            ChartKind::AfternoonEnergy => "afternoon-energy",
            ChartKind::NapNeed => "nap-need",
            ChartKind::DinnerTime => "dinner-time",
            ChartKind::QualitySummary => "quality-summary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::QualityVsSleep => "Sleep Quality vs Total Sleep",
            ChartKind::MorningEnergy => "Morning Energy vs Deep Sleep",
            ChartKind::CaffeineRem => "Caffeine Intake vs REM Sleep",
            ChartKind::ActivityTiming => "Activity Timing vs Sleep Duration",
            ChartKind::MoodStages => "Mood vs Sleep Stages",
            ChartKind::Workload => "Workload vs Sleep Duration",
            ChartKind::AfternoonEnergy => "Afternoon Energy vs Sleep",
            ChartKind::NapNeed => "Nap Need vs Sleep Duration",
            ChartKind::DinnerTime => "Dinner Time vs Sleep Quality",
            ChartKind::QualitySummary => "Sleep Quality Distribution",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::QualityVsSleep => "How rested each night felt against hours slept",
            ChartKind::MorningEnergy => "Morning energy against deep sleep, sized by total sleep",
            ChartKind::CaffeineRem => "REM sleep distribution with and without caffeine or alcohol",
            ChartKind::ActivityTiming => "Average sleep by when physical activity was done",
            ChartKind::MoodStages => "REM, deep and core sleep by mood after waking",
            ChartKind::Workload => "Average sleep and spread by amount of work done",
            ChartKind::AfternoonEnergy => "Afternoon energy against sleep, half-hour bins",
            ChartKind::NapNeed => "Average sleep on days a nap was or was not needed",
            ChartKind::DinnerTime => "Total sleep against dinner time with a linear trend",
            ChartKind::QualitySummary => "Share of nights per sleep-quality answer",
        }
    }

    /// Run this chart's recipe
    pub fn compute(&self, dataset: &Dataset) -> ChartData {
        match self {
            ChartKind::QualityVsSleep => {
                ChartData::QualityVsSleep(sleep_quality_vs_total_sleep(dataset))
            }
            ChartKind::MorningEnergy => {
                ChartData::MorningEnergy(morning_energy_vs_deep_sleep(dataset))
            }
            ChartKind::CaffeineRem => ChartData::CaffeineRem(caffeine_vs_rem_sleep(dataset)),
            ChartKind::ActivityTiming => {
                ChartData::ActivityTiming(activity_timing_vs_sleep(dataset))
            }
            ChartKind::MoodStages => ChartData::MoodStages(mood_vs_sleep_stages(dataset)),
            ChartKind::Workload => ChartData::Workload(workload_vs_sleep(dataset)),
            ChartKind::AfternoonEnergy => {
                ChartData::AfternoonEnergy(afternoon_energy_vs_sleep(dataset))
            }
            ChartKind::NapNeed => ChartData::NapNeed(nap_need_vs_sleep(dataset)),
            ChartKind::DinnerTime => ChartData::DinnerTime(dinner_time_vs_sleep(dataset)),
            ChartKind::QualitySummary => ChartData::QualitySummary(sleep_quality_summary(dataset)),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chart '{0}'; use an index 1-10 or a name like 'caffeine-rem'")]
pub struct UnknownChart(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| UnknownChart(s.to_string()));
        }

        let wanted = s.to_ascii_lowercase().replace('_', "-");
        Self::all()
            .iter()
            .find(|k| k.slug() == wanted)
            .copied()
            .ok_or_else(|| UnknownChart(s.to_string()))
    }
}

/// Output of one chart recipe
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartData {
    QualityVsSleep(QualityVsSleep),
    MorningEnergy(MorningEnergyVsDeep),
    CaffeineRem(CaffeineVsRem),
    ActivityTiming(ActivityTimingVsSleep),
    MoodStages(MoodVsSleepStages),
    Workload(WorkloadVsSleep),
    AfternoonEnergy(AfternoonEnergyVsSleep),
    NapNeed(NapNeedVsSleep),
    DinnerTime(DinnerTimeVsSleep),
    QualitySummary(SleepQualitySummary),
}

impl ChartData {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::QualityVsSleep(_) => ChartKind::QualityVsSleep,
            ChartData::MorningEnergy(_) => ChartKind::MorningEnergy,
            ChartData::CaffeineRem(_) => ChartKind::CaffeineRem,
            ChartData::ActivityTiming(_) => ChartKind::ActivityTiming,
            ChartData::MoodStages(_) => ChartKind::MoodStages,
            ChartData::Workload(_) => ChartKind::Workload,
            ChartData::AfternoonEnergy(_) => ChartKind::AfternoonEnergy,
            ChartData::NapNeed(_) => ChartKind::NapNeed,
            ChartData::DinnerTime(_) => ChartKind::DinnerTime,
            ChartData::QualitySummary(_) => ChartKind::QualitySummary,
        }
    }

    /// Records that took part in the chart
    pub fn count(&self) -> usize {
        match self {
            ChartData::QualityVsSleep(c) => c.count,
            ChartData::MorningEnergy(c) => c.count,
            ChartData::CaffeineRem(c) => c.count,
            ChartData::ActivityTiming(c) => c.count,
            ChartData::MoodStages(c) => c.count,
            ChartData::Workload(c) => c.count,
            ChartData::AfternoonEnergy(c) => c.count,
            ChartData::NapNeed(c) => c.count,
            ChartData::DinnerTime(c) => c.count,
            ChartData::QualitySummary(c) => c.total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
