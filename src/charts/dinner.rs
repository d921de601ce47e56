//! Dinner time vs total sleep (scatter with a least-squares trend)
//!
//! Dinner answers are free-form clock times. Records whose time cannot be
//! parsed are left out of the chart and counted in `skipped_times`.

use crate::aggregate::filter_records;
use crate::clock::parse_clock_hours;
use crate::dataset::{Dataset, LabelField, NumericField};
use crate::stats::{self, linear_regression, Regression, RegressionError};
use serde::Serialize;
use std::fmt;

/// Dinner hour at which the evening band starts (7 PM)
pub const EVENING_FROM: f64 = 19.0;
/// Dinner hour at which the late band starts (9 PM)
pub const LATE_FROM: f64 = 21.0;

/// Colour band for a dinner time
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DinnerBand {
    /// Before 7 PM
    Early,
    /// 7 PM up to 9 PM
    Evening,
    /// 9 PM or later
    Late,
}

impl DinnerBand {
    pub fn for_hour(hour: f64) -> Self {
        if hour < EVENING_FROM {
            DinnerBand::Early
        } else if hour < LATE_FROM {
            DinnerBand::Evening
        } else {
            DinnerBand::Late
        }
    }

    pub fn all() -> &'static [DinnerBand] {
        &[DinnerBand::Early, DinnerBand::Evening, DinnerBand::Late]
    }
}

impl fmt::Display for DinnerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DinnerBand::Early => write!(f, "Before 7 PM"),
            DinnerBand::Evening => write!(f, "7-9 PM"),
            DinnerBand::Late => write!(f, "After 9 PM"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DinnerPoint {
    /// Decimal hours, 19.5 for 7:30 PM
    pub dinner_hour: f64,
    pub total_sleep: f64,
    pub band: DinnerBand,
}

/// Fitted line drawn across the observed dinner hours
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrendLine {
    #[serde(flatten)]
    pub regression: Regression,
    /// (hour, fitted sleep) at the earliest dinner
    pub start: (f64, f64),
    /// (hour, fitted sleep) at the latest dinner
    pub end: (f64, f64),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Trend {
    Fitted(TrendLine),
    Undefined { reason: RegressionError },
}

impl Trend {
    pub fn line(&self) -> Option<&TrendLine> {
        match self {
            Trend::Fitted(line) => Some(line),
            Trend::Undefined { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DinnerTimeVsSleep {
    /// Records with a parsed dinner time and total sleep
    pub count: usize,
    /// Records with both fields whose dinner time did not parse
    pub skipped_times: usize,
    pub points: Vec<DinnerPoint>,
    /// Earliest and latest dinner hour
    pub hour_range: Option<(f64, f64)>,
    pub sleep_max: Option<f64>,
    pub trend: Trend,
}

impl DinnerTimeVsSleep {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn dinner_time_vs_sleep(dataset: &Dataset) -> DinnerTimeVsSleep {
    let records = filter_records(
        dataset,
        &[NumericField::TotalSleep.into(), LabelField::DinnerTime.into()],
    );

    let points: Vec<DinnerPoint> = records
        .iter()
        .filter_map(|r| {
            let dinner_hour = parse_clock_hours(r.label(LabelField::DinnerTime)?)?;
            Some(DinnerPoint {
                dinner_hour,
                total_sleep: r.total_sleep?,
                band: DinnerBand::for_hour(dinner_hour),
            })
        })
        .collect();

    let skipped_times = records.len() - points.len();
    if skipped_times > 0 {
        tracing::debug!(skipped = skipped_times, "Dinner times that did not parse");
    }

    let hours: Vec<f64> = points.iter().map(|p| p.dinner_hour).collect();
    let sleeps: Vec<f64> = points.iter().map(|p| p.total_sleep).collect();
    let hour_range = stats::min_max(&hours);

    let trend = match (linear_regression(&hours, &sleeps), hour_range) {
        (Ok(regression), Some((lo, hi))) => Trend::Fitted(TrendLine {
            regression,
            start: (lo, regression.predict(lo)),
            end: (hi, regression.predict(hi)),
        }),
        (Ok(_), None) => Trend::Undefined {
            reason: RegressionError::Empty,
        },
        (Err(reason), _) => Trend::Undefined { reason },
    };

    DinnerTimeVsSleep {
        count: points.len(),
        skipped_times,
        hour_range,
        sleep_max: stats::min_max(&sleeps).map(|(_, hi)| hi),
        points,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SleepRecord;

    fn rec(dinner: &str, total: f64) -> SleepRecord {
        SleepRecord::new()
            .with_label(LabelField::DinnerTime, dinner)
            .with_numeric(NumericField::TotalSleep, total)
    }

    #[test]
    fn test_bands() {
        assert_eq!(DinnerBand::for_hour(18.99), DinnerBand::Early);
        assert_eq!(DinnerBand::for_hour(19.0), DinnerBand::Evening);
        assert_eq!(DinnerBand::for_hour(20.5), DinnerBand::Evening);
        assert_eq!(DinnerBand::for_hour(21.0), DinnerBand::Late);

        let labels: Vec<String> = DinnerBand::all().iter().map(|b| b.to_string()).collect();
        assert_eq!(labels, vec!["Before 7 PM", "7-9 PM", "After 9 PM"]);
    }

    #[test]
    fn test_points_and_trend() {
        let ds: Dataset = vec![
            rec("6:00 PM", 8.0),
            rec("7:30 PM", 7.0),
            rec("soon", 6.0),
            rec("9:00 PM", 6.0),
            SleepRecord::new().with_label(LabelField::DinnerTime, "8:00 PM"),
        ]
        .into();

        let chart = dinner_time_vs_sleep(&ds);
        assert_eq!(chart.count, 3);
        assert_eq!(chart.skipped_times, 1);
        assert_eq!(chart.hour_range, Some((18.0, 21.0)));
        assert_eq!(chart.sleep_max, Some(8.0));

        let bands: Vec<DinnerBand> = chart.points.iter().map(|p| p.band).collect();
        assert_eq!(
            bands,
            vec![DinnerBand::Early, DinnerBand::Evening, DinnerBand::Late]
        );

        let line = chart.trend.line().unwrap();
        assert!((line.regression.slope + 2.0 / 3.0).abs() < 1e-9);
        assert!((line.start.1 - 8.0).abs() < 1e-9);
        assert!((line.end.1 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_dinner_hour_has_no_trend() {
        let ds: Dataset = vec![rec("7:00 PM", 6.0), rec("19:00", 8.0)].into();

        let chart = dinner_time_vs_sleep(&ds);
        assert_eq!(chart.count, 2);
        assert_eq!(
            chart.trend,
            Trend::Undefined {
                reason: RegressionError::ZeroVariance
            }
        );
    }

    #[test]
    fn test_empty() {
        let chart = dinner_time_vs_sleep(&Dataset::empty());
        assert!(chart.is_empty());
        assert_eq!(
            chart.trend,
            Trend::Undefined {
                reason: RegressionError::Empty
            }
        );
    }
}
