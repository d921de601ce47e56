//! Plain-text rendering of chart data
//!
//! Tables are aligned columns with a dashed rule under the header. Missing
//! values print as `-`.

use crate::aggregate::{GroupSummary, LabelCount, SLEEP_STAGES};
use crate::charts::dinner::Trend;
use crate::charts::ChartData;
use crate::clock::format_clock_hours;
use crate::dataset::{FieldCoverage, LoadReport, NumericField};
use std::fmt::Write;

/// Render one chart as a titled table
pub fn render_chart(data: &ChartData, precision: usize) -> String {
    let kind = data.kind();
    let mut out = String::new();
    let _ = writeln!(out, "{}. {}", kind.index(), kind.title());
    let _ = writeln!(out, "{}", kind.description());
    let _ = writeln!(out);

    if data.is_empty() {
        let _ = writeln!(out, "No data to display");
        return out;
    }

    let p = precision;
    match data {
        ChartData::QualityVsSleep(c) => {
            let _ = writeln!(out, "Nights: {}", c.count);
            let _ = writeln!(out, "Total sleep range: {}", fmt_range(c.sleep_range, p));
            let _ = writeln!(out);
            summary_table(&mut out, "Quality", &c.groups, p);
        }
        ChartData::MorningEnergy(c) => {
            let _ = writeln!(out, "Nights: {}", c.count);
            let _ = writeln!(out, "Max deep sleep: {}", fmt_opt(c.deep_max, p));
            let _ = writeln!(out, "Bubble legend (total sleep): {}", fmt_range(c.size_legend, 0));
            let _ = writeln!(out);
            summary_table(&mut out, "Energy", &c.groups, p);
        }
        ChartData::CaffeineRem(c) => {
            let _ = writeln!(
                out,
                "{:<14} {:>5} {:>8} {:>8} {:>8} {:>8} {:>8}  {}",
                "Answer", "N", "Low", "Q1", "Median", "Q3", "High", "Outliers"
            );
            let _ = writeln!(out, "{}", "-".repeat(80));
            for b in &c.boxes {
                let s = &b.stats;
                let outliers: Vec<String> =
                    s.outliers.iter().map(|v| format!("{:.*}", p, v)).collect();
                let _ = writeln!(
                    out,
                    "{:<14} {:>5} {:>8.*} {:>8.*} {:>8.*} {:>8.*} {:>8.*}  {}",
                    b.label,
                    s.count,
                    p,
                    s.lower_fence,
                    p,
                    s.q1,
                    p,
                    s.median,
                    p,
                    s.q3,
                    p,
                    s.upper_fence,
                    if outliers.is_empty() { "-".to_string() } else { outliers.join(", ") }
                );
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Axis max: {}", fmt_opt(c.y_max, p));
        }
        ChartData::ActivityTiming(c) => {
            let _ = writeln!(out, "{:<12} {:>6} {:>10}  {}", "Timing", "N", "Mean", "Quality mix");
            let _ = writeln!(out, "{}", "-".repeat(70));
            for g in &c.groups {
                let _ = writeln!(
                    out,
                    "{:<12} {:>6} {:>10.*}  {}",
                    g.timing,
                    g.count,
                    p,
                    g.mean_sleep,
                    fmt_counts(&g.quality_counts)
                );
            }
        }
        ChartData::MoodStages(c) => {
            let _ = write!(out, "{:<12} {:>6}", "Mood", "N");
            for stage in SLEEP_STAGES {
                let _ = write!(out, " {:>8}", stage_name(stage));
            }
            let _ = writeln!(out, " {:>8}", "Total");
            let _ = writeln!(out, "{}", "-".repeat(56));
            for m in &c.moods {
                let s = &m.stages;
                let _ = write!(out, "{:<12} {:>6}", m.mood, s.count);
                for stage in SLEEP_STAGES {
                    let _ = write!(out, " {:>8}", fmt_opt(s.get(stage), p));
                }
                let _ = writeln!(out, " {:>8.*}", p, s.total());
            }
        }
        ChartData::Workload(c) => {
            let groups: Vec<GroupSummary> = c.groups.iter().map(|g| g.summary.clone()).collect();
            summary_table(&mut out, "Workload", &groups, p);
            let _ = writeln!(out);
            let _ = writeln!(out, "Longest night: {}", fmt_opt(c.sleep_max, p));
        }
        ChartData::AfternoonEnergy(c) => {
            let _ = writeln!(out, "{:<12} {:>8} {:>6}", "Energy", "Sleep", "Nights");
            let _ = writeln!(out, "{}", "-".repeat(28));
            for b in &c.buckets {
                let _ = writeln!(out, "{:<12} {:>8.1} {:>6}", b.label, b.value, b.count);
            }
            let _ = writeln!(out);
            summary_table(&mut out, "Energy", &c.means, p);
        }
        ChartData::NapNeed(c) => {
            let _ = writeln!(
                out,
                "{:<10} {:>6} {:>10} {:>10}  {}",
                "Nap", "N", "Mean", "Std Dev", "Quality mix"
            );
            let _ = writeln!(out, "{}", "-".repeat(70));
            for g in &c.groups {
                let s = &g.summary;
                let _ = writeln!(
                    out,
                    "{:<10} {:>6} {:>10} {:>10.*}  {}",
                    s.label,
                    s.count,
                    fmt_opt(s.mean, p),
                    p,
                    s.std_dev,
                    fmt_counts(&g.quality_counts)
                );
            }
        }
        ChartData::DinnerTime(c) => {
            let _ = writeln!(out, "{:<10} {:>8} {:<12}", "Dinner", "Sleep", "Band");
            let _ = writeln!(out, "{}", "-".repeat(32));
            for pt in &c.points {
                let _ = writeln!(
                    out,
                    "{:<10} {:>8.*} {:<12}",
                    format_clock_hours(pt.dinner_hour),
                    p,
                    pt.total_sleep,
                    pt.band.to_string()
                );
            }
            let _ = writeln!(out);
            if c.skipped_times > 0 {
                let _ = writeln!(out, "Unreadable dinner times skipped: {}", c.skipped_times);
            }
            match &c.trend {
                Trend::Fitted(line) => {
                    let _ = writeln!(
                        out,
                        "Trend: sleep = {:.*} x hour + {:.*} (n = {})",
                        p, line.regression.slope, p, line.regression.intercept, line.regression.n
                    );
                    let _ = writeln!(
                        out,
                        "       {} -> {:.*}h, {} -> {:.*}h",
                        format_clock_hours(line.start.0),
                        p,
                        line.start.1,
                        format_clock_hours(line.end.0),
                        p,
                        line.end.1
                    );
                }
                Trend::Undefined { reason } => {
                    let _ = writeln!(out, "Trend: not available ({})", reason);
                }
            }
        }
        ChartData::QualitySummary(c) => {
            let _ = writeln!(out, "{:<20} {:>6} {:>8}", "Quality", "Nights", "Share");
            let _ = writeln!(out, "{}", "-".repeat(36));
            for s in &c.shares {
                let _ = writeln!(
                    out,
                    "{:<20} {:>6} {:>7.*}%",
                    s.label, s.count, p, s.percentage
                );
            }
            let _ = writeln!(out, "{}", "-".repeat(36));
            let _ = writeln!(out, "{:<20} {:>6}", "Total", c.total);
        }
    }

    out
}

/// Render the `info` view: load report and per-field coverage
pub fn render_info(report: &LoadReport, coverage: &FieldCoverage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Records: {}", coverage.total_records);
    let _ = writeln!(out, "Rows read: {}", report.rows_read);
    if report.rows_failed > 0 {
        let _ = writeln!(out, "Rows failed: {}", report.rows_failed);
    }
    if report.invalid_numeric_cells > 0 {
        let _ = writeln!(out, "Unreadable numbers: {}", report.invalid_numeric_cells);
    }
    if report.invalid_date_cells > 0 {
        let _ = writeln!(out, "Unreadable dates: {}", report.invalid_date_cells);
    }
    if !report.missing_columns.is_empty() {
        let _ = writeln!(out, "Missing columns:");
        for column in &report.missing_columns {
            let _ = writeln!(out, "  {}", column);
        }
    }

    if let (Some(first), Some(last)) = (coverage.first_date, coverage.last_date) {
        let _ = writeln!(out, "Dates: {} to {}", first, last);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20} {:>8}", "Field", "Present");
    let _ = writeln!(out, "{}", "-".repeat(29));
    for (field, n) in &coverage.numeric {
        let _ = writeln!(out, "{:<20} {:>8}", field.to_string(), n);
    }
    for (field, n) in &coverage.labels {
        let _ = writeln!(out, "{:<20} {:>8}", field.to_string(), n);
    }

    if !report.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors (first 10):");
        for error in report.errors.iter().take(10) {
            let _ = writeln!(out, "  {}", error);
        }
    }

    out
}

fn summary_table(out: &mut String, heading: &str, groups: &[GroupSummary], p: usize) {
    let _ = writeln!(out, "{:<20} {:>6} {:>10} {:>10}", heading, "N", "Mean", "Std Dev");
    let _ = writeln!(out, "{}", "-".repeat(49));
    for g in groups {
        let _ = writeln!(
            out,
            "{:<20} {:>6} {:>10} {:>10.*}",
            g.label,
            g.count,
            fmt_opt(g.mean, p),
            p,
            g.std_dev
        );
    }
}

fn stage_name(stage: NumericField) -> &'static str {
    match stage {
        NumericField::Rem => "REM",
        NumericField::Deep => "Deep",
        NumericField::Core => "Core",
        NumericField::TotalSleep => "Total",
        NumericField::Awake => "Awake",
    }
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}

fn fmt_range(range: Option<(f64, f64)>, precision: usize) -> String {
    range
        .map(|(lo, hi)| format!("{:.*} - {:.*}", precision, lo, precision, hi))
        .unwrap_or_else(|| "-".to_string())
}

fn fmt_counts(counts: &[LabelCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{} {}", c.label, c.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartKind;
    use crate::dataset::{Dataset, LabelField, NumericField, SleepRecord};

    #[test]
    fn test_empty_chart_message() {
        let data = ChartKind::CaffeineRem.compute(&Dataset::empty());
        let text = render_chart(&data, 2);
        assert!(text.starts_with("3. Caffeine Intake vs REM Sleep"));
        assert!(text.contains("No data to display"));
    }

    #[test]
    fn test_summary_rows() {
        let ds: Dataset = vec![
            SleepRecord::new()
                .with_label(LabelField::SleepQuality, "Tired")
                .with_numeric(NumericField::TotalSleep, 5.0),
            SleepRecord::new()
                .with_label(LabelField::SleepQuality, "Well Rested")
                .with_numeric(NumericField::TotalSleep, 8.0),
        ]
        .into();

        let text = render_chart(&ChartKind::QualitySummary.compute(&ds), 1);
        assert!(text.contains("50.0%"));
        assert!(text.contains("Total"));

        let text = render_chart(&ChartKind::QualityVsSleep.compute(&ds), 2);
        assert!(text.contains("5.00 - 8.00"));
    }

    #[test]
    fn test_dinner_trend_unavailable() {
        let ds: Dataset = vec![SleepRecord::new()
            .with_label(LabelField::DinnerTime, "7:00 PM")
            .with_numeric(NumericField::TotalSleep, 7.0)]
        .into();

        let text = render_chart(&ChartKind::DinnerTime.compute(&ds), 2);
        assert!(text.contains("7PM"));
        assert!(text.contains("Trend: not available"));
    }
}
