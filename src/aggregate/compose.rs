//! Sleep-stage composition
//!
//! Mean REM, Deep and Core hours over one member set. The three means are
//! only produced together, from records that carry all three stages, so a
//! stacked bar built from them is internally consistent.

use crate::dataset::{NumericField, SleepRecord};
use serde::Serialize;

/// Stages in stacking order
pub const SLEEP_STAGES: [NumericField; 3] =
    [NumericField::Rem, NumericField::Deep, NumericField::Core];

/// Mean hours per sleep stage for one group
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct StageMeans {
    pub rem: f64,
    pub deep: f64,
    pub core: f64,
    /// Records the means were taken over
    pub count: usize,
}

impl StageMeans {
    /// Mean for a single stage
    pub fn get(&self, stage: NumericField) -> Option<f64> {
        match stage {
            NumericField::Rem => Some(self.rem),
            NumericField::Deep => Some(self.deep),
            NumericField::Core => Some(self.core),
            _ => None,
        }
    }

    /// Height of the full stack
    pub fn total(&self) -> f64 {
        self.rem + self.deep + self.core
    }
}

/// Stage means over the members that record all three stages
///
/// `None` when no member qualifies.
pub fn stage_means(members: &[&SleepRecord]) -> Option<StageMeans> {
    let (mut rem, mut deep, mut core, mut count) = (0.0, 0.0, 0.0, 0usize);

    for r in members {
        if let (Some(r_rem), Some(r_deep), Some(r_core)) = (r.rem, r.deep, r.core) {
            rem += r_rem;
            deep += r_deep;
            core += r_core;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(StageMeans {
        rem: rem / n,
        deep: deep / n,
        core: core / n,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(rem: Option<f64>, deep: Option<f64>, core: Option<f64>) -> SleepRecord {
        let mut r = SleepRecord::new();
        r.rem = rem;
        r.deep = deep;
        r.core = core;
        r
    }

    #[test]
    fn test_means_share_member_set() {
        let records = [
            stages(Some(1.0), Some(1.0), Some(4.0)),
            stages(Some(2.0), Some(0.5), Some(5.0)),
            // skipped entirely, even though REM is present
            stages(Some(9.0), None, Some(3.0)),
        ];
        let refs: Vec<&SleepRecord> = records.iter().collect();

        let means = stage_means(&refs).unwrap();
        assert_eq!(means.count, 2);
        assert_eq!(means.rem, 1.5);
        assert_eq!(means.deep, 0.75);
        assert_eq!(means.core, 4.5);
        assert_eq!(means.total(), 6.75);
        assert_eq!(means.get(NumericField::Deep), Some(0.75));
        assert_eq!(means.get(NumericField::Awake), None);
    }

    #[test]
    fn test_no_complete_members() {
        let records = [stages(Some(1.0), None, None)];
        let refs: Vec<&SleepRecord> = records.iter().collect();
        assert!(stage_means(&refs).is_none());
        assert!(stage_means(&[]).is_none());
    }
}
