//! Canonical category ordering
//!
//! Survey answers have natural orders (Tired < Moderately Rested < Well
//! Rested) that are not alphabetical. Arranging by a [`CategoryOrder`] emits
//! the listed labels in that order and never invents labels that did not
//! occur in the data.

/// Sleep-quality scale
pub const QUALITY_LEVELS: &[&str] = &["Tired", "Moderately Rested", "Well Rested"];

/// Morning/afternoon energy scale
pub const ENERGY_LEVELS: &[&str] = &["Low", "Moderate", "High"];

/// Mood-after-waking scale
pub const MOOD_LEVELS: &[&str] = &["Negative", "Neutral", "Positive"];

/// Time of day physical activity was done
pub const ACTIVITY_TIMINGS: &[&str] = &["Morning", "Afternoon", "Evening"];

/// Amount of work done
pub const WORKLOAD_LEVELS: &[&str] = &["Low Work", "Medium Work", "High Work"];

/// Binary survey answers
pub const YES_NO: &[&str] = &["Yes", "No"];

/// What happens to labels that are not in the canonical list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlisted {
    /// Leave them out
    Drop,
    /// Keep them ahead of the listed labels, in their incoming order
    Leading,
    /// Keep them after the listed labels, in their incoming order
    Trailing,
}

/// An explicit ordering over category labels
#[derive(Debug, Clone, Copy)]
pub struct CategoryOrder<'a> {
    labels: &'a [&'a str],
    unlisted: Unlisted,
}

impl<'a> CategoryOrder<'a> {
    /// Order by `labels`, dropping anything unlisted
    pub fn new(labels: &'a [&'a str]) -> Self {
        Self {
            labels,
            unlisted: Unlisted::Drop,
        }
    }

    /// Builder method: set the policy for unlisted labels
    pub fn unlisted(mut self, policy: Unlisted) -> Self {
        self.unlisted = policy;
        self
    }

    pub fn labels(&self) -> &'a [&'a str] {
        self.labels
    }

    /// Position of `label` in the canonical list
    pub fn rank(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| *l == label)
    }

    /// Arrange items by the label each one carries
    ///
    /// Listed labels come out in canonical order; relative order among
    /// unlisted items is preserved.
    pub fn arrange<T, F>(&self, items: Vec<T>, label_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        let mut listed: Vec<(usize, T)> = Vec::new();
        let mut unlisted: Vec<T> = Vec::new();
        for item in items {
            let rank = self.rank(label_of(&item));
            match rank {
                Some(rank) => listed.push((rank, item)),
                None => unlisted.push(item),
            }
        }

        // stable, so equal ranks keep incoming order
        listed.sort_by_key(|(rank, _)| *rank);
        let listed = listed.into_iter().map(|(_, item)| item);

        match self.unlisted {
            Unlisted::Drop => listed.collect(),
            Unlisted::Leading => unlisted.into_iter().chain(listed).collect(),
            Unlisted::Trailing => listed.chain(unlisted).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_categories_are_omitted() {
        let present = vec!["High", "Low"];
        let order = CategoryOrder::new(ENERGY_LEVELS);
        assert_eq!(order.arrange(present, |s| *s), vec!["Low", "High"]);
    }

    #[test]
    fn test_unlisted_policies() {
        let present = vec!["Well Rested", "Groggy", "Tired", "Wired"];

        let dropped = CategoryOrder::new(QUALITY_LEVELS).arrange(present.clone(), |s| *s);
        assert_eq!(dropped, vec!["Tired", "Well Rested"]);

        let leading = CategoryOrder::new(QUALITY_LEVELS)
            .unlisted(Unlisted::Leading)
            .arrange(present.clone(), |s| *s);
        assert_eq!(leading, vec!["Groggy", "Wired", "Tired", "Well Rested"]);

        let trailing = CategoryOrder::new(QUALITY_LEVELS)
            .unlisted(Unlisted::Trailing)
            .arrange(present, |s| *s);
        assert_eq!(trailing, vec!["Tired", "Well Rested", "Groggy", "Wired"]);
    }

    #[test]
    fn test_rank() {
        let order = CategoryOrder::new(YES_NO);
        assert_eq!(order.rank("No"), Some(1));
        assert_eq!(order.rank("no"), None);
    }
}
