use super::Classified;
use super::executor::DeletionOutcome;

/// Final tally of a run, derived from the classified sizes and the
/// multiset of deletion outcomes. Feeding the outcomes in any order yields
/// the same summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub deleted: usize,
    pub failed: usize,
    pub kept: usize,
    pub total: usize,
}

pub fn aggregate(classified: &Classified, outcomes: &[DeletionOutcome]) -> RunSummary {
    let deleted = outcomes.iter().filter(|o| o.succeeded).count();

    RunSummary {
        deleted,
        failed: outcomes.len() - deleted,
        kept: classified.to_keep.len(),
        total: classified.total(),
    }
}

impl RunSummary {
    /// `1` when at least one deletion failed, otherwise `0`. Simulated and
    /// user-aborted runs carry no failures and therefore exit `0`.
    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceGroup;
    use std::time::Duration;

    fn outcome(name: &str, succeeded: bool) -> DeletionOutcome {
        DeletionOutcome {
            group: ResourceGroup::new(name, "sub-1", "Assinatura"),
            succeeded,
            error: (!succeeded).then(|| "erro do provedor".to_string()),
            duration: Duration::from_millis(10),
        }
    }

    fn classified(to_delete: &[&str], to_keep: &[&str]) -> Classified {
        Classified {
            to_delete: to_delete
                .iter()
                .map(|n| ResourceGroup::new(*n, "sub-1", "Assinatura"))
                .collect(),
            to_keep: to_keep
                .iter()
                .map(|n| ResourceGroup::new(*n, "sub-1", "Assinatura"))
                .collect(),
        }
    }

    #[test]
    fn counts_successes_failures_and_kept() {
        let classified = classified(&["rg-a", "rg-b"], &["rg-prod"]);
        let outcomes = vec![outcome("rg-a", true), outcome("rg-b", false)];

        let summary = aggregate(&classified, &outcomes);

        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.kept, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.deleted + summary.failed, classified.to_delete.len());
    }

    #[test]
    fn aggregation_is_order_independent() {
        let classified = classified(&["rg-a", "rg-b", "rg-c"], &[]);
        let mut outcomes = vec![
            outcome("rg-a", true),
            outcome("rg-b", false),
            outcome("rg-c", true),
        ];

        let forward = aggregate(&classified, &outcomes);
        outcomes.reverse();
        let reversed = aggregate(&classified, &outcomes);
        outcomes.swap(0, 1);
        let shuffled = aggregate(&classified, &outcomes);

        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn exit_code_is_zero_without_failures() {
        let classified = classified(&["rg-a"], &["rg-prod"]);
        let summary = aggregate(&classified, &[outcome("rg-a", true)]);
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn exit_code_is_one_with_any_failure() {
        let classified = classified(&["rg-a", "rg-b"], &[]);
        let outcomes = vec![outcome("rg-a", true), outcome("rg-b", false)];
        assert_eq!(aggregate(&classified, &outcomes).exit_code(), 1);
    }

    #[test]
    fn empty_run_is_a_success() {
        let classified = classified(&[], &[]);
        let summary = aggregate(&classified, &[]);
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn partial_run_counts_only_collected_outcomes() {
        // Cancelled runs report fewer outcomes than planned deletions.
        let classified = classified(&["rg-a", "rg-b", "rg-c"], &[]);
        let summary = aggregate(&classified, &[outcome("rg-a", true)]);

        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.total, 3);
    }
}
