use log::info;

/// A set of counters updated during the search.
///
/// All counters increase monotonically over the course of a single run and are reset when a new
/// run starts. They are owned by the search engine and read-only to every other component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// The number of nodes of the search tree which have been visited.
    pub nodes_visited: u64,
    /// The number of (variable, value) assignments which have been attempted.
    pub assignments_tried: u64,
    /// The number of times the search returned from an exhausted branch.
    pub backtracks: u64,
    /// The number of attempted assignments rejected by the consistency check.
    pub consistency_check_failures: u64,
    /// The number of branches discarded because propagation wiped out a domain.
    pub propagation_failures: u64,
    /// The number of complete solutions encountered.
    pub solutions_found: u64,
    /// The number of times the search was restarted from the root.
    pub restarts: u64,
    /// The number of nogoods recorded by the learning component.
    pub learned_nogoods: u64,
}

impl SearchStatistics {
    /// The combined number of failures (rejected assignments plus domain wipeouts), which is
    /// the quantity bounded by the failure budget and counted by the restart strategy.
    pub fn failures(&self) -> u64 {
        self.consistency_check_failures + self.propagation_failures
    }

    /// Logs every counter as a `name=value` line through the [`log`] facade.
    pub fn log(&self, prefix: &str) {
        info!("{prefix} nodesVisited={}", self.nodes_visited);
        info!("{prefix} assignmentsTried={}", self.assignments_tried);
        info!("{prefix} backtracks={}", self.backtracks);
        info!(
            "{prefix} consistencyCheckFailures={}",
            self.consistency_check_failures
        );
        info!("{prefix} propagationFailures={}", self.propagation_failures);
        info!("{prefix} solutionsFound={}", self.solutions_found);
        info!("{prefix} restarts={}", self.restarts);
        info!("{prefix} learnedNogoods={}", self.learned_nogoods);
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;

    #[test]
    fn failures_combines_both_failure_counters() {
        let statistics = SearchStatistics {
            consistency_check_failures: 7,
            propagation_failures: 5,
            ..Default::default()
        };
        assert_eq!(statistics.failures(), 12);
    }

    #[test]
    fn a_fresh_instance_has_all_counters_at_zero() {
        let statistics = SearchStatistics::default();
        assert_eq!(statistics.nodes_visited, 0);
        assert_eq!(statistics.failures(), 0);
        assert_eq!(statistics.solutions_found, 0);
    }
}
