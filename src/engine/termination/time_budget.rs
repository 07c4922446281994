use std::time::Duration;
use std::time::Instant;

use super::AbortReason;
use super::TerminationCondition;
use crate::basic_types::SearchStatistics;

/// A [`TerminationCondition`] which triggers when the given wall-clock budget has elapsed.
///
/// The budget is polled cooperatively, so the granularity is bounded by the cost of one
/// search step, not by a hard external deadline.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    started_at: Instant,
    budget: Duration,
}

impl TimeBudget {
    /// Gives the search a time budget, starting now.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            started_at: Instant::now(),
            budget,
        }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self, _statistics: &SearchStatistics) -> Option<AbortReason> {
        (self.started_at.elapsed() >= self.budget).then_some(AbortReason::TimeLimit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_expired_budget_triggers() {
        let mut budget = TimeBudget::starting_now(Duration::ZERO);
        assert_eq!(
            budget.should_stop(&SearchStatistics::default()),
            Some(AbortReason::TimeLimit)
        );
    }

    #[test]
    fn a_generous_budget_does_not_trigger() {
        let mut budget = TimeBudget::starting_now(Duration::from_secs(3600));
        assert_eq!(budget.should_stop(&SearchStatistics::default()), None);
    }
}
