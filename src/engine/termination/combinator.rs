use super::AbortReason;
use super::TerminationCondition;
use crate::basic_types::SearchStatistics;

/// A [`TerminationCondition`] which triggers when either of two given conditions triggers,
/// reporting the first one that does.
#[derive(Debug, Clone, Copy)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combine two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self, statistics: &SearchStatistics) -> Option<AbortReason> {
        self.t1
            .should_stop(statistics)
            .or_else(|| self.t2.should_stop(statistics))
    }
}
