use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::PolicyTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::options::TieBreakPolicy;
use crate::variables::CourseHourId;

/// A [`VariableSelector`] which selects the unassigned variable with the smallest current
/// domain (minimum remaining values), using the run's tie-break policy among equally small
/// domains.
#[derive(Debug)]
pub struct SmallestDomain<TieBreaking = PolicyTieBreaker<CourseHourId, usize>> {
    tie_breaker: TieBreaking,
}

impl SmallestDomain {
    pub fn new(tie_breaking: TieBreakPolicy) -> Self {
        SmallestDomain {
            tie_breaker: PolicyTieBreaker::new(Direction::Minimum, tie_breaking),
        }
    }
}

impl<TieBreaking> VariableSelector for SmallestDomain<TieBreaking>
where
    TieBreaking: TieBreaker<CourseHourId, usize>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<CourseHourId> {
        for (position, variable) in context.unassigned_variables().enumerate() {
            let keys = context.variable_tie_keys(variable, position);
            self.tie_breaker
                .consider(variable, context.domain_size(variable), keys);
        }
        self.tie_breaker.select(context.random())
    }
}
