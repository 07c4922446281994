use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::PolicyTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::options::TieBreakPolicy;
use crate::variables::CourseHourId;

/// The weight of the degree component relative to the domain-size component.
const DEGREE_WEIGHT: f64 = 0.5;

/// A [`VariableSelector`] which combines the minimum-remaining-values and degree heuristics:
/// it minimises `domain_size - 0.5 * unassigned_degree`, preferring variables that are both
/// tightly domained and highly connected.
#[derive(Debug)]
pub struct MostConstrained<TieBreaking = PolicyTieBreaker<CourseHourId, f64>> {
    tie_breaker: TieBreaking,
}

impl MostConstrained {
    pub fn new(tie_breaking: TieBreakPolicy) -> Self {
        MostConstrained {
            tie_breaker: PolicyTieBreaker::new(Direction::Minimum, tie_breaking),
        }
    }
}

impl<TieBreaking> VariableSelector for MostConstrained<TieBreaking>
where
    TieBreaking: TieBreaker<CourseHourId, f64>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<CourseHourId> {
        for (position, variable) in context.unassigned_variables().enumerate() {
            let keys = context.variable_tie_keys(variable, position);
            let score = context.domain_size(variable) as f64
                - DEGREE_WEIGHT * context.unassigned_degree(variable) as f64;
            self.tie_breaker.consider(variable, score, keys);
        }
        self.tie_breaker.select(context.random())
    }
}
