use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::PolicyTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::options::TieBreakPolicy;
use crate::variables::CourseHourId;

/// A [`VariableSelector`] which selects the unassigned variable related to the largest number
/// of other unassigned variables (the degree heuristic).
#[derive(Debug)]
pub struct MaxDegree<TieBreaking = PolicyTieBreaker<CourseHourId, usize>> {
    tie_breaker: TieBreaking,
}

impl MaxDegree {
    pub fn new(tie_breaking: TieBreakPolicy) -> Self {
        MaxDegree {
            tie_breaker: PolicyTieBreaker::new(Direction::Maximum, tie_breaking),
        }
    }
}

impl<TieBreaking> VariableSelector for MaxDegree<TieBreaking>
where
    TieBreaking: TieBreaker<CourseHourId, usize>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<CourseHourId> {
        for (position, variable) in context.unassigned_variables().enumerate() {
            let keys = context.variable_tie_keys(variable, position);
            self.tie_breaker
                .consider(variable, context.unassigned_degree(variable), keys);
        }
        self.tie_breaker.select(context.random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::fixture;
    use crate::engine::ConstraintChecker;

    #[test]
    fn assigned_neighbours_no_longer_count_towards_the_degree() {
        let mut fixture = fixture();
        // With nothing assigned all three variables are mutually related; assigning one
        // leaves the remaining two with a degree of one each, and the tie-break decides.
        fixture.state.assign(CourseHourId::new(0), 0);
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);
        let mut context = SelectionContext::new(
            &fixture.state,
            &fixture.store,
            &checker,
            &mut fixture.random,
        );

        let mut selector = MaxDegree::new(TieBreakPolicy::Last);
        assert_eq!(
            selector.select_variable(&mut context),
            Some(CourseHourId::new(2))
        );
    }

    #[test]
    fn ties_respect_the_configured_policy() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);
        let mut context = SelectionContext::new(
            &fixture.state,
            &fixture.store,
            &checker,
            &mut fixture.random,
        );

        let mut selector = MaxDegree::new(TieBreakPolicy::MaxId);
        assert_eq!(
            selector.select_variable(&mut context),
            Some(CourseHourId::new(2))
        );
    }
}
