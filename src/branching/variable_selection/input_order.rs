use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::variables::CourseHourId;

/// A [`VariableSelector`] which selects the first unassigned variable in stable iteration
/// order. Fully deterministic and the cheapest policy available.
#[derive(Debug, Clone, Copy)]
pub struct InputOrder;

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<CourseHourId> {
        context.unassigned_variables().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::fixture;
    use crate::engine::ConstraintChecker;

    #[test]
    fn selects_the_first_unassigned_variable() {
        let mut fixture = fixture();
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);
        let mut selector = InputOrder;

        {
            let mut context = SelectionContext::new(
                &fixture.state,
                &fixture.store,
                &checker,
                &mut fixture.random,
            );
            assert_eq!(
                selector.select_variable(&mut context),
                Some(CourseHourId::new(0))
            );
        }

        fixture.state.assign(CourseHourId::new(0), 0);
        let mut context = SelectionContext::new(
            &fixture.state,
            &fixture.store,
            &checker,
            &mut fixture.random,
        );
        assert_eq!(
            selector.select_variable(&mut context),
            Some(CourseHourId::new(1))
        );
    }

    #[test]
    fn returns_none_once_everything_is_assigned() {
        let mut fixture = fixture();
        for variable in 0..3 {
            fixture.state.assign(CourseHourId::new(variable), 0);
        }
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);
        let mut context = SelectionContext::new(
            &fixture.state,
            &fixture.store,
            &checker,
            &mut fixture.random,
        );

        let mut selector = InputOrder;
        assert_eq!(selector.select_variable(&mut context), None);
    }
}
