use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::variables::CourseHourId;

/// A decorating [`VariableSelector`] which, with the configured probability, replaces the
/// wrapped selector's decision by a uniformly random unassigned variable. Its entropy comes
/// from the run's seeded generator, so runs remain reproducible.
pub struct Randomised {
    inner: Box<dyn VariableSelector>,
    probability: f64,
}

impl std::fmt::Debug for Randomised {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Randomised")
            .field("probability", &self.probability)
            .finish()
    }
}

impl Randomised {
    pub fn new(inner: Box<dyn VariableSelector>, probability: f64) -> Self {
        Randomised { inner, probability }
    }
}

impl VariableSelector for Randomised {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<CourseHourId> {
        let unassigned = context.unassigned_variables().collect::<Vec<_>>();
        if unassigned.is_empty() {
            return None;
        }

        if context.random().generate_bool(self.probability) {
            let index = context.random().generate_usize_in_range(0..unassigned.len());
            Some(unassigned[index])
        } else {
            self.inner.select_variable(context)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::branching::tests::fixture;
    use crate::branching::variable_selection::InputOrder;
    use crate::engine::ConstraintChecker;

    #[test]
    fn a_triggered_coin_flip_picks_a_random_variable() {
        let mut fixture = fixture();
        fixture.random = TestRandom {
            bools: vec![true],
            usizes: vec![2],
        };
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);
        let mut context = SelectionContext::new(
            &fixture.state,
            &fixture.store,
            &checker,
            &mut fixture.random,
        );

        let mut selector = Randomised::new(Box::new(InputOrder), 0.5);
        assert_eq!(
            selector.select_variable(&mut context),
            Some(CourseHourId::new(2))
        );
    }

    #[test]
    fn an_untriggered_coin_flip_delegates_to_the_wrapped_selector() {
        let mut fixture = fixture();
        fixture.random = TestRandom {
            bools: vec![false],
            usizes: vec![],
        };
        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);
        let mut context = SelectionContext::new(
            &fixture.state,
            &fixture.store,
            &checker,
            &mut fixture.random,
        );

        let mut selector = Randomised::new(Box::new(InputOrder), 0.5);
        assert_eq!(
            selector.select_variable(&mut context),
            Some(CourseHourId::new(0))
        );
    }
}
