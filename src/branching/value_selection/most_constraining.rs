use super::order_by_impact;
use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::options::TieBreakPolicy;
use crate::variables::CourseHourId;

/// A [`ValueSelector`] which tries the values in descending order of how many options they
/// remove from the neighbouring domains. Failing fast on the most constraining values is
/// useful for infeasibility proofs and for enumerating all solutions.
#[derive(Debug, Clone, Copy)]
pub struct MostConstraining {
    tie_breaking: TieBreakPolicy,
}

impl MostConstraining {
    pub fn new(tie_breaking: TieBreakPolicy) -> Self {
        MostConstraining { tie_breaking }
    }
}

impl ValueSelector for MostConstraining {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: CourseHourId,
    ) -> Vec<u32> {
        order_by_impact(context, variable, true, self.tie_breaking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::fixture;
    use crate::branching::value_selection::LeastConstraining;
    use crate::engine::ConstraintChecker;

    #[test]
    fn reverses_the_relative_order_of_impact_classes() {
        let mut fixture = fixture();
        let c3 = CourseHourId::new(2);
        let keep = fixture.store.candidates(c3)
            .iter()
            .position(|candidate| candidate.slot == 0)
            .unwrap() as u32;
        for candidate in fixture.state.domain(c3).iter().collect::<Vec<_>>() {
            if candidate != keep {
                let _ = fixture.state.remove_value(c3, candidate);
            }
        }

        let checker = ConstraintChecker::new(&fixture.instance, &fixture.store);

        let most = {
            let mut context = SelectionContext::new(
                &fixture.state,
                &fixture.store,
                &checker,
                &mut fixture.random,
            );
            MostConstraining::new(TieBreakPolicy::First)
                .order_values(&mut context, CourseHourId::new(0))
        };
        let least = {
            let mut context = SelectionContext::new(
                &fixture.state,
                &fixture.store,
                &checker,
                &mut fixture.random,
            );
            LeastConstraining::new(TieBreakPolicy::First)
                .order_values(&mut context, CourseHourId::new(0))
        };

        // Candidate 2, (s1, r3), is the only value with a larger impact; it leads the
        // descending order and trails the ascending one.
        assert_eq!(most, vec![2, 0, 1, 3, 4, 5]);
        assert_eq!(least, vec![0, 1, 3, 4, 5, 2]);
    }
}
