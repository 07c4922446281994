use super::order_by_impact;
use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::options::TieBreakPolicy;
use crate::variables::CourseHourId;

/// A [`ValueSelector`] which tries the values in ascending order of how many options they
/// remove from the neighbouring domains, keeping the search as unconstrained as possible.
#[derive(Debug, Clone, Copy)]
pub struct LeastConstraining {
    tie_breaking: TieBreakPolicy,
}

impl LeastConstraining {
    pub fn new(tie_breaking: TieBreakPolicy) -> Self {
        LeastConstraining { tie_breaking }
    }
}

impl ValueSelector for LeastConstraining {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: CourseHourId,
    ) -> Vec<u32> {
        order_by_impact(context, variable, false, self.tie_breaking)
    }
}
