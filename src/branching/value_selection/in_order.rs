use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::variables::CourseHourId;

/// A [`ValueSelector`] which tries the values in domain iteration order. Deterministic.
#[derive(Debug, Clone, Copy)]
pub struct InOrder;

impl ValueSelector for InOrder {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: CourseHourId,
    ) -> Vec<u32> {
        context.domain(variable).as_slice().to_vec()
    }
}
