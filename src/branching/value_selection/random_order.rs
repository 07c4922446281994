use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::variables::CourseHourId;

/// A [`ValueSelector`] which tries the values in a uniformly random order.
///
/// This policy is explicitly non-deterministic across seeds; it draws from the run's seeded
/// generator, so a fixed seed reproduces the same order.
#[derive(Debug, Clone, Copy)]
pub struct RandomOrder;

impl ValueSelector for RandomOrder {
    fn order_values(
        &mut self,
        context: &mut SelectionContext,
        variable: CourseHourId,
    ) -> Vec<u32> {
        let mut values = context.domain(variable).as_slice().to_vec();
        let random = context.random();
        for position in (1..values.len()).rev() {
            let other = random.generate_usize_in_range(0..position + 1);
            values.swap(position, other);
        }
        values
    }
}
