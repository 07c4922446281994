use crate::branching::SelectionContext;
use crate::variables::CourseHourId;

/// The interface for ordering the candidate values of the selected variable for trial.
///
/// The returned indices refer to the variable's candidate table and are a permutation of its
/// current domain; the search tries them front to back.
pub trait ValueSelector {
    fn order_values(&mut self, context: &mut SelectionContext, variable: CourseHourId)
        -> Vec<u32>;
}
