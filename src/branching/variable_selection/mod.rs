//! Variable selection: which unassigned variable the search branches on next.

mod input_order;
mod max_degree;
mod most_constrained;
mod randomised;
mod smallest_domain;
mod variable_selector;

pub use input_order::InputOrder;
pub use max_degree::MaxDegree;
pub use most_constrained::MostConstrained;
pub use randomised::Randomised;
pub use smallest_domain::SmallestDomain;
pub use variable_selector::VariableSelector;

use crate::options::TieBreakPolicy;
use crate::options::VariableSelectionPolicy;

/// Instantiates the selector for the configured policy, wiring in the run's tie-break policy.
pub fn create(
    policy: VariableSelectionPolicy,
    tie_breaking: TieBreakPolicy,
) -> Box<dyn VariableSelector> {
    match policy {
        VariableSelectionPolicy::FirstUnassigned => Box::new(InputOrder),
        VariableSelectionPolicy::MinimumRemainingValues => {
            Box::new(SmallestDomain::new(tie_breaking))
        }
        VariableSelectionPolicy::DegreeHeuristic => Box::new(MaxDegree::new(tie_breaking)),
        VariableSelectionPolicy::MostConstraining => Box::new(MostConstrained::new(tie_breaking)),
    }
}
