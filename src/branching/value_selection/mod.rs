//! Value selection: the order in which the candidate values of the chosen variable are tried.

mod in_order;
mod least_constraining;
mod most_constraining;
mod random_order;
mod value_selector;

pub use in_order::InOrder;
pub use least_constraining::LeastConstraining;
pub use most_constraining::MostConstraining;
pub use random_order::RandomOrder;
pub use value_selector::ValueSelector;

use crate::branching::tie_breaking::order_tied_group;
use crate::branching::tie_breaking::TieKeys;
use crate::branching::SelectionContext;
use crate::options::TieBreakPolicy;
use crate::options::ValueSelectionPolicy;
use crate::variables::CourseHourId;

/// Instantiates the value ordering for the configured policy, wiring in the run's tie-break
/// policy.
pub fn create(policy: ValueSelectionPolicy, tie_breaking: TieBreakPolicy) -> Box<dyn ValueSelector> {
    match policy {
        ValueSelectionPolicy::NaturalOrder => Box::new(InOrder),
        ValueSelectionPolicy::LeastConstraining => Box::new(LeastConstraining::new(tie_breaking)),
        ValueSelectionPolicy::MostConstraining => Box::new(MostConstraining::new(tie_breaking)),
        ValueSelectionPolicy::RandomOrder => Box::new(RandomOrder),
    }
}

/// Orders the domain of `variable` by the impact each value has on the neighbouring domains,
/// ascending or descending, resolving equal-impact runs with the tie-break policy.
pub(crate) fn order_by_impact(
    context: &mut SelectionContext,
    variable: CourseHourId,
    descending: bool,
    tie_breaking: TieBreakPolicy,
) -> Vec<u32> {
    let mut scored = context
        .domain(variable)
        .iter()
        .enumerate()
        .map(|(position, candidate)| {
            let (removed, affected) = context.value_impact(variable, candidate);
            let keys = TieKeys {
                index: position,
                id: u64::from(candidate),
                constraints: removed,
                degree: affected,
            };
            (candidate, keys)
        })
        .collect::<Vec<_>>();

    if descending {
        scored.sort_by_key(|(_, keys)| std::cmp::Reverse(keys.constraints));
    } else {
        scored.sort_by_key(|(_, keys)| keys.constraints);
    }

    // Resolve each run of equal impact with the tie-break policy.
    let mut start = 0;
    while start < scored.len() {
        let impact = scored[start].1.constraints;
        let length = scored[start..]
            .iter()
            .take_while(|(_, keys)| keys.constraints == impact)
            .count();
        order_tied_group(&mut scored[start..start + length], tie_breaking, context.random());
        start += length;
    }

    scored.into_iter().map(|(candidate, _)| candidate).collect()
}
