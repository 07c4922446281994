//! Tie-breaking: the rule applied when a selection heuristic ranks several options equally.

mod policy_tie_breaker;
mod tie_breaker;

pub use policy_tie_breaker::PolicyTieBreaker;
pub use tie_breaker::Direction;
pub use tie_breaker::TieBreaker;

use crate::basic_types::Random;
use crate::options::TieBreakPolicy;

/// The per-option metrics a tie-break policy may consult: the position in the considered
/// order, the option's identifier, its remaining-constraint count, and its degree.
///
/// For variables the constraint count is the number of still-active (unassigned-neighbour)
/// constraints and the degree the total neighbour count; for values the constraint count is
/// the number of neighbouring domain values the option would remove and the degree the number
/// of distinct neighbours it affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieKeys {
    pub index: usize,
    pub id: u64,
    pub constraints: u64,
    pub degree: u64,
}

/// Reorders a group of equally ranked options in place according to the tie-break policy.
/// The group arrives in the order the options were considered.
pub(crate) fn order_tied_group<T>(
    group: &mut [(T, TieKeys)],
    policy: TieBreakPolicy,
    random: &mut dyn Random,
) {
    match policy {
        TieBreakPolicy::First => {}
        TieBreakPolicy::Last => group.reverse(),
        TieBreakPolicy::Random => {
            // Fisher-Yates over the run's entropy source.
            for position in (1..group.len()).rev() {
                let other = random.generate_usize_in_range(0..position + 1);
                group.swap(position, other);
            }
        }
        TieBreakPolicy::MinIndex => group.sort_by_key(|(_, keys)| keys.index),
        TieBreakPolicy::MaxIndex => group.sort_by_key(|(_, keys)| std::cmp::Reverse(keys.index)),
        TieBreakPolicy::MinId => group.sort_by_key(|(_, keys)| keys.id),
        TieBreakPolicy::MaxId => group.sort_by_key(|(_, keys)| std::cmp::Reverse(keys.id)),
        TieBreakPolicy::MinConstraints => group.sort_by_key(|(_, keys)| keys.constraints),
        TieBreakPolicy::MaxConstraints => {
            group.sort_by_key(|(_, keys)| std::cmp::Reverse(keys.constraints))
        }
        TieBreakPolicy::MinDegree => group.sort_by_key(|(_, keys)| keys.degree),
        TieBreakPolicy::MaxDegree => group.sort_by_key(|(_, keys)| std::cmp::Reverse(keys.degree)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    fn keys(index: usize, id: u64) -> TieKeys {
        TieKeys {
            index,
            id,
            constraints: 0,
            degree: 0,
        }
    }

    #[test]
    fn last_reverses_the_considered_order() {
        let mut random = TestRandom::default();
        let mut group = vec![("a", keys(0, 0)), ("b", keys(1, 1)), ("c", keys(2, 2))];
        order_tied_group(&mut group, TieBreakPolicy::Last, &mut random);
        assert_eq!(group[0].0, "c");
        assert_eq!(group[2].0, "a");
    }

    #[test]
    fn max_id_prefers_the_largest_identifier() {
        let mut random = TestRandom::default();
        let mut group = vec![("a", keys(0, 3)), ("b", keys(1, 7)), ("c", keys(2, 5))];
        order_tied_group(&mut group, TieBreakPolicy::MaxId, &mut random);
        assert_eq!(group[0].0, "b");
    }

    #[test]
    fn random_ordering_draws_from_the_provided_source() {
        let mut random = TestRandom {
            usizes: vec![0, 1],
            ..Default::default()
        };
        let mut group = vec![("a", keys(0, 0)), ("b", keys(1, 1)), ("c", keys(2, 2))];
        order_tied_group(&mut group, TieBreakPolicy::Random, &mut random);
        // Swaps: (2, 0) then (1, 1).
        assert_eq!(group.iter().map(|(name, _)| *name).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }
}
