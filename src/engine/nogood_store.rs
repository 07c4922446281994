use crate::engine::SearchState;
use crate::variables::CourseHourId;

/// A conflict learned from an exhausted branch: a set of (variable, value) pairs that cannot
/// all hold in any solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Nogood {
    pairs: Vec<(CourseHourId, u32)>,
}

/// The store of learned nogoods, capped at a configured maximum.
///
/// Before the engine tries a value, the store is consulted: if the resulting assignment would
/// contain all pairs of a recorded nogood, the value is rejected without a consistency check.
/// Once the cap is reached, further conflicts are not recorded.
#[derive(Debug)]
pub(crate) struct NogoodStore {
    nogoods: Vec<Nogood>,
    capacity: usize,
}

impl NogoodStore {
    pub(crate) fn new(capacity: usize) -> Self {
        NogoodStore {
            nogoods: Vec::new(),
            capacity,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nogoods.len()
    }

    /// Records the assignment snapshot over `conflict_variables` as a nogood. Returns whether
    /// the nogood was stored.
    pub(crate) fn record(
        &mut self,
        conflict_variables: &[CourseHourId],
        state: &SearchState,
    ) -> bool {
        if self.nogoods.len() >= self.capacity || conflict_variables.is_empty() {
            return false;
        }

        let mut pairs = conflict_variables
            .iter()
            .filter_map(|&variable| {
                state
                    .assignment(variable)
                    .map(|candidate| (variable, candidate))
            })
            .collect::<Vec<_>>();
        if pairs.is_empty() {
            return false;
        }
        pairs.sort_unstable();

        let nogood = Nogood { pairs };
        if self.nogoods.contains(&nogood) {
            return false;
        }
        self.nogoods.push(nogood);
        true
    }

    /// Whether extending `state` with (`variable` → `candidate`) would complete a recorded
    /// nogood.
    pub(crate) fn forbids(
        &self,
        variable: CourseHourId,
        candidate: u32,
        state: &SearchState,
    ) -> bool {
        self.nogoods.iter().any(|nogood| {
            nogood.pairs.iter().all(|&(other, value)| {
                if other == variable {
                    value == candidate
                } else {
                    state.assignment(other) == Some(value)
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::tests::fixture;

    #[test]
    fn a_recorded_conflict_forbids_repeating_it() {
        let mut fixture = fixture();
        let mut store = NogoodStore::new(10);

        let c1 = CourseHourId::new(0);
        let c2 = CourseHourId::new(1);
        fixture.state.assign(c1, 0);
        fixture.state.assign(c2, 3);

        assert!(store.record(&[c1, c2], &fixture.state));
        assert_eq!(store.len(), 1);

        // The same partial assignment forbids completing the pair, any other value is fine.
        let mut replay = crate::engine::SearchState::root(&fixture.store);
        replay.assign(c1, 0);
        assert!(store.forbids(c2, 3, &replay));
        assert!(!store.forbids(c2, 4, &replay));

        // Under a different context the pair is allowed.
        let other = crate::engine::SearchState::root(&fixture.store);
        assert!(!store.forbids(c2, 3, &other));
    }

    #[test]
    fn the_capacity_is_respected() {
        let mut fixture = fixture();
        let mut store = NogoodStore::new(1);

        let c1 = CourseHourId::new(0);
        let c2 = CourseHourId::new(1);
        fixture.state.assign(c1, 0);
        fixture.state.assign(c2, 3);

        assert!(store.record(&[c1], &fixture.state));
        assert!(!store.record(&[c2], &fixture.state));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicates_are_not_stored_twice() {
        let mut fixture = fixture();
        let mut store = NogoodStore::new(10);

        let c1 = CourseHourId::new(0);
        fixture.state.assign(c1, 0);

        assert!(store.record(&[c1], &fixture.state));
        assert!(!store.record(&[c1], &fixture.state));
        assert_eq!(store.len(), 1);
    }
}
