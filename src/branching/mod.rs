//! The pluggable ordering heuristics consumed by the search loop: variable selection, value
//! selection, and tie-breaking.

pub mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;

#[cfg(test)]
pub(crate) mod tests {
    use crate::basic_types::tests::TestRandom;
    use crate::engine::SearchState;
    use crate::model::Course;
    use crate::model::Room;
    use crate::model::Teacher;
    use crate::model::TimeSlot;
    use crate::model::TimetableInstance;
    use crate::variables;
    use crate::variables::VariableStore;

    pub(crate) struct Fixture {
        pub(crate) instance: TimetableInstance,
        pub(crate) store: VariableStore,
        pub(crate) state: SearchState,
        pub(crate) random: TestRandom,
    }

    /// Three single-hour courses over two slots: `c1` and `c2` share teacher `t1` and class
    /// `g1` (domains of six candidates), `c3` enrols 40 students and therefore fits only the
    /// largest room (domain of two candidates).
    pub(crate) fn fixture() -> Fixture {
        let instance = TimetableInstance::new(
            vec![
                Course::new("c1", "t1", 1).with_student_count(20).with_class("g1"),
                Course::new("c2", "t1", 1).with_student_count(20).with_class("g1"),
                Course::new("c3", "t2", 1).with_student_count(40).with_class("g2"),
            ],
            vec![Teacher::new("t1"), Teacher::new("t2")],
            vec![Room::new("r1", 30), Room::new("r2", 35), Room::new("r3", 50)],
            vec![TimeSlot::new("s1", 0, 0), TimeSlot::new("s2", 0, 1)],
        );
        let store = variables::build(&instance).unwrap();
        let state = SearchState::root(&store);
        Fixture {
            instance,
            store,
            state,
            random: TestRandom::default(),
        }
    }
}
