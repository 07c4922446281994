use crate::variables::CourseHourId;

/// A complete assignment of every course-hour variable to one of its candidate values.
///
/// The stored values are indices into each variable's candidate table in the
/// [`VariableStore`](crate::variables::VariableStore); the materialised, externally shared
/// representation is produced by the scheduler from this structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    values: Vec<u32>,
}

impl Solution {
    pub(crate) fn new(values: Vec<u32>) -> Self {
        Solution { values }
    }

    /// The candidate index assigned to `variable`.
    pub fn value(&self, variable: CourseHourId) -> u32 {
        self.values[variable.index()]
    }

    /// The number of assigned variables.
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the assignment as (variable, candidate index) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CourseHourId, u32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &value)| (CourseHourId::new(index as u32), value))
    }
}
