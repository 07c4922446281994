use super::TieKeys;
use crate::basic_types::Random;

/// Whether the tie-breaker should find the option with the maximum or minimum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

/// The interface for breaking ties between options scored by a selection heuristic.
///
/// The heuristic streams every option it considers through [`TieBreaker::consider`] together
/// with its score and tie keys; [`TieBreaker::select`] then returns the best-scored option,
/// applying the tie-break rule among the equally best, and resets the tie-breaker for the
/// next selection round.
pub trait TieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value, keys: TieKeys);

    fn select(&mut self, random: &mut dyn Random) -> Option<Var>;

    fn direction(&self) -> Direction;
}
