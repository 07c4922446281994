use super::Direction;
use super::TieBreaker;
use super::TieKeys;
use crate::basic_types::Random;
use crate::options::TieBreakPolicy;

/// A [`TieBreaker`] which keeps every option tied for the best score and resolves the tie
/// with the configured [`TieBreakPolicy`] when the selection is made.
pub struct PolicyTieBreaker<Var, Value> {
    policy: TieBreakPolicy,
    direction: Direction,
    /// The best score seen so far, [`None`] before the first option is considered.
    best_value: Option<Value>,
    /// Every option whose score equals the best, in consideration order.
    tied: Vec<(Var, TieKeys)>,
}

impl<Var, Value> std::fmt::Debug for PolicyTieBreaker<Var, Value> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyTieBreaker")
            .field("policy", &self.policy)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<Var, Value> PolicyTieBreaker<Var, Value> {
    pub fn new(direction: Direction, policy: TieBreakPolicy) -> Self {
        PolicyTieBreaker {
            policy,
            direction,
            best_value: None,
            tied: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.best_value = None;
        self.tied.clear();
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for PolicyTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value, keys: TieKeys) {
        match &self.best_value {
            Some(best) => {
                let improves = match self.direction {
                    Direction::Maximum => value > *best,
                    Direction::Minimum => value < *best,
                };
                if improves {
                    self.best_value = Some(value);
                    self.tied.clear();
                    self.tied.push((variable, keys));
                } else if value == *best {
                    self.tied.push((variable, keys));
                }
            }
            None => {
                self.best_value = Some(value);
                self.tied.push((variable, keys));
            }
        }
    }

    fn select(&mut self, random: &mut dyn Random) -> Option<Var> {
        let selected = match self.policy {
            TieBreakPolicy::First => self.tied.first(),
            TieBreakPolicy::Last => self.tied.last(),
            TieBreakPolicy::Random if !self.tied.is_empty() => {
                let index = random.generate_usize_in_range(0..self.tied.len());
                self.tied.get(index)
            }
            TieBreakPolicy::Random => None,
            TieBreakPolicy::MinIndex => self.tied.iter().min_by_key(|(_, keys)| keys.index),
            TieBreakPolicy::MaxIndex => self.tied.iter().max_by_key(|(_, keys)| keys.index),
            TieBreakPolicy::MinId => self.tied.iter().min_by_key(|(_, keys)| keys.id),
            TieBreakPolicy::MaxId => self.tied.iter().max_by_key(|(_, keys)| keys.id),
            TieBreakPolicy::MinConstraints => {
                self.tied.iter().min_by_key(|(_, keys)| keys.constraints)
            }
            TieBreakPolicy::MaxConstraints => {
                self.tied.iter().max_by_key(|(_, keys)| keys.constraints)
            }
            TieBreakPolicy::MinDegree => self.tied.iter().min_by_key(|(_, keys)| keys.degree),
            TieBreakPolicy::MaxDegree => self.tied.iter().max_by_key(|(_, keys)| keys.degree),
        }
        .map(|(variable, _)| *variable);

        self.reset();
        selected
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}
