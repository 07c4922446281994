use crate::basic_types::GeometricSequence;
use crate::basic_types::SequenceGenerator;

/// Tracks when the search should be restarted from the root.
///
/// Restarts are counted in failures since the last restart. The threshold grows geometrically
/// across restarts, so every run eventually gets an uninterrupted tail and exhaustion remains
/// a proof of infeasibility. Learned nogoods survive a restart.
#[derive(Debug)]
pub(crate) struct RestartStrategy {
    sequence: GeometricSequence,
    failures_since_restart: u64,
    failures_until_restart: u64,
}

impl RestartStrategy {
    pub(crate) fn new(base_interval: u64) -> Self {
        let mut sequence = GeometricSequence::new(base_interval, 2.0);
        let failures_until_restart = sequence.next();
        RestartStrategy {
            sequence,
            failures_since_restart: 0,
            failures_until_restart,
        }
    }

    pub(crate) fn notify_failure(&mut self) {
        self.failures_since_restart += 1;
    }

    pub(crate) fn should_restart(&self) -> bool {
        self.failures_since_restart >= self.failures_until_restart
    }

    /// Advances to the next (larger) threshold after a restart was performed.
    pub(crate) fn notify_restart(&mut self) {
        self.failures_since_restart = 0;
        self.failures_until_restart = self.sequence.next();
    }
}
