use pk_core::DECISION_TIMEOUT_SECS;
use pk_core::SHOWDOWN_TIMEOUT_SECS;
use std::time::Duration;
use tokio::time::Instant;

/// Configuration for a table's advisory timeouts.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub decision: Duration,
    pub showdown: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            decision: Duration::from_secs(DECISION_TIMEOUT_SECS),
            showdown: Duration::from_secs(SHOWDOWN_TIMEOUT_SECS),
        }
    }
}

/// Tracks the current turn's deadline. A periodic scan elsewhere turns an
/// expired deadline into a synthesized Check-or-Fold; the timer itself only
/// tracks time, it never acts.
#[derive(Debug)]
pub struct Timer {
    config: TimerConfig,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }

    pub fn start_decision(&mut self) {
        self.deadline = Some(Instant::now() + self.config.decision);
    }

    pub fn start_showdown(&mut self) {
        self.deadline = Some(Instant::now() + self.config.showdown);
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_starts_cleared() {
        let timer = Timer::with_defaults();
        assert!(timer.deadline().is_none());
        assert!(!timer.expired());
    }

    #[test]
    fn timer_sets_and_clears_a_deadline() {
        let mut timer = Timer::with_defaults();
        timer.start_decision();
        assert!(timer.deadline().is_some());
        assert!(!timer.expired());
        timer.clear();
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn a_deadline_in_the_past_is_expired() {
        let mut timer = Timer::new(TimerConfig {
            decision: Duration::from_millis(0),
            showdown: Duration::from_millis(0),
        });
        timer.start_decision();
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.expired());
    }
}
