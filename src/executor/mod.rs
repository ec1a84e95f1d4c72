mod interactive;
mod runner;

pub use interactive::run_interactive;
pub use runner::{execute, run, DEBUGGING_NOTICE};

use std::time::Duration;

/// Artificial latency standing in for the backend the playground does not
/// have. Pacing only; correctness never depends on it.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub run_delay: Duration,
    pub step_delay: Duration,
}

impl Pacing {
    /// The delays the simulation advertises: ~1s per run, ~200ms per step.
    pub fn simulated() -> Self {
        Self {
            run_delay: Duration::from_secs(1),
            step_delay: Duration::from_millis(200),
        }
    }

    pub fn none() -> Self {
        Self {
            run_delay: Duration::ZERO,
            step_delay: Duration::ZERO,
        }
    }

    pub fn pause_for_run(&self) {
        if !self.run_delay.is_zero() {
            std::thread::sleep(self.run_delay);
        }
    }

    pub fn pause_for_step(&self) {
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::simulated()
    }
}
