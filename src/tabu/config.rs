//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration parameters for the tabu search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_atsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_tabu(10)
///     .with_iterations_per_epoch(500)
///     .with_time_limit(Duration::from_millis(200))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Maximum number of entries the tabu list holds.
    pub max_tabu: usize,
    /// Iterations without improvement before a random restart.
    pub iterations_per_epoch: u32,
    /// Wall-clock budget for a [`solve`](super::TabuSolver::solve) call.
    pub time_limit: Duration,
    /// Seed for the restart generator (`None` draws one from entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_tabu: 7,
            iterations_per_epoch: 1_000,
            time_limit: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_max_tabu(mut self, max_tabu: usize) -> Self {
        self.max_tabu = max_tabu;
        self
    }

    /// Sets the iteration budget of an epoch.
    pub fn with_iterations_per_epoch(mut self, iterations: u32) -> Self {
        self.iterations_per_epoch = iterations;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the restart generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters, failing fast before any search starts.
    pub fn validate(&self) -> Result<()> {
        if self.max_tabu == 0 {
            return Err(Error::configuration("max_tabu must be positive"));
        }
        if self.time_limit.is_zero() {
            return Err(Error::configuration("time_limit must be positive"));
        }
        Ok(())
    }
}
