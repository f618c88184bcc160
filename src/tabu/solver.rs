//! Time-bounded search loop.
//!
//! # Algorithm
//!
//! 1. Seed the current and global-best solutions with the greedy
//!    nearest-neighbor tour
//! 2. While the wall-clock budget holds:
//!    a. Once an epoch's iteration budget is spent, replace the current
//!       solution with a fresh random tour
//!    b. Step the current solution to the best point of its
//!       neighborhood scan
//!    c. Adopt a strictly better current solution as the global best
//! 3. Return the global best
//!
//! Termination is purely time-bounded and polled once per iteration, so
//! a call can overrun its budget by at most one O(n²) scan.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::constructive::{nearest_neighbor_tour, random_tour};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Solution;

use super::config::TabuConfig;
use super::list::TabuList;
use super::neighborhood::best_of_scan;

/// Result of a tabu search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabuResult {
    /// Best solution found within the time budget.
    pub best: Solution,
    /// Total neighbor steps executed.
    pub iterations: usize,
    /// Number of epoch restarts.
    pub restarts: usize,
    /// Wall-clock time actually spent.
    pub elapsed: Duration,
}

/// Tabu search solver for a single ATSP instance.
///
/// The solver borrows the distance matrix read-only for its whole
/// lifetime; all mutable search state (current tour, tabu list, RNG,
/// iteration counter) lives inside the instance. Several solvers may
/// therefore share one matrix, each running its own search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_atsp::distance::DistanceMatrix;
/// use u_atsp::tabu::{TabuConfig, TabuSolver};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
/// let config = TabuConfig::default()
///     .with_max_tabu(3)
///     .with_time_limit(Duration::from_millis(50))
///     .with_seed(42);
///
/// let mut solver = TabuSolver::new(&dm, config).unwrap();
/// let result = solver.solve().unwrap();
/// assert!(result.best.weight() <= 80);
/// ```
pub struct TabuSolver<'a> {
    distances: &'a DistanceMatrix,
    config: TabuConfig,
    tabus: TabuList,
    rng: StdRng,
}

impl<'a> TabuSolver<'a> {
    /// Creates a solver for the given instance.
    ///
    /// Fails with [`Error::Configuration`] on an empty matrix, a zero
    /// tabu capacity, or a zero time budget.
    pub fn new(distances: &'a DistanceMatrix, config: TabuConfig) -> Result<Self> {
        config.validate()?;
        if distances.dimension() == 0 {
            return Err(Error::configuration("matrix dimension must be positive"));
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            distances,
            tabus: TabuList::new(config.max_tabu),
            rng: StdRng::seed_from_u64(seed),
            config,
        })
    }

    /// Runs the search and returns the best solution found.
    ///
    /// The tabu list is cleared on entry, so repeated calls each start
    /// with empty short-term memory.
    pub fn solve(&mut self) -> Result<TabuResult> {
        let n = self.distances.dimension();
        let started = Instant::now();
        self.tabus.clear();

        let seed_tour = nearest_neighbor_tour(self.distances)?;
        let mut best = Solution::evaluate(seed_tour, self.distances)?;
        log::debug!("tabu.solve: start n={n} seed_weight={}", best.weight());

        if n == 1 {
            // The single-node tour is the whole search space.
            return Ok(TabuResult {
                best,
                iterations: 0,
                restarts: 0,
                elapsed: started.elapsed(),
            });
        }

        let mut current = best.clone();
        let mut iterations = 0usize;
        let mut restarts = 0usize;
        let mut epoch_iteration = 0u32;

        while started.elapsed() < self.config.time_limit {
            if epoch_iteration > self.config.iterations_per_epoch {
                let tour = random_tour(n, &mut self.rng);
                current = Solution::evaluate(tour, self.distances)?;
                epoch_iteration = 0;
                restarts += 1;
                log::trace!(
                    "tabu.solve: restart #{restarts} weight={}",
                    current.weight()
                );
            }

            epoch_iteration += 1;
            iterations += 1;
            current = best_of_scan(&current, self.distances, &mut self.tabus)?;

            if current < best {
                best = current.clone();
                epoch_iteration = 0;
                log::debug!(
                    "tabu.solve: new best weight={} at iteration {iterations}",
                    best.weight()
                );
            }
        }

        log::debug!(
            "tabu.solve: done weight={} iterations={iterations} restarts={restarts}",
            best.weight()
        );
        Ok(TabuResult {
            best,
            iterations,
            restarts,
            elapsed: started.elapsed(),
        })
    }
}
