//! Tabu Search engine for the asymmetric TSP.
//!
//! A single-solution trajectory metaheuristic: each iteration scans the
//! pairwise-swap neighborhood of the current tour and steps to the
//! scan's best point, while a bounded FIFO of recent moves discourages
//! cycling back. Expired epochs restart the trajectory from a random
//! tour; the global best survives restarts and is what
//! [`TabuSolver::solve`] returns when the wall-clock budget runs out.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod neighborhood;
mod solver;

pub use config::TabuConfig;
pub use list::{Move, TabuList};
pub use solver::{TabuResult, TabuSolver};
