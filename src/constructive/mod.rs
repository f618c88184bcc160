//! Constructive heuristics for seeding the search.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor seed, O(n²)
//! - [`random_tour`] — Seeded random tour for epoch restarts

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random::random_tour;
