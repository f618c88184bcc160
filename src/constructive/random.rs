//! Random restart tour.
//!
//! Produces the diversification tour used when an epoch expires: node 0
//! stays first and the remaining positions are filled by rejection
//! sampling over the unvisited indices. The generator is injected so
//! restart sequences are reproducible under a fixed seed.

use rand::Rng;

/// Draws a uniformly random tour that starts at node 0.
///
/// Positions after the first are filled by repeatedly sampling an index
/// in `[1, dim)` and retrying on collision until every node is placed.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_atsp::constructive::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(5, &mut rng);
/// assert_eq!(tour.len(), 5);
/// assert_eq!(tour[0], 0);
/// ```
pub fn random_tour<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Vec<usize> {
    let mut tour = Vec::with_capacity(dim);
    if dim == 0 {
        return tour;
    }

    let mut visited = vec![false; dim];
    tour.push(0);
    visited[0] = true;

    while tour.len() < dim {
        let candidate = rng.random_range(1..dim);
        if !visited[candidate] {
            visited[candidate] = true;
            tour.push(candidate);
        }
    }

    tour
}
