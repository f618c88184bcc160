//! Nearest-neighbor starting tour.
//!
//! Builds the search seed greedily: starting from node 0, always travel
//! to the cheapest unvisited node next. No quality guarantee, but a far
//! better anchor than a random permutation.
//!
//! # Complexity
//!
//! O(n²) where n = matrix dimension.

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Constructs a greedy nearest-neighbor tour over the whole instance.
///
/// Node 0 is the fixed start. At every step the unvisited node with the
/// minimum cost from the current last node is appended; ties go to the
/// lowest node index, since later equal costs never displace an earlier
/// choice.
///
/// # Examples
///
/// ```
/// use u_atsp::constructive::nearest_neighbor_tour;
/// use u_atsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
/// assert_eq!(nearest_neighbor_tour(&dm).unwrap(), vec![0, 1, 3, 2]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix) -> Result<Vec<usize>> {
    let n = distances.dimension();
    let mut tour = Vec::with_capacity(n);
    if n == 0 {
        return Ok(tour);
    }

    let mut visited = vec![false; n];
    tour.push(0);
    visited[0] = true;

    while tour.len() < n {
        let last = tour[tour.len() - 1];
        let mut nearest: Option<(usize, u32)> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let cost = distances.get(last, candidate)?;
            let closer = match nearest {
                Some((_, best_cost)) => cost < best_cost,
                None => true,
            };
            if closer {
                nearest = Some((candidate, cost));
            }
        }
        let (next, _) = nearest.expect("an unvisited node remains while the tour is short");
        tour.push(next);
        visited[next] = true;
    }

    Ok(tour)
}
