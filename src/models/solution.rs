//! Tour solution type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// A candidate Hamiltonian cycle: a visiting order plus its cyclic cost.
///
/// The tour lists every node exactly once; the cycle implicitly closes
/// from the last node back to the first. Solutions are ordered by weight
/// alone, so two tours of equal cost compare as equal even when the
/// visiting orders differ.
///
/// # Examples
///
/// ```
/// use u_atsp::distance::DistanceMatrix;
/// use u_atsp::models::Solution;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
/// let solution = Solution::evaluate(vec![0, 1, 3, 2], &dm).unwrap();
/// assert_eq!(solution.weight(), 80); // 10 + 25 + 30 + 15
/// assert_eq!(solution.to_string(), "0 -> 1 -> 3 -> 2 -> 0 (weight 80)");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    tour: Vec<usize>,
    weight: u64,
}

impl Solution {
    /// Builds a solution by recomputing the cyclic weight of `tour`.
    pub fn evaluate(tour: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        let weight = Self::cycle_weight(&tour, distances)?;
        Ok(Self { tour, weight })
    }

    /// Builds a solution from an already-evaluated scan result.
    pub(crate) fn from_parts(tour: Vec<usize>, weight: u64) -> Self {
        Self { tour, weight }
    }

    /// Computes the cyclic cost of a tour: the sum of consecutive edges
    /// plus the closing edge back to the first node.
    ///
    /// A tour with fewer than two nodes has no edges and weighs 0. This
    /// is a pure function of the tour and the matrix; a stored
    /// [`weight`](Self::weight) always equals it.
    pub fn cycle_weight(tour: &[usize], distances: &DistanceMatrix) -> Result<u64> {
        if tour.len() < 2 {
            return Ok(0);
        }
        let mut weight = 0u64;
        for pair in tour.windows(2) {
            weight += u64::from(distances.get(pair[0], pair[1])?);
        }
        weight += u64::from(distances.get(tour[tour.len() - 1], tour[0])?);
        Ok(weight)
    }

    /// The visiting order, one entry per node.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// The cyclic cost of the tour.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The tour with the starting node appended again, the form result
    /// sinks report.
    pub fn closed_tour(&self) -> Vec<usize> {
        let mut closed = self.tour.clone();
        if let Some(&first) = self.tour.first() {
            closed.push(first);
        }
        closed
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
    }
}

impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.tour.iter();
        match nodes.next() {
            None => write!(f, "(empty tour)"),
            Some(first) => {
                write!(f, "{first}")?;
                for node in nodes {
                    write!(f, " -> {node}")?;
                }
                write!(f, " -> {first} (weight {})", self.weight)
            }
        }
    }
}
