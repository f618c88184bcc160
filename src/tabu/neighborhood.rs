//! Neighborhood scan.
//!
//! One step of the search: enumerate the candidate swaps of the current
//! tour, evaluate each by full cyclic recomputation, and return the best
//! point of the scan. The scan's best is adopted independent of whether
//! it improves on the global best; there is no aspiration or hard tabu
//! filter in this variant, only the advisory history kept in
//! [`TabuList`].

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Solution;

use super::list::{Move, TabuList};

/// Enumerates the candidate moves for one scan of `tour`.
///
/// The order is fixed: a leading `(0, 0)` self-move, then the value
/// pairs `(tour[i], tour[j])` for interior positions `i <= j`. Position
/// 0 is pinned as the tour start and the final position never enters a
/// pair, so tours of fewer than four nodes only yield self-moves.
pub(crate) fn candidate_moves(tour: &[usize]) -> Vec<Move> {
    let n = tour.len();
    let mut moves = vec![Move::new(0, 0)];
    for i in 1..n.saturating_sub(1) {
        for j in i..n - 1 {
            moves.push(Move::new(tour[i], tour[j]));
        }
    }
    moves
}

/// Scans the neighborhood of `current` and returns the scan's best
/// solution.
///
/// Every candidate is applied by value lookup, weighed by full cyclic
/// recomputation, and reverted before the next one. A candidate that
/// beats the running best also drops its exactly-equal entry from the
/// tabu list (the history never excludes a candidate from selection)
/// and its reversed form becomes the pending tabu entry. After the scan
/// the pending entry is pushed, evicting the oldest entry if the list is
/// full.
pub(crate) fn best_of_scan(
    current: &Solution,
    distances: &DistanceMatrix,
    tabus: &mut TabuList,
) -> Result<Solution> {
    let mut tour = current.tour().to_vec();
    let mut best_tour = tour.clone();
    let mut best_weight = u64::MAX;
    let mut pending = Move::new(0, 0);

    for mv in candidate_moves(current.tour()) {
        swap_values(&mut tour, mv.first, mv.last)?;
        let weight = Solution::cycle_weight(&tour, distances)?;
        if weight < best_weight {
            tabus.remove(&mv);
            best_tour.clone_from(&tour);
            best_weight = weight;
            pending = mv.reversed();
        }
        swap_values(&mut tour, mv.last, mv.first)?;
    }

    tabus.push(pending);
    Ok(Solution::from_parts(best_tour, best_weight))
}

/// Exchanges the node values `a` and `b` wherever they currently sit.
///
/// Lookup is by value, not by stored position; the tour may have been
/// permuted since the move was described.
fn swap_values(tour: &mut [usize], a: usize, b: usize) -> Result<()> {
    let x = position_of(tour, a)?;
    let y = position_of(tour, b)?;
    tour.swap(x, y);
    Ok(())
}

fn position_of(tour: &[usize], node: usize) -> Result<usize> {
    tour.iter()
        .position(|&value| value == node)
        .ok_or(Error::InvalidMove { node })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_candidate_order_four_nodes() {
        let moves = candidate_moves(&[0, 1, 3, 2]);
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0),
                Move::new(1, 1),
                Move::new(1, 3),
                Move::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_candidate_order_five_nodes() {
        let moves = candidate_moves(&[0, 4, 2, 3, 1]);
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0),
                Move::new(4, 4),
                Move::new(4, 2),
                Move::new(4, 3),
                Move::new(2, 2),
                Move::new(2, 3),
                Move::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_candidates_exclude_last_position() {
        // Value 1 sits in the final position and must appear in no pair.
        let moves = candidate_moves(&[0, 2, 3, 1]);
        assert!(moves.iter().all(|mv| mv.first != 1 && mv.last != 1));
    }

    #[test]
    fn test_candidates_degenerate_tours() {
        assert_eq!(candidate_moves(&[0]), vec![Move::new(0, 0)]);
        assert_eq!(candidate_moves(&[0, 1]), vec![Move::new(0, 0)]);
        assert_eq!(
            candidate_moves(&[0, 2, 1]),
            vec![Move::new(0, 0), Move::new(2, 2)]
        );
    }

    #[test]
    fn test_scan_finds_improving_swap() {
        let dm = sample_matrix();
        // [0,3,1,2] weighs 95; swapping values 3 and 1 yields 80.
        let current = Solution::evaluate(vec![0, 3, 1, 2], &dm).unwrap();
        let mut tabus = TabuList::new(3);

        let next = best_of_scan(&current, &dm, &mut tabus).unwrap();
        assert_eq!(next.weight(), 80);
        assert_eq!(next.tour(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_scan_records_reversed_move() {
        let dm = sample_matrix();
        let current = Solution::evaluate(vec![0, 3, 1, 2], &dm).unwrap();
        let mut tabus = TabuList::new(3);

        best_of_scan(&current, &dm, &mut tabus).unwrap();
        // The winning candidate was (3, 1); its reverse goes on the list.
        assert!(tabus.contains(&Move::new(1, 3)));
        assert!(!tabus.contains(&Move::new(3, 1)));
        assert_eq!(tabus.len(), 1);
    }

    #[test]
    fn test_scan_drops_matching_history_entry() {
        let dm = sample_matrix();
        let current = Solution::evaluate(vec![0, 3, 1, 2], &dm).unwrap();
        let mut tabus = TabuList::new(3);
        // The history holds the forward form of the winning move; it is
        // still selected, and the matching entry is dropped on the way.
        tabus.push(Move::new(3, 1));

        let next = best_of_scan(&current, &dm, &mut tabus).unwrap();
        assert_eq!(next.weight(), 80);
        assert!(!tabus.contains(&Move::new(3, 1)));
        assert!(tabus.contains(&Move::new(1, 3)));
    }

    #[test]
    fn test_scan_without_improvement_keeps_current() {
        let dm = sample_matrix();
        // [0,1,3,2] weighs 80; the only interior swap yields 95, so the
        // self-move wins the scan.
        let current = Solution::evaluate(vec![0, 1, 3, 2], &dm).unwrap();
        let mut tabus = TabuList::new(3);

        let next = best_of_scan(&current, &dm, &mut tabus).unwrap();
        assert_eq!(next.weight(), 80);
        assert_eq!(next.tour(), current.tour());
        // The pending entry for a scan the self-move wins is (0, 0).
        assert!(tabus.contains(&Move::new(0, 0)));
    }

    #[test]
    fn test_scan_respects_list_capacity() {
        let dm = sample_matrix();
        let current = Solution::evaluate(vec![0, 1, 3, 2], &dm).unwrap();
        let mut tabus = TabuList::new(1);

        for _ in 0..4 {
            best_of_scan(&current, &dm, &mut tabus).unwrap();
            assert_eq!(tabus.len(), 1);
        }
    }

    #[test]
    fn test_scan_invalid_tour_surfaces_error() {
        let dm = DistanceMatrix::new(3);
        // Node 0 is missing, so the leading self-move cannot be applied.
        let current = Solution::evaluate(vec![1, 2], &dm).unwrap();
        let mut tabus = TabuList::new(2);

        let err = best_of_scan(&current, &dm, &mut tabus).unwrap_err();
        assert_eq!(err, Error::InvalidMove { node: 0 });
    }

    #[test]
    fn test_swap_values_by_lookup() {
        let mut tour = vec![0, 3, 1, 2];
        swap_values(&mut tour, 3, 2).unwrap();
        assert_eq!(tour, vec![0, 2, 1, 3]);
        swap_values(&mut tour, 2, 3).unwrap();
        assert_eq!(tour, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_swap_values_identity() {
        let mut tour = vec![0, 3, 1, 2];
        swap_values(&mut tour, 1, 1).unwrap();
        assert_eq!(tour, vec![0, 3, 1, 2]);
    }
}
