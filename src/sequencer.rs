//! Nearest-neighbor stop sequencing.
//!
//! Greedy ordering: from the current position, always move to the closest
//! remaining stop. O(n²) distance evaluations, which is fine for courier
//! stop counts (tens, not thousands). If inputs ever grow large, a spatial
//! index can replace the linear scan behind the same contract.

use crate::traits::{DistanceMetric, Stop};

/// Orders `stops` by repeatedly visiting the nearest remaining one,
/// starting from `start`.
///
/// Returns a permutation of the input. On exact distance ties the stop that
/// appears first in the input order wins, so the output is deterministic
/// for a fixed input ordering.
pub fn sequence<S, M>(metric: &M, start: (f64, f64), stops: Vec<S>) -> Vec<S>
where
    S: Stop,
    M: DistanceMetric,
{
    if stops.len() <= 1 {
        return stops;
    }

    let mut remaining = stops;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = start;

    while !remaining.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = metric.distance_km(current, remaining[0].location());

        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            let distance = metric.distance_km(current, candidate.location());
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_index = i;
            }
        }

        // Vec::remove keeps the relative order of the rest of the pool,
        // which the tie-break depends on.
        let nearest = remaining.remove(nearest_index);
        current = nearest.location();
        ordered.push(nearest);
    }

    ordered
}
