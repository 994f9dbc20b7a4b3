use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ClusteringError;

/// Draws `count` distinct indices uniformly from the half-open range
/// `[lower, upper)`, reproducibly for a given seed. Duplicates are redrawn
/// until `count` distinct indices have been produced, so the result order is
/// the draw order. Each precondition failure is reported with its own
/// error: a zero count, a count exceeding the range width, and an empty or
/// inverted range are all distinct conditions, never clamped.
pub(crate) fn sample_distinct_indices(
    count: usize,
    lower: usize,
    upper: usize,
    seed: u64,
) -> Result<Vec<usize>, ClusteringError> {
    if lower >= upper {
        return Err(ClusteringError::EmptyRange(format!(
            "[{lower}, {upper}) contains no indices"
        )));
    }
    if count == 0 {
        return Err(ClusteringError::ZeroClusterCount);
    }
    if count > upper - lower {
        return Err(ClusteringError::SampleCountExceedsRange(format!(
            "{count} distinct indices requested from [{lower}, {upper})"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut drawn: Vec<usize> = Vec::with_capacity(count);
    while drawn.len() < count {
        let candidate = rng.gen_range(lower..upper);
        if !drawn.contains(&candidate) {
            drawn.push(candidate);
        }
    }
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_same_draw() {
        let first = sample_distinct_indices(4, 0, 100, 4711).unwrap();
        let second = sample_distinct_indices(4, 0, 100, 4711).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn draws_are_distinct_and_in_range() {
        let drawn = sample_distinct_indices(8, 10, 30, 99).unwrap();
        assert_eq!(8, drawn.len());
        for (i, &index) in drawn.iter().enumerate() {
            assert!((10..30).contains(&index));
            assert!(!drawn[..i].contains(&index));
        }
    }

    #[test]
    fn exhaustive_draw_is_a_permutation() {
        let mut drawn = sample_distinct_indices(4, 0, 4, 4711).unwrap();
        drawn.sort();
        assert_eq!(vec![0, 1, 2, 3], drawn);
    }

    #[test]
    fn zero_count_is_rejected() {
        let result = sample_distinct_indices(0, 0, 4, 4711);
        assert!(matches!(result, Err(ClusteringError::ZeroClusterCount)));
    }

    #[test]
    fn count_exceeding_range_is_rejected() {
        let result = sample_distinct_indices(5, 0, 4, 4711);
        assert!(matches!(result, Err(ClusteringError::SampleCountExceedsRange(..))));
    }

    #[test]
    fn empty_or_inverted_range_is_rejected() {
        let result = sample_distinct_indices(1, 4, 4, 4711);
        assert!(matches!(result, Err(ClusteringError::EmptyRange(..))));
        let result = sample_distinct_indices(1, 5, 2, 4711);
        assert!(matches!(result, Err(ClusteringError::EmptyRange(..))));
    }
}
