use num_traits::Float;

use crate::cluster::Cluster;

/// The rule used to measure the distance between two clusters, each possibly
/// containing multiple points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Linkage {
    /// The minimum over all cross-cluster point pairs of the squared
    /// Euclidean distance across the active dimension mask.
    Single,
    /// The maximum of the same pairwise squared distances.
    Complete,
}

impl Linkage {
    /// Exact linkage distance between two non-empty clusters, recomputed
    /// from their full memberships rather than incrementally approximated.
    pub(crate) fn cluster_distance<T: Float>(
        &self,
        a: &Cluster<T>,
        b: &Cluster<T>,
        mask: &[usize],
    ) -> T {
        let pairwise = a
            .members()
            .iter()
            .flat_map(|p| b.members().iter().map(move |q| masked_sq_euclidean(p, q, mask)));
        match self {
            Linkage::Single => pairwise.fold(T::infinity(), T::min),
            Linkage::Complete => pairwise.fold(T::zero(), T::max),
        }
    }
}

/// Squared Euclidean distance between two points, restricted to the
/// dimensions named by the active mask.
pub(crate) fn masked_sq_euclidean<T: Float>(a: &[T], b: &[T], mask: &[usize]) -> T {
    mask.iter()
        .map(|&dimension| {
            let delta = a[dimension] - b[dimension];
            delta * delta
        })
        .fold(T::zero(), std::ops::Add::add)
}

/// Squared Euclidean distance between a full point and a vector already
/// living in mask space, such as a centroid.
pub(crate) fn sq_euclidean_to_representative<T: Float>(
    point: &[T],
    representative: &[T],
    mask: &[usize],
) -> T {
    mask.iter()
        .zip(representative.iter())
        .map(|(&dimension, &r)| {
            let delta = point[dimension] - r;
            delta * delta
        })
        .fold(T::zero(), std::ops::Add::add)
}
