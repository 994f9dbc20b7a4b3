//! Agglomerative hierarchical and partitional clustering in pure Rust.
//! Generic over floating point numeric types.
//!
//! The hierarchical path starts from one singleton cluster per point and
//! repeatedly merges the closest pair of clusters into a binary merge tree
//! (a dendrogram). The working set for the greedy merging is a sorted
//! distance matrix that always exposes its smallest entry in O(1), so every
//! merge is a minimum read, two index removals and a round of fresh
//! distances against the survivors. The main benefits of this approach are
//! that:
//!  1. The full merge history is kept. Once the dendrogram is built, the
//!     flat clustering for any requested cluster count is a cheap cut query
//!     on the tree, with no need to re-run the merge;
//!  2. Cluster distances are recomputed exactly from cluster membership
//!     after every merge, for both single-link and complete-link semantics,
//!     rather than incrementally approximated; and
//!  3. Distances are restricted to an active dimension mask, so the same
//!     point set can be clustered over any subset of its dimensions.
//!
//! The partitional path ([`KMeans`]) shares the same point, mask and cluster
//! abstractions and produces the same output shape directly for a fixed
//! cluster count, with deterministic seeded centroid initialization.
//!
//! # Examples
//! ```
//!use aggclust::{Agglomerative, Linkage};
//!
//!let data: Vec<Vec<f64>> = vec![
//!    vec![1.0, 1.1],
//!    vec![1.2, 1.0],
//!    vec![4.0, 4.1],
//!    vec![4.2, 4.0],
//!];
//!let clusterer = Agglomerative::with_all_dimensions(&data, Linkage::Single);
//!let dendrogram = clusterer.cluster().unwrap();
//!let clusters = dendrogram.clusters(2);
//!assert_eq!(2, clusters.len());
//!assert_eq!(2, clusters[0].len());
//!assert_eq!(4, dendrogram.clusters(1)[0].len());
//! ```

use std::collections::HashMap;

use num_traits::Float;

pub use crate::cluster::{Cluster, ClusterSet};
pub use crate::dendrogram::{
    Dendrogram, DendrogramNode, DEFAULT_CLUSTER_COUNT, LEAF_SPLITTING_NUMBER,
};
pub use crate::distance::Linkage;
pub use crate::error::ClusteringError;
pub use crate::kmeans::{KMeans, KMeansParams};
pub use crate::matrix::{MatrixEntry, SortedDistanceMatrix};
pub use crate::sorted_list::SortedList;

mod cluster;
mod dendrogram;
mod distance;
mod error;
mod kmeans;
mod matrix;
mod sampling;
mod sorted_list;
mod validation;

/// Agglomerative hierarchical clustering over a point set and an active
/// dimension mask.
///
/// A run performs exactly n−1 merges. Each merge takes the closest pair of
/// live clusters from the distance matrix, joins them into a new dendrogram
/// node carrying the splitting number `remaining − 1` (so splitting numbers
/// decrease strictly from n−1 down to 1 at the root), removes both endpoints
/// from the matrix and inserts the merged cluster's exact linkage distances
/// to every surviving cluster. The matrix is scoped to the run and discarded
/// once the dendrogram is built.
pub struct Agglomerative<'a, T> {
    data: &'a [Vec<T>],
    mask: Vec<usize>,
    linkage: Linkage,
}

impl<'a, T: Float> Agglomerative<'a, T> {
    /// A hierarchical clustering run over the dimensions named by `mask`.
    ///
    /// # Parameters
    /// * `data` - a reference to the points to cluster, a collection of
    ///            vectors of floating point numbers. The vectors must all
    ///            have the same dimensionality and contain no non-finite
    ///            values.
    /// * `mask` - the active dimension mask: the indices of the dimensions
    ///            that participate in distance computation.
    /// * `linkage` - the rule measuring the distance between two clusters.
    pub fn new(data: &'a [Vec<T>], mask: Vec<usize>, linkage: Linkage) -> Self {
        Agglomerative { data, mask, linkage }
    }

    /// A hierarchical clustering run over every dimension of the data.
    pub fn with_all_dimensions(data: &'a [Vec<T>], linkage: Linkage) -> Self {
        let n_dims = if data.is_empty() { 0 } else { data[0].len() };
        let mask = (0..n_dims).collect();
        Agglomerative { data, mask, linkage }
    }

    /// Builds the dendrogram for the point set.
    ///
    /// # Returns
    /// * A result that, if successful, contains the completed dendrogram,
    ///   which carries its default flat clustering via
    ///   [`Dendrogram::default_clusters`]. Flat clusterings for any other
    ///   cluster count are read from it with [`Dendrogram::clusters`]
    ///   without re-running the merge. An error is returned if fewer than
    ///   two points were supplied, if the input vectors have mismatched
    ///   dimensions or non-finite coordinates, or if the mask names a
    ///   dimension the points do not have.
    pub fn cluster(&self) -> Result<Dendrogram<T>, ClusteringError> {
        validation::validate_points(self.data, &self.mask, 2)?;

        let mut nodes: HashMap<usize, DendrogramNode<T>> = self
            .data
            .iter()
            .enumerate()
            .map(|(n, point)| {
                let cluster = Cluster::singleton(format!("point {n}"), point, &self.mask);
                (n, DendrogramNode::leaf(cluster))
            })
            .collect();
        let mut matrix = self.build_matrix();

        let mut remaining = self.data.len();
        while remaining > 1 {
            let closest = matrix.minimum()?;
            // Both endpoints are live by the matrix invariant
            let left = nodes.remove(&closest.row).unwrap();
            let right = nodes.remove(&closest.column).unwrap();
            let merged = DendrogramNode::merge(left, right, remaining - 1)?;

            matrix.remove_row(closest.row);
            matrix.remove_column(closest.column);
            remaining -= 1;

            // The merged cluster takes over the row index of the entry that
            // produced it
            for (&index, node) in nodes.iter() {
                let dist = self
                    .linkage
                    .cluster_distance(merged.cluster(), node.cluster(), &self.mask);
                matrix.set(closest.row, index, dist);
            }
            nodes.insert(closest.row, merged);
        }

        // Exactly one live cluster remains: the root
        let root = nodes.into_values().next().unwrap();
        Ok(Dendrogram::new(root))
    }

    /// Pairwise distances between all initial singleton clusters, stored in
    /// the canonical half with row > column. For singletons both linkage
    /// modes reduce to the plain masked squared Euclidean distance.
    fn build_matrix(&self) -> SortedDistanceMatrix<T> {
        let mut matrix = SortedDistanceMatrix::new();
        for row in 1..self.data.len() {
            for column in 0..row {
                let dist =
                    distance::masked_sq_euclidean(&self.data[row], &self.data[column], &self.mask);
                matrix.set(row, column, dist);
            }
        }
        matrix
    }
}
