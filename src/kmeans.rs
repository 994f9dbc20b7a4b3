use num_traits::Float;

use crate::cluster::{project, Cluster, ClusterSet};
use crate::distance::sq_euclidean_to_representative;
use crate::error::ClusteringError;
use crate::sampling::sample_distinct_indices;
use crate::validation::validate_points;

const MAX_ITERATIONS_DEFAULT: usize = 100;

/// Parameters of a partitional clustering run: the desired cluster count,
/// the seed driving the deterministic centroid draw and the iteration bound.
#[derive(Debug, Copy, Clone)]
pub struct KMeansParams {
    pub(crate) k: usize,
    pub(crate) seed: u64,
    pub(crate) max_iterations: usize,
}

impl KMeansParams {
    /// Parameters for `k` clusters seeded from `seed`, with the default
    /// iteration bound of 100.
    pub fn new(k: usize, seed: u64) -> Self {
        KMeansParams {
            k,
            seed,
            max_iterations: MAX_ITERATIONS_DEFAULT,
        }
    }

    /// Overrides the maximum number of reassignment iterations performed
    /// before the run is stopped even without reaching a fixed point.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Centroid-based partitional clustering with deterministic seeding.
///
/// `k` initial centroids are drawn as distinct point indices using a seeded
/// random source, then points are iteratively reassigned to their nearest
/// centroid (squared Euclidean over the active dimension mask, ties going to
/// the first centroid in draw order) and centroids recomputed as the mean of
/// their assigned points, until the assignment reaches a fixed point or the
/// iteration bound is hit. Clusters are reported in the order their initial
/// centroids were drawn; a cluster that ends up with no points is kept as an
/// empty cluster rather than discarded or resplit.
///
/// # Examples
/// ```
///use aggclust::{KMeans, KMeansParams};
///
///let data: Vec<Vec<f64>> = vec![
///    vec![1.0],
///    vec![1.1],
///    vec![5.0],
///];
///let clusterer = KMeans::with_all_dimensions(&data, KMeansParams::new(2, 42));
///let clusters = clusterer.cluster().unwrap();
///assert_eq!(2, clusters.len());
///assert_eq!(3, clusters.iter().map(|c| c.len()).sum::<usize>());
/// ```
pub struct KMeans<'a, T> {
    data: &'a [Vec<T>],
    mask: Vec<usize>,
    params: KMeansParams,
}

impl<'a, T: Float> KMeans<'a, T> {
    /// A partitional clustering run over the dimensions named by `mask`.
    pub fn new(data: &'a [Vec<T>], mask: Vec<usize>, params: KMeansParams) -> Self {
        KMeans { data, mask, params }
    }

    /// A partitional clustering run over every dimension of the data.
    pub fn with_all_dimensions(data: &'a [Vec<T>], params: KMeansParams) -> Self {
        let n_dims = if data.is_empty() { 0 } else { data[0].len() };
        let mask = (0..n_dims).collect();
        KMeans { data, mask, params }
    }

    /// Performs the clustering run.
    ///
    /// # Returns
    /// * A result that, if successful, contains the flat clustering as an
    ///   ordered cluster set of length `k`, each cluster owning the points
    ///   assigned to it and carrying its final centroid as representative.
    ///   An error is returned if the input data fails validation, if the
    ///   requested cluster count is zero or if it exceeds the number of
    ///   points available for seeding.
    pub fn cluster(&self) -> Result<ClusterSet<T>, ClusteringError> {
        validate_points(self.data, &self.mask, 1)?;
        if self.params.k == 0 {
            return Err(ClusteringError::ZeroClusterCount);
        }
        let seed_indices =
            sample_distinct_indices(self.params.k, 0, self.data.len(), self.params.seed)?;
        let centroids = seed_indices
            .iter()
            .map(|&index| project(&self.data[index], &self.mask))
            .collect();

        let (assignments, centroids) = self.iterate(centroids);
        Ok(self.assemble(&assignments, centroids))
    }

    /// The reassignment loop, starting from the given centroids. Returns
    /// the final assignment (one centroid index per point) and the final
    /// centroids.
    fn iterate(&self, mut centroids: Vec<Vec<T>>) -> (Vec<usize>, Vec<Vec<T>>) {
        // The first assignment always happens; the bound caps reassignments
        let mut assignments: Vec<usize> = self
            .data
            .iter()
            .map(|point| self.nearest_centroid(point, &centroids))
            .collect();
        self.recompute_centroids(&assignments, &mut centroids);

        for _ in 1..self.params.max_iterations {
            let next: Vec<usize> = self
                .data
                .iter()
                .map(|point| self.nearest_centroid(point, &centroids))
                .collect();
            if next == assignments {
                break;
            }
            assignments = next;
            self.recompute_centroids(&assignments, &mut centroids);
        }
        (assignments, centroids)
    }

    fn nearest_centroid(&self, point: &[T], centroids: &[Vec<T>]) -> usize {
        let mut nearest = 0;
        let mut nearest_dist = T::infinity();
        for (index, centroid) in centroids.iter().enumerate() {
            let dist = sq_euclidean_to_representative(point, centroid, &self.mask);
            // Strict comparison keeps the first-drawn centroid on ties
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = index;
            }
        }
        nearest
    }

    /// Each centroid becomes the per-dimension mean of its assigned points.
    /// A centroid with no assigned points is left where it is.
    fn recompute_centroids(&self, assignments: &[usize], centroids: &mut [Vec<T>]) {
        for (index, centroid) in centroids.iter_mut().enumerate() {
            let mut count = T::zero();
            let mut sums = vec![T::zero(); self.mask.len()];
            for (point, &assigned) in self.data.iter().zip(assignments) {
                if assigned == index {
                    count = count + T::one();
                    for (sum, &dimension) in sums.iter_mut().zip(self.mask.iter()) {
                        *sum = *sum + point[dimension];
                    }
                }
            }
            if count > T::zero() {
                for sum in sums.iter_mut() {
                    *sum = *sum / count;
                }
                *centroid = sums;
            }
        }
    }

    fn assemble(&self, assignments: &[usize], centroids: Vec<Vec<T>>) -> ClusterSet<T> {
        let mut clusters: Vec<Cluster<T>> = centroids
            .into_iter()
            .enumerate()
            .map(|(index, centroid)| Cluster::empty(format!("cluster {index}"), centroid))
            .collect();
        for (point, &assigned) in self.data.iter().zip(assignments) {
            clusters[assigned].push_member(point.clone());
        }
        let mut set = ClusterSet::new();
        for cluster in clusters {
            set.push(cluster);
        }
        set
    }
}
