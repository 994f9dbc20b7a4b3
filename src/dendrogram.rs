use num_traits::Float;

use crate::cluster::{Cluster, ClusterSet};
use crate::error::ClusteringError;

/// The splitting number reported by leaves: a leaf is never split further,
/// so it sits "infinitely" late in the merge order.
pub const LEAF_SPLITTING_NUMBER: usize = usize::MAX;

/// The cut a fresh hierarchical run reports as its default flat clustering:
/// the smallest non-trivial partition.
pub const DEFAULT_CLUSTER_COUNT: usize = 2;

/// One node of a dendrogram: either a leaf wrapping a single original point,
/// or an internal node wrapping the union of its two children's support
/// sets. Internal nodes carry the splitting number of the merge step that
/// created them, strictly decreasing from n−1 at the earliest surviving
/// merge down to 1 at the root. Nodes exclusively own their children and are
/// never mutated after construction, so cut queries are repeatable and
/// side-effect free.
#[derive(Debug, Clone)]
pub struct DendrogramNode<T> {
    cluster: Cluster<T>,
    splitting_number: usize,
    children: Option<Box<(DendrogramNode<T>, DendrogramNode<T>)>>,
}

impl<T: Float> DendrogramNode<T> {
    /// A node wrapping a single original point.
    pub fn leaf(cluster: Cluster<T>) -> Self {
        DendrogramNode {
            cluster,
            splitting_number: LEAF_SPLITTING_NUMBER,
            children: None,
        }
    }

    /// Merges two nodes into a new internal node. The merged cluster's
    /// representative is the support-set-size-weighted mean of the
    /// children's representatives. The splitting number must strictly
    /// precede both children's, since a parent always represents a later
    /// merge step; violating that ordering is a caller bug and is reported,
    /// not repaired.
    pub fn merge(
        left: DendrogramNode<T>,
        right: DendrogramNode<T>,
        splitting_number: usize,
    ) -> Result<Self, ClusteringError> {
        if splitting_number >= left.splitting_number || splitting_number >= right.splitting_number {
            return Err(ClusteringError::InvalidSplittingNumber(format!(
                "{splitting_number} must be less than both {} and {}",
                left.splitting_number, right.splitting_number,
            )));
        }
        let cluster = Cluster::merge(
            format!("cluster {splitting_number}"),
            &left.cluster,
            &right.cluster,
        );
        Ok(DendrogramNode {
            cluster,
            splitting_number,
            children: Some(Box::new((left, right))),
        })
    }

    pub fn cluster(&self) -> &Cluster<T> {
        &self.cluster
    }

    /// The merge step this node was created at, or
    /// [`LEAF_SPLITTING_NUMBER`] for leaves.
    pub fn splitting_number(&self) -> usize {
        self.splitting_number
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> Option<(&DendrogramNode<T>, &DendrogramNode<T>)> {
        self.children.as_ref().map(|pair| (&pair.0, &pair.1))
    }

    fn collect_frontier(&self, k: usize, frontier: &mut ClusterSet<T>) {
        match &self.children {
            Some(pair) if self.splitting_number < k => {
                pair.0.collect_frontier(k, frontier);
                pair.1.collect_frontier(k, frontier);
            }
            _ => frontier.push(self.cluster.clone()),
        }
    }
}

/// The binary merge tree produced by a hierarchical clustering run. The tree
/// is immutable; any requested cluster count can be answered repeatedly
/// without re-running the merge.
#[derive(Debug, Clone)]
pub struct Dendrogram<T> {
    root: DendrogramNode<T>,
    n_leaves: usize,
}

impl<T: Float> Dendrogram<T> {
    pub(crate) fn new(root: DendrogramNode<T>) -> Self {
        let n_leaves = root.cluster().len();
        Dendrogram { root, n_leaves }
    }

    pub fn root(&self) -> &DendrogramNode<T> {
        &self.root
    }

    /// Number of original points, and so the largest meaningful cut.
    pub fn leaf_count(&self) -> usize {
        self.n_leaves
    }

    /// The flat clustering implied by stopping merges once exactly `k`
    /// clusters would remain. A node is expanded into its children when its
    /// splitting number precedes `k`; the returned set is the frontier of
    /// unexpanded nodes, left children enumerating before right children.
    /// Saturates at both ends: `k <= 1` yields the root alone and
    /// `k >= leaf_count()` yields every leaf.
    pub fn clusters(&self, k: usize) -> ClusterSet<T> {
        let mut frontier = ClusterSet::new();
        self.root.collect_frontier(k, &mut frontier);
        frontier
    }

    /// The default flat clustering: the cut at [`DEFAULT_CLUSTER_COUNT`].
    /// Hosts that want a partition straight after a run read this; any
    /// other count is an equally cheap [`Self::clusters`] query.
    pub fn default_clusters(&self) -> ClusterSet<T> {
        self.clusters(DEFAULT_CLUSTER_COUNT)
    }
}
