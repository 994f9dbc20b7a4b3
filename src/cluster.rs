use num_traits::Float;

/// Restricts a point to the active dimension mask, in mask order.
pub(crate) fn project<T: Float>(point: &[T], mask: &[usize]) -> Vec<T> {
    mask.iter().map(|&dimension| point[dimension]).collect()
}

/// A cluster of points: a label, the owned set of member points (the
/// cluster's support set) and a representative value vector over the active
/// dimension mask, typically the per-dimension mean of the members. A
/// cluster with no members keeps whatever representative it was constructed
/// with until it is first populated.
#[derive(Debug, Clone)]
pub struct Cluster<T> {
    label: String,
    members: Vec<Vec<T>>,
    representative: Vec<T>,
}

impl<T: Float> Cluster<T> {
    /// A cluster holding exactly one point, representing itself.
    pub fn singleton(label: String, point: &[T], mask: &[usize]) -> Self {
        Cluster {
            label,
            members: vec![point.to_vec()],
            representative: project(point, mask),
        }
    }

    /// A cluster with no members yet, anchored at a representative vector.
    pub(crate) fn empty(label: String, representative: Vec<T>) -> Self {
        Cluster {
            label,
            members: Vec::new(),
            representative,
        }
    }

    /// The union of two clusters. Members are concatenated left-first and
    /// the representative is the support-set-size-weighted mean of the two
    /// children's representatives.
    pub(crate) fn merge(label: String, left: &Cluster<T>, right: &Cluster<T>) -> Self {
        let left_weight = T::from(left.len()).unwrap_or(T::one());
        let right_weight = T::from(right.len()).unwrap_or(T::one());
        let total = left_weight + right_weight;
        let representative = left
            .representative
            .iter()
            .zip(right.representative.iter())
            .map(|(&l, &r)| (l * left_weight + r * right_weight) / total)
            .collect();

        let mut members = Vec::with_capacity(left.len() + right.len());
        members.extend(left.members.iter().cloned());
        members.extend(right.members.iter().cloned());

        Cluster {
            label,
            members,
            representative,
        }
    }

    pub(crate) fn push_member(&mut self, point: Vec<T>) {
        self.members.push(point);
    }

    pub(crate) fn set_representative(&mut self, representative: Vec<T>) {
        self.representative = representative;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The support set: every original point this cluster represents.
    pub fn members(&self) -> &[Vec<T>] {
        &self.members
    }

    /// The representative vector, one component per active dimension.
    pub fn representative(&self) -> &[T] {
        &self.representative
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// An ordered collection of clusters. Insertion order is the externally
/// visible enumeration order and is preserved exactly.
#[derive(Debug, Clone)]
pub struct ClusterSet<T> {
    clusters: Vec<Cluster<T>>,
}

impl<T: Float> ClusterSet<T> {
    pub(crate) fn new() -> Self {
        ClusterSet { clusters: Vec::new() }
    }

    pub(crate) fn push(&mut self, cluster: Cluster<T>) {
        self.clusters.push(cluster);
    }

    pub fn get(&self, index: usize) -> Option<&Cluster<T>> {
        self.clusters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster<T>> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl<T> std::ops::Index<usize> for ClusterSet<T> {
    type Output = Cluster<T>;

    fn index(&self, index: usize) -> &Cluster<T> {
        &self.clusters[index]
    }
}

impl<'a, T> IntoIterator for &'a ClusterSet<T> {
    type Item = &'a Cluster<T>;
    type IntoIter = std::slice::Iter<'a, Cluster<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

impl<T> IntoIterator for ClusterSet<T> {
    type Item = Cluster<T>;
    type IntoIter = std::vec::IntoIter<Cluster<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_projects_onto_mask() {
        let point = vec![1.0, 2.0, 3.0, 4.0];
        let cluster = Cluster::singleton(String::from("point 0"), &point, &[1, 3]);
        assert_eq!(&[2.0, 4.0], cluster.representative());
        assert_eq!(1, cluster.len());
        assert_eq!(point, cluster.members()[0]);
    }

    #[test]
    fn merge_weights_representatives_by_support_size() {
        let mask = vec![0, 1];
        let mut left = Cluster::singleton(String::from("a"), &[0.0, 0.0], &mask);
        left.push_member(vec![2.0, 2.0]);
        left.set_representative(vec![1.0, 1.0]);
        let right = Cluster::singleton(String::from("b"), &[4.0, 4.0], &mask);

        let merged = Cluster::merge(String::from("ab"), &left, &right);
        assert_eq!(3, merged.len());
        // (1.0 * 2 + 4.0 * 1) / 3 per dimension
        assert_eq!(&[2.0, 2.0], merged.representative());
        // Left members enumerate before right members
        assert_eq!(vec![0.0, 0.0], merged.members()[0]);
        assert_eq!(vec![4.0, 4.0], merged.members()[2]);
    }

    #[test]
    fn cluster_set_preserves_insertion_order() {
        let mask = vec![0];
        let mut set = ClusterSet::new();
        for n in 0..3 {
            set.push(Cluster::singleton(format!("point {n}"), &[n as f64], &mask));
        }
        let labels: Vec<&str> = set.iter().map(|c| c.label()).collect();
        assert_eq!(vec!["point 0", "point 1", "point 2"], labels);
        assert_eq!("point 1", set[1].label());
    }
}
