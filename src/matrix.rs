use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use num_traits::Float;

use crate::error::ClusteringError;
use crate::sorted_list::SortedList;

/// One cell of a [`SortedDistanceMatrix`]: the distance between the clusters
/// at two live indices. Entries are totally ordered by value, with ties
/// broken by row and then column, so no two distinct cells ever compare
/// equal. The row is always the greater of the two indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixEntry<T> {
    pub row: usize,
    pub column: usize,
    pub value: T,
}

impl<T: Float> MatrixEntry<T> {
    pub(crate) fn order(a: &Self, b: &Self) -> Ordering {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.row.cmp(&b.row))
            .then_with(|| a.column.cmp(&b.column))
    }
}

/// A symmetric distance matrix over a set of live indices, kept globally
/// sorted by value so the closest pair is always readable in O(1). It is the
/// working set for greedy nearest-pair merging: each merge reads the minimum,
/// deletes the two indices involved and inserts fresh distances for the
/// merged cluster, so every operation here stays sub-linear in the number of
/// cells (apart from the unavoidable element shift inside the backing
/// sorted vector).
///
/// Only the canonical half with row > column is stored; both `row` and
/// `column` views of an index see every entry touching it. Diagonal pairs
/// are never stored and a `set` on one is ignored.
pub struct SortedDistanceMatrix<T> {
    entries: SortedList<MatrixEntry<T>>,
    cells: HashMap<(usize, usize), T>,
    neighbours: HashMap<usize, HashSet<usize>>,
}

impl<T: Float> SortedDistanceMatrix<T> {
    pub fn new() -> Self {
        SortedDistanceMatrix {
            entries: SortedList::with_comparer(MatrixEntry::order),
            cells: HashMap::new(),
            neighbours: HashMap::new(),
        }
    }

    fn canonical(row: usize, column: usize) -> (usize, usize) {
        if row > column {
            (row, column)
        } else {
            (column, row)
        }
    }

    /// Inserts or overwrites the entry for the unordered pair `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) {
        if row == column {
            return;
        }
        let (row, column) = Self::canonical(row, column);
        if let Some(old_value) = self.cells.insert((row, column), value) {
            self.entries.remove(&MatrixEntry { row, column, value: old_value });
        }
        self.entries.add_sorted(MatrixEntry { row, column, value });
        self.neighbours.entry(row).or_default().insert(column);
        self.neighbours.entry(column).or_default().insert(row);
    }

    /// The entry with the smallest value, ties broken by the entry order.
    /// Erring when fewer than two live indices remain, since no pair exists
    /// to be closest.
    pub fn minimum(&self) -> Result<MatrixEntry<T>, ClusteringError> {
        self.entries.first().copied().ok_or(ClusteringError::EmptyMatrix)
    }

    /// Direct lookup of the entry for the unordered pair, independent of its
    /// sort position.
    pub fn element_at(&self, row: usize, column: usize) -> Option<MatrixEntry<T>> {
        let (row, column) = Self::canonical(row, column);
        self.cells
            .get(&(row, column))
            .map(|&value| MatrixEntry { row, column, value })
    }

    /// Re-homes an existing entry to a new value, preserving the global
    /// order. Equivalent to remove-then-insert for the same pair; returns
    /// whether the entry existed.
    pub fn update(&mut self, entry: &MatrixEntry<T>, new_value: T) -> bool {
        let (row, column) = Self::canonical(entry.row, entry.column);
        match self.cells.get(&(row, column)) {
            Some(&old_value) => {
                self.entries.remove(&MatrixEntry { row, column, value: old_value });
                self.cells.insert((row, column), new_value);
                self.entries.add_sorted(MatrixEntry { row, column, value: new_value });
                true
            }
            None => false,
        }
    }

    /// Removes every entry mentioning `row` from all three views.
    pub fn remove_row(&mut self, row: usize) {
        self.remove_all_touching(row);
    }

    /// Removes every entry mentioning `column` from all three views. The
    /// matrix is symmetric, so this purges exactly what [`Self::remove_row`]
    /// would for the same index.
    pub fn remove_column(&mut self, column: usize) {
        self.remove_all_touching(column);
    }

    fn remove_all_touching(&mut self, index: usize) {
        let Some(partners) = self.neighbours.remove(&index) else {
            return;
        };
        for partner in partners {
            let (row, column) = Self::canonical(index, partner);
            if let Some(value) = self.cells.remove(&(row, column)) {
                self.entries.remove(&MatrixEntry { row, column, value });
            }
            if let Some(back_refs) = self.neighbours.get_mut(&partner) {
                back_refs.remove(&index);
            }
        }
    }

    /// The entries currently touching `index`, in ascending value order.
    /// The iterator is a snapshot and can be taken again after mutations.
    pub fn row(&self, index: usize) -> impl Iterator<Item = MatrixEntry<T>> {
        let touching: Vec<MatrixEntry<T>> = self
            .neighbours
            .get(&index)
            .into_iter()
            .flatten()
            .filter_map(|&partner| self.element_at(index, partner))
            .collect();
        SortedList::from_unsorted(touching, MatrixEntry::order).into_iter()
    }

    /// Identical view to [`Self::row`]; the matrix is symmetric.
    pub fn column(&self, index: usize) -> impl Iterator<Item = MatrixEntry<T>> {
        self.row(index)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Float> Default for SortedDistanceMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}
