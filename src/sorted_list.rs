use std::cmp::Ordering;

/// A sequence that is always sorted according to an injected three-way
/// comparison rule. Insertion and removal locate their position by binary
/// search; indexed reads are O(1). Duplicates under the comparison rule are
/// kept and stay contiguous, in arbitrary order among themselves.
pub struct SortedList<T> {
    items: Vec<T>,
    compare: fn(&T, &T) -> Ordering,
}

impl<T: PartialOrd> SortedList<T> {
    /// An empty list ordered ascending by the element type's natural order.
    /// Incomparable elements are treated as equal.
    pub fn new() -> Self {
        SortedList::with_comparer(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }
}

impl<T> SortedList<T> {
    /// An empty list ordered by a custom comparison rule.
    pub fn with_comparer(compare: fn(&T, &T) -> Ordering) -> Self {
        SortedList {
            items: Vec::new(),
            compare,
        }
    }

    /// Builds a list from unsorted items, sorting once.
    pub fn from_unsorted(mut items: Vec<T>, compare: fn(&T, &T) -> Ordering) -> Self {
        items.sort_by(compare);
        SortedList { items, compare }
    }

    /// Inserts an item at the position that keeps the list sorted.
    pub fn add_sorted(&mut self, item: T) {
        let position = match self.items.binary_search_by(|probe| (self.compare)(probe, &item)) {
            Ok(position) => position,
            Err(position) => position,
        };
        self.items.insert(position, item);
    }

    /// Removes the first element comparing equal to `item` under the list's
    /// comparison rule. Returns whether an element was removed; a missing
    /// item is not an error.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.binary_search_by(|probe| (self.compare)(probe, item)) {
            Ok(mut position) => {
                // The search lands somewhere inside a run of equal
                // elements; back up to the first of them
                while position > 0
                    && (self.compare)(&self.items[position - 1], item) == Ordering::Equal
                {
                    position -= 1;
                }
                self.items.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(list: &SortedList<i32>) -> bool {
        list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b)
    }

    #[test]
    fn add_sorted_keeps_order() {
        let mut list = SortedList::new();
        for value in [5, 1, 4, 1, 3, -2, 9] {
            list.add_sorted(value);
            assert!(is_sorted(&list));
        }
        assert_eq!(7, list.len());
        assert_eq!(Some(&-2), list.first());
        assert_eq!(Some(&9), list.get(6));
    }

    #[test]
    fn from_unsorted_sorts_once() {
        let list = SortedList::from_unsorted(vec![3, 1, 2], |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(vec![1, 2, 3], list.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn remove_reports_presence() {
        let mut list = SortedList::new();
        for value in [2, 7, 2, 5] {
            list.add_sorted(value);
        }
        assert!(list.remove(&2));
        assert!(is_sorted(&list));
        assert_eq!(3, list.len());
        assert!(!list.remove(&42));
        assert_eq!(3, list.len());
    }

    #[test]
    fn custom_comparer_orders_descending() {
        let mut list = SortedList::with_comparer(|a: &i32, b: &i32| b.cmp(a));
        for value in [1, 9, 4] {
            list.add_sorted(value);
        }
        assert_eq!(vec![9, 4, 1], list.iter().copied().collect::<Vec<_>>());
        assert!(list.remove(&4));
        assert_eq!(vec![9, 1], list.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn duplicates_stay_contiguous() {
        let mut list = SortedList::new();
        for value in [3, 1, 3, 2, 3] {
            list.add_sorted(value);
        }
        assert_eq!(vec![1, 2, 3, 3, 3], list.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn remove_takes_the_first_of_equal_elements() {
        // Compared by key only, so elements with equal keys are
        // distinguishable by their payload
        let mut list =
            SortedList::with_comparer(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        list.add_sorted((5, 'x'));
        list.add_sorted((1, 'a'));
        list.add_sorted((1, 'b'));
        assert_eq!(
            vec![(1, 'b'), (1, 'a'), (5, 'x')],
            list.iter().copied().collect::<Vec<_>>()
        );
        assert!(list.remove(&(1, 'z')));
        assert_eq!(
            vec![(1, 'a'), (5, 'x')],
            list.iter().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn interleaved_adds_and_removes() {
        let mut list = SortedList::new();
        list.add_sorted(10);
        list.add_sorted(-1);
        assert!(list.remove(&10));
        list.add_sorted(7);
        list.add_sorted(0);
        assert!(!list.remove(&10));
        list.add_sorted(-5);
        assert!(is_sorted(&list));
        assert_eq!(vec![-5, -1, 0, 7], list.iter().copied().collect::<Vec<_>>());
        assert!(!list.is_empty());
    }
}
