//! Comparator-driven sorting and extremum search.
//!
//! Comparators are three-way functions over two borrowed elements returning
//! [`Ordering`]: `Less` when the first element orders before the second, `Equal`
//! when they rank the same, and `Greater` when the first orders after the second.
//! For a well-defined result the comparator must be a consistent total order over
//! the elements it is applied to.

use std::cmp::Ordering;

/// Binds a mutable slice to a three-way comparator and sorts it in place.
///
/// The sort is stable: elements that compare `Equal` keep their relative input
/// order.
pub struct ComparatorSort<'a, T, F> {
    data: &'a mut [T],
    comparator: F,
}

impl<'a, T, F> ComparatorSort<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(data: &'a mut [T], comparator: F) -> Self {
        ComparatorSort { data, comparator }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if `first` must be placed before `second`.
    pub fn less(&mut self, first: usize, second: usize) -> bool {
        (self.comparator)(&self.data[first], &self.data[second]) == Ordering::Less
    }

    pub fn swap(&mut self, first: usize, second: usize) {
        self.data.swap(first, second);
    }

    /// Sorts the bound slice.
    pub fn sort(mut self) {
        if self.data.len() < 2 {
            return;
        }
        self.data.sort_by(&mut self.comparator);
    }
}

/// Returns the first element of `items` that is extremal in the `wanted`
/// direction, or `None` if `items` is empty.
///
/// A candidate replaces the current best only when it compares strictly
/// `wanted` against it, so among equally extremal elements the first one in
/// encounter order wins. Use `Ordering::Less` for the minimum and
/// `Ordering::Greater` for the maximum.
pub fn first_extremum<T, F>(items: &[T], mut comparator: F, wanted: Ordering) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut best, rest) = items.split_first()?;
    for item in rest {
        if comparator(item, best) == wanted {
            best = item;
        }
    }
    Some(best)
}

/// Comparator following the natural order of `T`.
pub fn natural_order<T: Ord>(first: &T, second: &T) -> Ordering {
    first.cmp(second)
}

/// Comparator reversing the natural order of `T`.
pub fn reverse_order<T: Ord>(first: &T, second: &T) -> Ordering {
    second.cmp(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut data = vec![5, 3, 9, 1, 7];
        ComparatorSort::new(&mut data, natural_order).sort();
        assert_eq!(data, [1, 3, 5, 7, 9]);

        ComparatorSort::new(&mut data, reverse_order).sort();
        assert_eq!(data, [9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        ComparatorSort::new(&mut data, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0)).sort();
        assert_eq!(data, [(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_less_and_swap() {
        let mut data = vec![2, 1];
        let mut sorter = ComparatorSort::new(&mut data, natural_order);
        assert_eq!(sorter.len(), 2);
        assert!(!sorter.less(0, 1));
        assert!(sorter.less(1, 0));
        sorter.swap(0, 1);
        assert!(sorter.less(0, 1));
        assert_eq!(data, [1, 2]);
    }

    #[test]
    fn test_first_extremum_ties() {
        let items = [(1, 'a'), (3, 'b'), (0, 'c'), (3, 'd'), (0, 'e')];
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        assert_eq!(first_extremum(&items, by_key, Ordering::Greater), Some(&(3, 'b')));
        assert_eq!(first_extremum(&items, by_key, Ordering::Less), Some(&(0, 'c')));
    }

    #[test]
    fn test_first_extremum_empty_and_single() {
        let empty: [i32; 0] = [];
        assert_eq!(first_extremum(&empty, natural_order, Ordering::Less), None);
        assert_eq!(first_extremum(&[5], natural_order, Ordering::Greater), Some(&5));
    }
}
