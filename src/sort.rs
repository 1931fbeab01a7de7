//! Sorting built on top of [`MinHeap`].

use crate::heap::MinHeap;

/// Sorts `list` in ascending order, in place.
///
/// Every element is inserted into a [`MinHeap`] in its original order, each
/// serving as both key and value, and the minimums are then written back
/// over `list` front to back. Slices of zero or one element are left
/// untouched and no heap is built for them.
///
/// The sort is not stable: the relative order of equal elements is
/// unspecified.
///
/// # Examples
///
/// ```
/// use kv_min_heap::heap_sort;
///
/// let mut list = [4, 1, 3, 2, 5];
/// heap_sort(&mut list);
/// assert_eq!(list, [1, 2, 3, 4, 5]);
/// ```
///
/// # Time complexity
///
/// *O*(*n* log(*n*)) time and *O*(*n*) extra space for the heap.
pub fn heap_sort<T: Ord + Clone>(list: &mut [T]) {
    if list.len() <= 1 {
        return;
    }

    let heap: MinHeap<T, T> = list.iter().cloned().collect();
    for (slot, min) in list.iter_mut().zip(heap.into_iter_sorted()) {
        *slot = min;
    }
}

/// Collects `iter` and returns its elements in ascending order.
///
/// ```
/// use kv_min_heap::heap_sorted;
///
/// assert_eq!(heap_sorted(vec![2, 2, 1, 2]), [1, 2, 2, 2]);
/// assert!(heap_sorted(Vec::<u8>::new()).is_empty());
/// ```
#[must_use]
pub fn heap_sorted<T, I>(iter: I) -> Vec<T>
where
    T: Ord + Clone,
    I: IntoIterator<Item = T>,
{
    let list: Vec<T> = iter.into_iter().collect();
    if list.len() <= 1 {
        return list;
    }

    let heap: MinHeap<T, T> = list.into_iter().collect();
    heap.into_sorted_vec()
}
