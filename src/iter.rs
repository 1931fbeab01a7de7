use core::fmt;
use core::iter::FusedIterator;
use std::slice;

use crate::heap::{HeapEntry, MinHeap};

/// An iterator over the values of a `MinHeap`, in internal array order.
///
/// This `struct` is created by [`MinHeap::iter()`]. See its
/// documentation for more.
pub struct Iter<'a, K: 'a, V: 'a> {
    iter: slice::Iter<'a, HeapEntry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(entries: &'a [HeapEntry<K, V>]) -> Self {
        Iter {
            iter: entries.iter(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.iter.next().map(HeapEntry::value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a V> {
        self.iter.last().map(HeapEntry::value)
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a V> {
        self.iter.next_back().map(HeapEntry::value)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator yielding the values of a `MinHeap` in ascending key
/// order.
///
/// This `struct` is created by [`MinHeap::into_iter_sorted()`].
#[derive(Clone, Debug)]
pub struct IntoIterSorted<K, V> {
    inner: MinHeap<K, V>,
}

impl<K, V> IntoIterSorted<K, V> {
    pub(crate) fn new(inner: MinHeap<K, V>) -> Self {
        IntoIterSorted { inner }
    }
}

impl<K: Ord, V> Iterator for IntoIterSorted<K, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.extract_min()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K: Ord, V> ExactSizeIterator for IntoIterSorted<K, V> {}

impl<K: Ord, V> FusedIterator for IntoIterSorted<K, V> {}

/// A draining iterator yielding the values of a `MinHeap` in ascending key
/// order.
///
/// This `struct` is created by [`MinHeap::drain_sorted()`]. Dropping it
/// empties the heap even if it was not run to completion.
#[derive(Debug)]
pub struct DrainSorted<'a, K, V> {
    inner: &'a mut MinHeap<K, V>,
}

impl<'a, K, V> DrainSorted<'a, K, V> {
    pub(crate) fn new(inner: &'a mut MinHeap<K, V>) -> Self {
        DrainSorted { inner }
    }
}

impl<K, V> Drop for DrainSorted<'_, K, V> {
    fn drop(&mut self) {
        self.inner.clear();
    }
}

impl<K: Ord, V> Iterator for DrainSorted<'_, K, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.inner.extract_min()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<K: Ord, V> ExactSizeIterator for DrainSorted<'_, K, V> {}

impl<K: Ord, V> FusedIterator for DrainSorted<'_, K, V> {}
