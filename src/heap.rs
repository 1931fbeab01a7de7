use core::fmt;
use core::iter::FromIterator;

use crate::error::HeapError;
use crate::iter::{DrainSorted, IntoIterSorted, Iter};

/// A key paired with the value stored under it.
///
/// Entries are immutable once created: the heap moves them between
/// positions but never rewrites their key or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> HeapEntry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        HeapEntry { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Splits the entry into its `(key, value)` pair.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A priority queue implemented with an array-backed binary min-heap.
///
/// Every entry carries a key, which orders the heap, and a value, which is
/// what [`extract_min`] hands back. The entry with the smallest key always
/// sits at index 0. For an entry at index `i` the children live at `2i + 1`
/// and `2i + 2`, and no child ever has a smaller key than its parent.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the heap. This is normally only possible through
/// [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// # Examples
///
/// ```
/// use kv_min_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
///
/// // Nothing in there yet, so there is nothing to extract.
/// assert_eq!(heap.extract_min(), None);
///
/// heap.insert(5, "Alice");
/// heap.insert(1, "Bob");
/// heap.insert(2, "Eve");
///
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.peek().map(|e| *e.value()), Some("Bob"));
///
/// // Values come back ordered by their keys, smallest first.
/// assert_eq!(heap.extract_min(), Some("Bob"));
/// assert_eq!(heap.extract_min(), Some("Eve"));
/// assert_eq!(heap.extract_min(), Some("Alice"));
/// assert_eq!(heap.extract_min(), None);
/// assert!(heap.is_empty());
/// ```
///
/// When the key is also the payload, [`insert_key`] stores a copy of the key
/// as the value:
///
/// ```
/// use kv_min_heap::MinHeap;
///
/// let mut heap: MinHeap<i32, i32> = MinHeap::new();
/// heap.insert_key(3);
/// heap.insert_key(1);
/// assert_eq!(heap.render(), "[1, 3]");
/// ```
///
/// # Time complexity
///
/// | [insert]      | [extract\_min] | [peek] |
/// |---------------|----------------|--------|
/// | *O*(log(*n*)) | *O*(log(*n*))  | *O*(1) |
///
/// [`Ord`]: core::cmp::Ord
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [insert]: MinHeap::insert
/// [`insert_key`]: MinHeap::insert_key
/// [`extract_min`]: MinHeap::extract_min
/// [extract\_min]: MinHeap::extract_min
/// [peek]: MinHeap::peek
#[derive(Clone, PartialEq, Eq)]
pub struct MinHeap<K, V> {
    data: Vec<HeapEntry<K, V>>,
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    /// Creates an empty `MinHeap<K, V>`.
    #[inline]
    fn default() -> MinHeap<K, V> {
        MinHeap::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MinHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<K, V: fmt::Display> fmt::Display for MinHeap<K, V> {
    /// Writes the values in internal array order as `[a, b, c]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, entry) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry.value)?;
        }
        f.write_str("]")
    }
}

impl<K: Ord, V> MinHeap<K, V> {
    /// Creates an empty `MinHeap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(4, "Steven");
    /// ```
    #[must_use]
    pub fn new() -> MinHeap<K, V> {
        MinHeap { data: vec![] }
    }

    /// Creates an empty `MinHeap` with room for `capacity` entries
    /// before the backing store has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap = MinHeap::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// heap.insert(4, "Eve");
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> MinHeap<K, V> {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// The new entry is appended at the end of the backing store and then
    /// sifted up while its key is strictly smaller than its parent's. Equal
    /// keys are never swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    /// heap.insert(3, "Bob");
    /// heap.insert(5, "Alice");
    /// heap.insert(1, "Eve");
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek().map(|e| *e.key()), Some(1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) in the worst case, bounded by the height of the tree.
    pub fn insert(&mut self, key: K, value: V) {
        self.data.push(HeapEntry::new(key, value));
        if self.data.len() > 1 {
            self.sift_up(self.data.len() - 1);
        }
    }

    /// Removes the entry with the smallest key and returns its value, or
    /// `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap = MinHeap::from([3, 1]);
    ///
    /// assert_eq!(heap.extract_min(), Some(1));
    /// assert_eq!(heap.extract_min(), Some(3));
    /// assert_eq!(heap.extract_min(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost on a heap containing *n* entries is *O*(log(*n*)).
    pub fn extract_min(&mut self) -> Option<V> {
        self.extract_min_entry().map(HeapEntry::into_value)
    }

    /// Like [`extract_min`](MinHeap::extract_min), but hands back the whole
    /// entry so the key is not lost.
    pub fn extract_min_entry(&mut self) -> Option<HeapEntry<K, V>> {
        if self.data.is_empty() {
            return None;
        }

        // Move the root to the end so it can be popped off, leaving the
        // last leaf in the hole at the top.
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let root = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        root
    }

    /// Removes the entry with the smallest key and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use kv_min_heap::{HeapError, MinHeap};
    ///
    /// let mut heap = MinHeap::from([7]);
    /// assert_eq!(heap.try_extract_min(), Ok(7));
    /// assert_eq!(heap.try_extract_min(), Err(HeapError::Empty));
    /// ```
    pub fn try_extract_min(&mut self) -> Result<V, HeapError> {
        self.extract_min().ok_or(HeapError::Empty)
    }

    /// Returns `true` if no child in the backing store has a smaller key
    /// than its parent.
    #[must_use]
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[i].key >= self.data[(i - 1) / 2].key)
    }

    /// Consumes the `MinHeap` and returns its values in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::from([1, 2, 4, 5, 7]);
    /// heap.insert_key(6);
    /// heap.insert_key(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<V> {
        self.into_iter_sorted().collect()
    }

    /// Returns an iterator which yields values in ascending key order.
    /// This method consumes the original heap.
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let heap = MinHeap::from([5, 4, 3, 2, 1]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<K, V> {
        IntoIterSorted::new(self)
    }

    /// Clears the heap, returning an iterator over its values in ascending
    /// key order. Whatever the iterator has not yielded when it is dropped
    /// is discarded.
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap = MinHeap::from([9, 8, 7, 6, 5]);
    ///
    /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [5, 6]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, K, V> {
        DrainSorted::new(self)
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos].key >= self.data[parent].key {
                return;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                return;
            }

            // Ties between the children go to the right one.
            let right = left + 1;
            let child = if right < end && self.data[right].key <= self.data[left].key {
                right
            } else {
                left
            };

            if self.data[child].key >= self.data[pos].key {
                return;
            }

            self.data.swap(pos, child);
            pos = child;
        }
    }
}

impl<K: Ord + Clone> MinHeap<K, K> {
    /// Inserts `key` using a copy of itself as the value.
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap: MinHeap<&str, &str> = MinHeap::new();
    /// heap.insert_key("b");
    /// heap.insert_key("a");
    /// assert_eq!(heap.extract_min(), Some("a"));
    /// ```
    pub fn insert_key(&mut self, key: K) {
        self.insert(key.clone(), key);
    }
}

impl<K, V> MinHeap<K, V> {
    /// Returns an iterator visiting all values in internal array order.
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let heap = MinHeap::from([3, 1, 2]);
    ///
    /// assert_eq!(heap.iter().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.data)
    }

    /// Returns the entry with the smallest key, or `None` if the heap is
    /// empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&HeapEntry<K, V>> {
        self.data.first()
    }

    /// Renders the values in internal array order, e.g. `[1, 3, 2]`.
    ///
    /// This exposes the layout of the backing store, not the sorted order,
    /// and is meant for diagnostics. An empty heap renders as `[]`.
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.render(), "[]");
    ///
    /// heap.insert(2, "two");
    /// heap.insert(1, "one");
    /// assert_eq!(heap.render(), "[one, two]");
    /// ```
    #[must_use]
    pub fn render(&self) -> String
    where
        V: fmt::Display,
    {
        self.to_string()
    }

    /// Returns how many entries the backing store can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Consumes the `MinHeap` and returns its values in internal array order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<V> {
        self.into()
    }

    /// Returns the number of entries in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// ```
    /// use kv_min_heap::MinHeap;
    /// let mut heap = MinHeap::new();
    ///
    /// assert!(heap.is_empty());
    /// heap.insert(3, "Bob");
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drops all entries from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<K: Ord + Clone> From<Vec<K>> for MinHeap<K, K> {
    /// Inserts every element in order, each one serving as its own value.
    fn from(vec: Vec<K>) -> MinHeap<K, K> {
        vec.into_iter().collect()
    }
}

impl<K: Ord + Clone, const N: usize> From<[K; N]> for MinHeap<K, K> {
    /// ```
    /// use kv_min_heap::MinHeap;
    ///
    /// let mut h1 = MinHeap::from([1, 4, 2, 3]);
    /// let mut h2: MinHeap<_, _> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.extract_min().zip(h2.extract_min()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [K; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for MinHeap<K, V> {
    fn from(vec: Vec<(K, V)>) -> MinHeap<K, V> {
        vec.into_iter().collect()
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for MinHeap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<K, V> From<MinHeap<K, V>> for Vec<V> {
    /// Converts a `MinHeap<K, V>` into its values in internal array order.
    fn from(heap: MinHeap<K, V>) -> Vec<V> {
        heap.data.into_iter().map(HeapEntry::into_value).collect()
    }
}

impl<K: Ord + Clone> FromIterator<K> for MinHeap<K, K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> MinHeap<K, K> {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MinHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> MinHeap<K, V> {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, K, V> IntoIterator for &'a MinHeap<K, V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: Ord + Clone> Extend<K> for MinHeap<K, K> {
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.data.reserve(lower);

        iterator.for_each(move |key| self.insert_key(key));
    }
}

impl<K: Ord, V> Extend<(K, V)> for MinHeap<K, V> {
    #[inline]
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.data.reserve(lower);

        iterator.for_each(move |(key, value)| self.insert(key, value));
    }
}
