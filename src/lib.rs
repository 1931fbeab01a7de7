//! A key/value binary min-heap and a heap sort built on it.
//!
//! [`MinHeap`] stores `(key, value)` entries in a vector laid out as a
//! complete binary tree, so the entry with the smallest key is always at the
//! front. [`heap_sort`] pushes every element of a slice through a heap and
//! writes the minimums back in ascending order.
//!
//! ```
//! use kv_min_heap::{heap_sort, MinHeap};
//!
//! let mut heap: MinHeap<i32, i32> = MinHeap::new();
//! for key in [5, 3, 8, 1, 9, 2] {
//!     heap.insert_key(key);
//! }
//! assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 5, 8, 9]);
//!
//! let mut list = ['d', 'a', 'c', 'b'];
//! heap_sort(&mut list);
//! assert_eq!(list, ['a', 'b', 'c', 'd']);
//! ```

mod error;
mod heap;
mod iter;
mod sort;

pub use error::HeapError;
pub use heap::{HeapEntry, MinHeap};
pub use iter::{DrainSorted, IntoIterSorted, Iter};
pub use sort::{heap_sort, heap_sorted};
