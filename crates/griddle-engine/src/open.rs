// Copyright (c) 2025 The griddle developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The bucketed monotone open list.
//!
//! Edge costs are small integers, so a vector of buckets indexed by g gives
//! O(1) amortised insertion and extraction where a binary heap would pay a
//! logarithm. Within a bucket the order is LIFO; every entry of a bucket
//! shares its g-value, so the traversal's only required ordering
//! (non-decreasing g across pops) is unaffected.
//!
//! The queue keeps `mini` and `maxi`, the lowest and highest non-empty
//! bucket indices. INVARIANT: all operations preserve the range
//! `[mini, maxi]` of occupied buckets unless the queue is empty, in which
//! case `mini = maxi = 1`.

use crate::node::Node;

/// The error raised by queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The bucket holds no node to remove.
    EmptyBucket {
        /// The offending bucket index.
        index: usize,
    },
    /// More buckets were requested than the queue supports.
    CapacityExceeded {
        /// The requested number of buckets.
        requested: usize,
        /// The supported maximum.
        limit: usize,
    },
}

impl std::fmt::Display for QueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueError::EmptyBucket { index } => {
                write!(f, "The {}-th bucket is empty", index)
            }
            QueueError::CapacityExceeded { requested, limit } => {
                write!(
                    f,
                    "Too many buckets: {} requested but at most {} are supported",
                    requested, limit
                )
            }
        }
    }
}

impl std::error::Error for QueueError {}

/// A monotone priority queue of search nodes, bucketed by g-value.
///
/// # Examples
///
/// ```rust
/// # use griddle_engine::{node::Node, open::BucketQueue};
///
/// let mut open = BucketQueue::new();
/// open.insert(Node::new('b', 2)).unwrap();
/// open.insert(Node::new('a', 1)).unwrap();
///
/// assert_eq!(open.pop_front().unwrap().g(), 1);
/// assert_eq!(open.pop_front().unwrap().g(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BucketQueue<S> {
    buckets: Vec<Vec<Node<S>>>,
    size: usize,
    mini: usize,
    maxi: usize,
}

impl<S> BucketQueue<S> {
    /// The largest number of buckets a queue will grow to. Far above any
    /// byte-valued g; reaching it means a corrupted g-value.
    pub const MAX_BUCKETS: usize = 1 << 16;

    /// Creates an empty queue with a single bucket.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new()],
            size: 0,
            mini: 1,
            maxi: 1,
        }
    }

    /// Creates an empty queue with at least the given number of buckets.
    pub fn with_buckets(nbbuckets: usize) -> Result<Self, QueueError> {
        let mut queue = Self::new();
        queue.set_nbbuckets(nbbuckets)?;
        Ok(queue)
    }

    /// Returns the number of nodes in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the queue holds no node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current number of buckets.
    #[inline]
    pub fn nbbuckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of nodes in the given bucket, zero for buckets
    /// beyond the current capacity.
    #[inline]
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Vec::len)
    }

    /// Returns the lowest occupied bucket index, or the sentinel 1 when the
    /// queue is empty.
    #[inline]
    pub fn mini(&self) -> usize {
        self.mini
    }

    /// Returns the highest occupied bucket index, or the sentinel 1 when
    /// the queue is empty.
    #[inline]
    pub fn maxi(&self) -> usize {
        self.maxi
    }

    /// Grows the queue until it holds at least `nbbuckets` buckets,
    /// doubling from the current capacity. Returns the resulting number of
    /// buckets.
    pub fn set_nbbuckets(&mut self, nbbuckets: usize) -> Result<usize, QueueError> {
        if nbbuckets > Self::MAX_BUCKETS {
            return Err(QueueError::CapacityExceeded {
                requested: nbbuckets,
                limit: Self::MAX_BUCKETS,
            });
        }

        if self.buckets.len() < nbbuckets {
            let mut capacity = self.buckets.len().max(1);
            while capacity < nbbuckets {
                capacity *= 2;
            }
            self.buckets.resize_with(capacity, Vec::new);
        }

        Ok(self.buckets.len())
    }

    /// Adds a node to the bucket of its g-value, growing the queue as
    /// needed.
    pub fn insert(&mut self, node: Node<S>) -> Result<(), QueueError> {
        let index = node.g() as usize;
        self.set_nbbuckets(index + 1)?;

        self.buckets[index].push(node);
        self.size += 1;

        if self.size == 1 {
            self.mini = index;
            self.maxi = index;
        } else {
            self.mini = self.mini.min(index);
            self.maxi = self.maxi.max(index);
        }

        Ok(())
    }

    /// Removes and returns a node from the given bucket, maintaining
    /// `mini`/`maxi`.
    pub fn remove(&mut self, index: usize) -> Result<Node<S>, QueueError> {
        let node = match self.buckets.get_mut(index).and_then(Vec::pop) {
            Some(node) => node,
            None => return Err(QueueError::EmptyBucket { index }),
        };

        self.size -= 1;

        if self.size == 0 {
            self.mini = 1;
            self.maxi = 1;
        } else if self.buckets[index].is_empty() {
            // walk to the nearest occupied bucket on whichever side this
            // one bounded
            if index <= self.mini {
                let mut m = index;
                while m <= self.maxi && self.buckets[m].is_empty() {
                    m += 1;
                }
                self.mini = m;
            }
            if index >= self.maxi {
                let mut m = index;
                while m >= self.mini && self.buckets[m].is_empty() {
                    m -= 1;
                }
                self.maxi = m;
            }
        }

        Ok(node)
    }

    /// Removes and returns a node of minimum g.
    #[inline]
    pub fn pop_front(&mut self) -> Result<Node<S>, QueueError> {
        self.remove(self.mini)
    }

    /// Returns the node `pop_front` would yield, without removing it.
    #[inline]
    pub fn front(&self) -> Option<&Node<S>> {
        self.buckets.get(self.mini).and_then(|bucket| bucket.last())
    }
}

impl<S> Default for BucketQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_sentinels() {
        let open: BucketQueue<u32> = BucketQueue::new();
        assert!(open.is_empty());
        assert_eq!(open.mini(), 1);
        assert_eq!(open.maxi(), 1);
        assert!(open.front().is_none());
    }

    #[test]
    fn test_pop_on_empty_queue() {
        let mut open: BucketQueue<u32> = BucketQueue::new();
        assert_eq!(open.pop_front(), Err(QueueError::EmptyBucket { index: 1 }));
    }

    #[test]
    fn test_monotone_pop_order() {
        let mut open = BucketQueue::new();
        for g in [5u8, 2, 9, 2, 7, 1, 9, 3] {
            open.insert(Node::new((), g)).unwrap();
        }

        let mut last = 0;
        while !open.is_empty() {
            let g = open.pop_front().unwrap().g();
            assert!(g >= last, "popped {} after {}", g, last);
            last = g;
        }
    }

    #[test]
    fn test_mini_maxi_tracking() {
        let mut open = BucketQueue::new();
        open.insert(Node::new((), 4)).unwrap();
        assert_eq!((open.mini(), open.maxi()), (4, 4));

        open.insert(Node::new((), 9)).unwrap();
        open.insert(Node::new((), 2)).unwrap();
        assert_eq!((open.mini(), open.maxi()), (2, 9));

        open.pop_front().unwrap();
        assert_eq!(open.mini(), 4);

        open.remove(9).unwrap();
        assert_eq!(open.maxi(), 4);

        open.pop_front().unwrap();
        assert_eq!((open.mini(), open.maxi()), (1, 1));
        assert!(open.is_empty());
    }

    #[test]
    fn test_lifo_within_a_bucket() {
        let mut open = BucketQueue::new();
        open.insert(Node::new('a', 3)).unwrap();
        open.insert(Node::new('b', 3)).unwrap();
        assert_eq!(*open.pop_front().unwrap().state(), 'b');
        assert_eq!(*open.pop_front().unwrap().state(), 'a');
    }

    #[test]
    fn test_growth_doubles() {
        let mut open: BucketQueue<()> = BucketQueue::new();
        assert_eq!(open.nbbuckets(), 1);
        open.insert(Node::new((), 5)).unwrap();
        // grown by doubling from 1 until at least 6
        assert_eq!(open.nbbuckets(), 8);
    }

    #[test]
    fn test_capacity_limit() {
        let mut open: BucketQueue<()> = BucketQueue::new();
        assert_eq!(
            open.set_nbbuckets(BucketQueue::<()>::MAX_BUCKETS + 1),
            Err(QueueError::CapacityExceeded {
                requested: BucketQueue::<()>::MAX_BUCKETS + 1,
                limit: BucketQueue::<()>::MAX_BUCKETS,
            })
        );
    }

    #[test]
    fn test_front_peeks_without_removing() {
        let mut open = BucketQueue::new();
        open.insert(Node::new('x', 2)).unwrap();
        assert_eq!(open.front().map(Node::g), Some(2));
        assert_eq!(open.len(), 1);
    }
}
