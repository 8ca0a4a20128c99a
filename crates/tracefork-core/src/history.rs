use std::collections::VecDeque;

/// Fixed-capacity FIFO window. Pushing past capacity evicts the oldest entry.
///
/// `total_pushed` keeps counting after eviction so callers can tell how many
/// entries were ever recorded even though only the most recent `capacity`
/// are retained.
#[derive(Clone, Debug)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
    total_pushed: u64,
}

impl<T> BoundedHistory<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            total_pushed: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
        self.total_pushed += 1;
        while self.items.len() > self.capacity {
            self.items.pop_front();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// The last `n` entries in arrival order (fewer if not enough are held).
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &T> {
        let skip = self.items.len().saturating_sub(n);
        self.items.iter().skip(skip)
    }

    /// Entry `back` positions from the newest (0 = newest).
    pub fn from_back(&self, back: usize) -> Option<&T> {
        let len = self.items.len();
        if back >= len {
            return None;
        }
        self.items.get(len - 1 - back)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> BoundedHistory<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
