//! Fixed-capacity circular storage for the most recent samples
//!
//! The buffer allocates its storage once at construction. While filling it
//! appends; once full, every insert overwrites the slot under the write cursor
//! and hands back the sample that was there.

use crate::traits::ConfigError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Circular buffer holding the `capacity` most recent items
///
/// # Example
///
/// ```
/// use kurtstream::window::RingBuffer;
///
/// let mut ring = RingBuffer::new(3).unwrap();
///
/// assert_eq!(ring.insert(1), None);
/// assert_eq!(ring.insert(2), None);
/// assert_eq!(ring.insert(3), None);
///
/// // Full: the oldest item is evicted
/// assert_eq!(ring.insert(4), Some(1));
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
/// ```
#[derive(Debug)]
pub struct RingBuffer<T> {
    /// Storage, `len() == min(items seen, capacity)`
    slots: Vec<T>,
    /// Maximum number of items held
    capacity: usize,
    /// Next slot to write; also the oldest slot once full
    cursor: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer holding at most `capacity` items
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is 0 and
    /// [`ConfigError::CapacityTooLarge`] if the storage cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ConfigError::CapacityTooLarge)?;

        Ok(Self {
            slots,
            capacity,
            cursor: 0,
        })
    }

    /// Insert an item, returning the evicted one
    ///
    /// Returns `None` while the buffer is still filling, and the overwritten
    /// oldest item once it is full.
    pub fn insert(&mut self, value: T) -> Option<T> {
        let evicted = if self.slots.len() < self.capacity {
            self.slots.push(value);
            None
        } else {
            Some(core::mem::replace(&mut self.slots[self.cursor], value))
        };

        self.cursor += 1;
        if self.cursor == self.capacity {
            self.cursor = 0;
        }

        evicted
    }

    /// Maximum number of items held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if the buffer is full
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Physical position of the next write
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the item at logical position `index` (0 is the oldest)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.slots.len() {
            return None;
        }
        let start = self.oldest_slot();
        let mut slot = start + index;
        if slot >= self.slots.len() {
            slot -= self.slots.len();
        }
        self.slots.get(slot)
    }

    /// Oldest item held
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Most recently inserted item
    pub fn newest(&self) -> Option<&T> {
        self.slots.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate over the held items from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let (head, tail) = self.as_slices();
        head.iter().chain(tail.iter())
    }

    /// The held items as two slices, oldest first
    ///
    /// Concatenating the first and second slice gives arrival order.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let start = self.oldest_slot();
        let (newer, older) = self.slots.split_at(start);
        (older, newer)
    }

    /// Remove all items, keeping the allocation
    pub fn clear(&mut self) {
        self.slots.clear();
        self.cursor = 0;
    }

    /// Storage bytes reserved for items
    pub fn size_bytes(&self) -> usize {
        self.slots.capacity() * core::mem::size_of::<T>()
    }

    fn oldest_slot(&self) -> usize {
        // While filling the cursor sits past the last item, i.e. at len()
        if self.is_full() {
            self.cursor
        } else {
            0
        }
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    /// The copy reserves the full capacity, like [`RingBuffer::new`]
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend_from_slice(&self.slots);

        Self {
            slots,
            capacity: self.capacity,
            cursor: self.cursor,
        }
    }
}
