//! Fixed-Capacity Ring Buffer Implementation

use crate::error::RingBufferError;
use crate::window::WindowConfig;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

/// Fixed-capacity ring buffer that overwrites its oldest element when full
///
/// Storage is an inline `[T; N]`, so the buffer never allocates. Logical
/// index 0 is always the oldest retained element and `len() - 1` the newest.
///
/// Emptiness and fullness both have `write_index == read_index`; the `full`
/// flag tells them apart, so all `N` slots are usable.
#[derive(Clone)]
pub struct RingBuffer<T, const N: usize> {
    /// Inline storage, default-initialised
    storage: [T; N],
    /// Slot the next push writes to
    write_index: usize,
    /// Slot holding the oldest retained element
    read_index: usize,
    /// Holds exactly `N` elements
    full: bool,
    /// Pushes since construction or the last clear
    total_pushed: u64,
    /// Elements overwritten since construction or the last clear
    evicted: u64,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "ring buffer capacity must be non-zero");

    /// Create an empty buffer with every slot set to `T::default()`
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            storage: [T::default(); N],
            write_index: 0,
            read_index: 0,
            full: false,
            total_pushed: 0,
            evicted: 0,
        }
    }

    /// Push a value, silently overwriting the oldest one if full
    pub fn push(&mut self, value: T) {
        self.push_evicting(value);
    }

    /// Push a value and return the element it overwrote, if any
    pub fn push_evicting(&mut self, value: T) -> Option<T> {
        // When full the write cursor sits on the oldest element.
        let evicted = self.full.then(|| self.storage[self.write_index]);

        self.storage[self.write_index] = value;
        self.write_index = (self.write_index + 1) % N;
        if self.full {
            self.read_index = (self.read_index + 1) % N;
            self.evicted = self.evicted.wrapping_add(1);
            trace!("Ring buffer overwrote oldest element ({} evicted)", self.evicted);
        }
        self.full = self.write_index == self.read_index;
        self.total_pushed = self.total_pushed.wrapping_add(1);

        evicted
    }

    /// Check if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        !self.full && self.write_index == self.read_index
    }

    /// Check if the buffer holds exactly `N` elements
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Number of retained elements, in `0..=N`
    pub fn len(&self) -> usize {
        if self.full {
            N
        } else {
            (self.write_index + N - self.read_index) % N
        }
    }

    /// Get the buffer capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.len() as f64 / N as f64
    }

    /// Reset every slot to `T::default()` and discard all history
    pub fn clear(&mut self) {
        self.storage = [T::default(); N];
        self.write_index = 0;
        self.read_index = 0;
        self.full = false;
        self.total_pushed = 0;
        self.evicted = 0;
        trace!("Ring buffer cleared (capacity {})", N);
    }

    /// Physical slot of a logical index, wrapped modulo capacity
    fn slot(&self, index: usize) -> usize {
        (self.read_index + index % N) % N
    }

    /// Element at a logical index, relative to the oldest element
    ///
    /// Only wrapped against the capacity, not checked against `len()`:
    /// an index at or past `len()` returns a stale or default slot.
    /// Use [`get`](Self::get) or [`try_get`](Self::try_get) for a checked read.
    pub fn element_at(&self, index: usize) -> &T {
        &self.storage[self.slot(index)]
    }

    /// Mutable element at a logical index; see [`element_at`](Self::element_at)
    ///
    /// Writing through the reference changes the value only, never the cursors.
    pub fn element_at_mut(&mut self, index: usize) -> &mut T {
        let slot = self.slot(index);
        &mut self.storage[slot]
    }

    /// Element at a logical index, `None` past the retained elements
    pub fn get(&self, index: usize) -> Option<&T> {
        (index < self.len()).then(|| self.element_at(index))
    }

    /// Mutable element at a logical index, `None` past the retained elements
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            Some(self.element_at_mut(index))
        } else {
            None
        }
    }

    /// Element at a logical index, reporting out-of-range access as an error
    pub fn try_get(&self, index: usize) -> Result<&T, RingBufferError> {
        let len = self.len();
        self.get(index)
            .ok_or(RingBufferError::IndexOutOfRange { index, len })
    }

    /// Oldest retained element
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Most recently pushed element
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|newest| self.get(newest))
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            buffer: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Copy logical elements `start..start + out.len()` into `out`
    ///
    /// `out` is left untouched when the range exceeds the retained elements.
    pub fn copy_window(&self, start: usize, out: &mut [T]) -> Result<(), RingBufferError> {
        let len = self.len();
        let count = out.len();
        match start.checked_add(count) {
            Some(end) if end <= len => {}
            _ => return Err(RingBufferError::WindowOutOfRange { start, count, len }),
        }

        for (offset, value) in out.iter_mut().enumerate() {
            *value = self.storage[(self.read_index + start + offset) % N];
        }
        Ok(())
    }

    /// Copy the most recent `out.len()` elements into `out`, oldest first
    pub fn copy_latest(&self, out: &mut [T]) -> Result<(), RingBufferError> {
        let len = self.len();
        let count = out.len();
        let start = len
            .checked_sub(count)
            .ok_or(RingBufferError::WindowOutOfRange { start: 0, count, len })?;
        self.copy_window(start, out)
    }

    /// Check whether [`read_window`](Self::read_window) would succeed now
    pub fn window_ready(&self, config: &WindowConfig) -> bool {
        config.validate(N).is_ok()
            && (!config.require_full || self.full)
            && self.len() >= config.length
    }

    /// Copy the window described by `config` into the front of `out`
    ///
    /// Returns the number of elements written.
    pub fn read_window(
        &self,
        config: &WindowConfig,
        out: &mut [T],
    ) -> Result<usize, RingBufferError> {
        if let Err(e) = config.validate(N) {
            debug!("Rejected window config {:?}: {}", config, e);
            return Err(e);
        }
        if config.require_full && !self.full {
            return Err(RingBufferError::NotFilled {
                len: self.len(),
                capacity: N,
            });
        }
        let out = out
            .get_mut(..config.length)
            .ok_or(RingBufferError::InvalidWindow(
                "output shorter than window length",
            ))?;

        self.copy_latest(out)?;
        debug!("Read window of {} elements ({} retained)", config.length, self.len());
        Ok(config.length)
    }

    /// Pushes since construction or the last clear
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Elements overwritten since construction or the last clear
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Index<usize> for RingBuffer<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.element_at(index)
    }
}

impl<T: Copy + Default, const N: usize> IndexMut<usize> for RingBuffer<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.element_at_mut(index)
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for RingBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for RingBuffer<T, N> {}

/// Debug view of the logical window only
struct Window<'a, T, const N: usize>(&'a RingBuffer<T, N>);

impl<T: Copy + Default + fmt::Debug, const N: usize> fmt::Debug for Window<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Copy + Default + fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &N)
            .field("window", &Window(self))
            .field("write_index", &self.write_index)
            .field("read_index", &self.read_index)
            .field("full", &self.full)
            .finish()
    }
}

/// Serializes the logical window as a sequence, oldest first
impl<T: Copy + Default + Serialize, const N: usize> Serialize for RingBuffer<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Oldest-to-newest iterator over a [`RingBuffer`]
pub struct Iter<'a, T, const N: usize> {
    buffer: &'a RingBuffer<T, N>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let buffer = self.buffer;
        let item = &buffer.storage[(buffer.read_index + self.front) % N];
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        let buffer = self.buffer;
        Some(&buffer.storage[(buffer.read_index + self.back) % N])
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
