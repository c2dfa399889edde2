//! The ring itself: cursor arithmetic and the transfer operations.
//!
//! Layout
//! - `storage` is exactly `capacity` bytes, with `capacity` a power of two.
//! - `head`/`tail` are monotonically increasing 32-bit cursors counting total
//!   bytes ever consumed/appended. They are never reduced modulo capacity;
//!   only their low bits address storage, via [`RingBuffer::slot`]. Every
//!   operation goes through that one helper so the masking convention lives
//!   in a single place.
//! - `tail - head` (wrapping) is the buffered length and never exceeds
//!   `capacity`. Empty means `head == tail`, full means `tail - head == capacity`.
//!
//! The cursors use wrapping arithmetic so the length difference stays
//! well-defined even at the u32 boundary; a single buffer moving more than
//! 2^32 cumulative bytes between creation and drop is a known correctness
//! boundary this type does not attempt to cover.
#![allow(clippy::cast_possible_truncation)]

use alloc::{boxed::Box, vec};
use core::{cmp, fmt};

use bstr::BStr;

use crate::error::InsufficientSpace;

/// Largest supported capacity in bytes. Capacities are addressed through
/// 32-bit cursors, so one buffer tops out at 2 GiB.
pub(crate) const MAX_CAPACITY: usize = 1 << 31;

/// A fixed-capacity circular byte buffer.
///
/// Capacity is rounded up to a power of two at creation and never changes.
/// Appends and consumes move two monotonic cursors; data physically wraps
/// around the end of storage transparently. See the crate docs for an
/// end-to-end example.
pub struct RingBuffer {
    storage: Box<[u8]>,
    capacity: u32,
    /// Read cursor: total bytes consumed or discarded since creation.
    pub(crate) head: u32,
    /// Write cursor: total bytes appended since creation.
    pub(crate) tail: u32,
}

impl RingBuffer {
    /// Creates a buffer holding at least `capacity_hint` bytes.
    ///
    /// The realized capacity is the smallest power of two >= the hint, with a
    /// minimum of 2; query it with [`capacity`](Self::capacity).
    ///
    /// # Panics
    ///
    /// Panics if `capacity_hint` exceeds the 2^31-byte maximum.
    #[must_use]
    pub fn new(capacity_hint: usize) -> Self {
        assert!(
            capacity_hint <= MAX_CAPACITY,
            "capacity hint {capacity_hint} exceeds the 2^31-byte maximum"
        );
        let capacity = capacity_hint.max(2).next_power_of_two();
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            capacity: capacity as u32,
            head: 0,
            tail: 0,
        }
    }

    /// Physical storage index for a logical cursor position.
    ///
    /// The single place the power-of-two mask is applied.
    pub(crate) fn slot(&self, cursor: u32) -> usize {
        (cursor & (self.capacity - 1)) as usize
    }

    pub(crate) fn storage(&self) -> &[u8] {
        &self.storage
    }

    pub(crate) fn replace_storage(&mut self, storage: Box<[u8]>, len: usize) {
        debug_assert_eq!(storage.len(), self.capacity as usize);
        self.storage = storage;
        // Re-anchor the cursors so slot 0 of the new region really is
        // logical offset 0 of the unread data.
        self.head = 0;
        self.tail = len as u32;
    }

    /// Realized capacity in bytes (a power of two >= 2).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Number of buffered (appended but not yet consumed) bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) as usize
    }

    /// Free space in bytes; an [`append`](Self::append) of at most this many
    /// bytes succeeds.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// `true` when no bytes are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// `true` when the buffered length equals the capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Appends `data`, failing without side effects when it does not fit.
    ///
    /// All-or-nothing: on [`InsufficientSpace`] no bytes are written and the
    /// cursors do not move. An empty `data` trivially succeeds.
    ///
    /// # Errors
    ///
    /// [`InsufficientSpace`] when `data.len() > self.remaining()`.
    pub fn append(&mut self, data: &[u8]) -> Result<(), InsufficientSpace> {
        let remaining = self.remaining();
        if data.len() > remaining {
            return Err(InsufficientSpace {
                requested: data.len(),
                remaining,
            });
        }
        let wpos = self.slot(self.tail);
        // First segment runs to the physical end of storage, the second
        // (possibly empty) lands at the start.
        let run = cmp::min(data.len(), self.capacity() - wpos);
        self.storage[wpos..wpos + run].copy_from_slice(&data[..run]);
        self.storage[..data.len() - run].copy_from_slice(&data[run..]);
        self.tail = self.tail.wrapping_add(data.len() as u32);
        Ok(())
    }

    /// Copies up to `dst.len()` buffered bytes into `dst`, consuming them.
    ///
    /// Returns the number of bytes copied: `min(dst.len(), self.len())`,
    /// which is 0 when the buffer is empty. (Consuming from an empty buffer
    /// is deliberately a no-op rather than a contract violation.)
    pub fn consume(&mut self, dst: &mut [u8]) -> usize {
        let n = cmp::min(dst.len(), self.len());
        let rpos = self.slot(self.head);
        let run = cmp::min(n, self.capacity() - rpos);
        dst[..run].copy_from_slice(&self.storage[rpos..rpos + run]);
        dst[run..n].copy_from_slice(&self.storage[..n - run]);
        self.head = self.head.wrapping_add(n as u32);
        n
    }

    /// Drops up to `max` buffered bytes without copying them anywhere.
    ///
    /// Returns the number of bytes actually discarded, clamped to
    /// [`len`](Self::len). Useful after parsing bytes in place via
    /// [`as_segments`](Self::as_segments) or
    /// [`make_contiguous`](Self::make_contiguous).
    pub fn discard(&mut self, max: usize) -> usize {
        let n = cmp::min(max, self.len());
        self.head = self.head.wrapping_add(n as u32);
        n
    }

    /// Discards everything currently buffered.
    pub fn clear(&mut self) {
        self.head = self.tail;
    }

    /// The unread bytes as up to two physical slices, in logical order.
    ///
    /// The second slice is empty unless the data wraps past the physical end
    /// of storage. Concatenated, the slices are exactly the bytes a full
    /// [`consume`](Self::consume) would return. Valid until the next
    /// mutating call.
    #[must_use]
    pub fn as_segments(&self) -> (&[u8], &[u8]) {
        let len = self.len();
        let rpos = self.slot(self.head);
        if rpos + len <= self.capacity() {
            (&self.storage[rpos..rpos + len], &[])
        } else {
            let run = self.capacity() - rpos;
            (&self.storage[rpos..], &self.storage[..len - run])
        }
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_segments();
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("front", &BStr::new(front))
            .field("back", &BStr::new(back))
            .finish()
    }
}
