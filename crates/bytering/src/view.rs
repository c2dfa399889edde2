//! Contiguous-view materialization for scatter-free bulk writes.
//!
//! A bulk writer (one `write(2)` call, say) wants the unread bytes as a
//! single span, but they may physically wrap. The non-wrapped case borrows
//! straight from storage; the wrapped case linearizes into a fresh region
//! and installs it. Installing re-anchors both cursors to `0`/`len` so the
//! masked slot arithmetic matches the new layout; the old storage's
//! physical offsets are dead the moment this returns, which the `&mut self`
//! borrow enforces on callers.

use alloc::vec;

use crate::ring::RingBuffer;

impl RingBuffer {
    /// Returns the unread bytes as one contiguous slice of length
    /// [`len`](Self::len), valid until the next mutating call.
    ///
    /// When the data already sits contiguously in storage this is a borrow
    /// and copies nothing. When it wraps past the physical end, the data is
    /// copied into a fresh capacity-sized region which replaces the old
    /// storage; the buffered bytes and their order are unchanged either way.
    pub fn make_contiguous(&mut self) -> &[u8] {
        let len = self.len();
        let rpos = self.slot(self.head);
        // Wrapped iff the unread region runs past the physical end. Testing
        // `wpos < rpos` instead would misclassify a full buffer whose read
        // slot is non-zero.
        if rpos + len > self.capacity() {
            let mut fresh = vec![0u8; self.capacity()].into_boxed_slice();
            let (front, back) = self.as_segments();
            fresh[..front.len()].copy_from_slice(front);
            fresh[front.len()..len].copy_from_slice(back);
            self.replace_storage(fresh, len);
            &self.storage()[..len]
        } else {
            &self.storage()[rpos..rpos + len]
        }
    }
}
