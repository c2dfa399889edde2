//! Delimiter search over the (possibly wrapped) unread region.
#![allow(clippy::cast_possible_truncation)]

use crate::ring::RingBuffer;

impl RingBuffer {
    /// Finds the first occurrence of `pattern` in the buffered bytes and
    /// returns the logical offset just past it: the count a
    /// [`consume`](Self::consume) or [`discard`](Self::discard) needs to
    /// move the read position beyond the delimiter.
    ///
    /// Offset 0 is the current read position. Candidates that straddle the
    /// physical end of storage are compared in two segments; a mismatch
    /// there rejects only that candidate, never the whole scan.
    ///
    /// Returns `None` when `pattern` is absent, empty, or longer than
    /// [`len`](Self::len). The returned offset is always at least `pattern.len()`.
    #[must_use]
    pub fn find_delimiter(&self, pattern: &[u8]) -> Option<usize> {
        let plen = pattern.len();
        // The `len() - plen` bound below must not underflow.
        if plen == 0 || plen > self.len() {
            return None;
        }
        let cap = self.capacity();
        let storage = self.storage();
        for i in 0..=(self.len() - plen) {
            let pos = self.slot(self.head.wrapping_add(i as u32));
            let matched = if pos + plen > cap {
                let run = cap - pos;
                storage[pos..] == pattern[..run] && storage[..plen - run] == pattern[run..]
            } else {
                storage[pos..pos + plen] == *pattern
            };
            if matched {
                return Some(i + plen);
            }
        }
        None
    }
}
