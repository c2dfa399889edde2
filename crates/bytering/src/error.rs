use thiserror::Error;

/// Returned by [`RingBuffer::append`](crate::RingBuffer::append) when the
/// data does not fit in the free space.
///
/// The append had no effect; the caller can drain the buffer and retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("insufficient space: {requested} bytes requested, {remaining} free")]
pub struct InsufficientSpace {
    /// Number of bytes the rejected append asked for.
    pub requested: usize,
    /// Free space at the time of the call.
    pub remaining: usize,
}
