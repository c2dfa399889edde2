//! A fixed-capacity circular byte buffer for streaming I/O.
//!
//! [`RingBuffer`] holds up to a power-of-two number of bytes and supports
//! appending, consuming into caller storage, discarding without copying,
//! scanning for a multi-byte delimiter across the wrap boundary, and
//! materializing the unread bytes as one contiguous slice for a single
//! bulk write call. No operation allocates except the wrapped-data path of
//! [`RingBuffer::make_contiguous`].
//!
//! The buffer performs no internal synchronization: `&mut self` on every
//! mutating operation pushes the one-producer/one-consumer discipline onto
//! the caller, where it belongs.
//!
//! ```rust
//! use bytering::RingBuffer;
//!
//! let mut ring = RingBuffer::new(5); // rounds up to 8
//! ring.append(b"ABCDEF").unwrap();
//!
//! // "EF\n" would be a framed line; find how far to consume to pass "EF".
//! let past = ring.find_delimiter(b"EF").unwrap();
//! assert_eq!(past, 6);
//!
//! let mut line = [0u8; 6];
//! let n = ring.consume(&mut line);
//! assert_eq!(&line[..n], b"ABCDEF");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod ring;
mod search;
mod view;

#[cfg(test)]
mod tests;

pub use error::InsufficientSpace;
pub use ring::RingBuffer;
