#![no_main]
//! Differential fuzzing of `RingBuffer` against a `VecDeque<u8>` model.
//!
//! Every operation's result and the buffer's length accounting must agree
//! with the model for arbitrary operation sequences and capacities.

use std::collections::VecDeque;

use arbitrary::Arbitrary;
use bytering::RingBuffer;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Append(Vec<u8>),
    Consume(u16),
    Discard(u16),
    Search(Vec<u8>),
    MakeContiguous,
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Session {
    capacity_hint: u16,
    ops: Vec<Op>,
}

fn model_find(model: &VecDeque<u8>, pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > model.len() {
        return None;
    }
    let bytes: Vec<u8> = model.iter().copied().collect();
    bytes
        .windows(pattern.len())
        .position(|w| w == pattern)
        .map(|i| i + pattern.len())
}

fuzz_target!(|session: Session| {
    let mut ring = RingBuffer::new(usize::from(session.capacity_hint));
    let cap = ring.capacity();
    let mut model: VecDeque<u8> = VecDeque::new();

    for op in session.ops {
        match op {
            Op::Append(data) => {
                let fits = data.len() <= cap - model.len();
                match ring.append(&data) {
                    Ok(()) => {
                        assert!(fits, "accepted an append of {} over capacity", data.len());
                        model.extend(data.iter().copied());
                    }
                    Err(e) => {
                        assert!(!fits, "rejected a fitting append: {e}");
                    }
                }
            }
            Op::Consume(n) => {
                let mut out = vec![0u8; usize::from(n)];
                let got = ring.consume(&mut out);
                let expected: Vec<u8> = model.drain(..usize::from(n).min(model.len())).collect();
                assert_eq!(&out[..got], &expected[..]);
            }
            Op::Discard(n) => {
                let dropped = ring.discard(usize::from(n));
                assert_eq!(dropped, usize::from(n).min(model.len()));
                model.drain(..dropped);
            }
            Op::Search(pattern) => {
                assert_eq!(ring.find_delimiter(&pattern), model_find(&model, &pattern));
            }
            Op::MakeContiguous => {
                let expected: Vec<u8> = model.iter().copied().collect();
                assert_eq!(ring.make_contiguous(), &expected[..]);
            }
            Op::Clear => {
                ring.clear();
                model.clear();
            }
        }

        assert_eq!(ring.len(), model.len());
        assert_eq!(ring.remaining(), cap - model.len());
        assert_eq!(ring.is_empty(), model.is_empty());
    }
});
