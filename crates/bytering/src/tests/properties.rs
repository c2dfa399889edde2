//! Model-based properties: the ring must agree with a `VecDeque<u8>` model
//! under arbitrary operation sequences.

use alloc::{collections::VecDeque, vec, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::RingBuffer;

#[derive(Clone, Debug)]
enum Op {
    Append(Vec<u8>),
    Consume(usize),
    Discard(usize),
    Search(Vec<u8>),
    MakeContiguous,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 5 {
            0 => Op::Append(Vec::arbitrary(g)),
            1 => Op::Consume(usize::arbitrary(g) % 64),
            2 => Op::Discard(usize::arbitrary(g) % 64),
            3 => Op::Search(Vec::arbitrary(g)),
            _ => Op::MakeContiguous,
        }
    }
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

fn iterations() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[test]
fn ring_agrees_with_deque_model() {
    fn prop(ops: Vec<Op>) -> bool {
        let mut ring = RingBuffer::new(16);
        let cap = ring.capacity();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::Append(data) => match ring.append(&data) {
                    Ok(()) => {
                        if data.len() > cap - model.len() {
                            return false; // accepted an oversized append
                        }
                        model.extend(data.iter().copied());
                    }
                    Err(e) => {
                        if data.len() <= cap - model.len() {
                            return false; // rejected a fitting append
                        }
                        if e.requested != data.len() || e.remaining != cap - model.len() {
                            return false;
                        }
                    }
                },
                Op::Consume(n) => {
                    let mut out = vec![0u8; n];
                    let got = ring.consume(&mut out);
                    let expected: Vec<u8> = model.drain(..n.min(model.len())).collect();
                    if out[..got] != expected[..] {
                        return false;
                    }
                }
                Op::Discard(n) => {
                    let dropped = ring.discard(n);
                    if dropped != n.min(model.len()) {
                        return false;
                    }
                    model.drain(..dropped);
                }
                Op::Search(pattern) => {
                    if ring.find_delimiter(&pattern) != model_find(&model, &pattern) {
                        return false;
                    }
                }
                Op::MakeContiguous => {
                    let expected: Vec<u8> = model.iter().copied().collect();
                    if ring.make_contiguous() != expected {
                        return false;
                    }
                }
            }

            if ring.len() != model.len() || ring.remaining() != cap - model.len() {
                return false;
            }
        }

        // Whatever is left must drain out in model order.
        let mut out = vec![0u8; cap];
        let got = ring.consume(&mut out);
        let expected: Vec<u8> = model.into_iter().collect();
        out[..got] == expected[..]
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<Op>) -> bool);
}

#[test]
fn chunked_roundtrip_preserves_byte_order() {
    fn prop(payload: Vec<u8>, chunk_hint: usize) -> bool {
        let mut ring = RingBuffer::new(32);
        let chunk = 1 + chunk_hint % ring.capacity();
        let mut replayed = Vec::with_capacity(payload.len());

        // Stream the payload through the small ring in `chunk`-sized pieces,
        // draining after every append so writes keep lapping the storage.
        for piece in payload.chunks(chunk) {
            ring.append(piece).unwrap();
            let mut out = vec![0u8; piece.len()];
            let got = ring.consume(&mut out);
            replayed.extend_from_slice(&out[..got]);
        }

        ring.is_empty() && replayed == payload
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u8>, usize) -> bool);
}
