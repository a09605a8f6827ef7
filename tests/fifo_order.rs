use std::collections::VecDeque;

use proptest::prelude::*;
use spsc_fifo::fifo::{RingBuffer, RingBufferError};

proptest! {
    // Model check against VecDeque: a write is Some(value), a read is None.
    #[test]
    fn behaves_like_a_bounded_queue(
        capacity in 1usize..32,
        ops in proptest::collection::vec(any::<Option<u16>>(), 0..256),
    ) {
        let mut buffer = RingBuffer::new(capacity).unwrap();
        let mut model: VecDeque<u16> = VecDeque::new();

        for op in ops {
            match op {
                Some(value) => {
                    let result = buffer.write(value);
                    if model.len() == capacity {
                        prop_assert_eq!(result, Err(RingBufferError::BufferFull));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        model.push_back(value);
                    }
                }
                None => {
                    let result = buffer.read();
                    match model.pop_front() {
                        Some(expected) => prop_assert_eq!(result, Ok(expected)),
                        None => prop_assert_eq!(result, Err(RingBufferError::BufferEmpty)),
                    }
                }
            }
            prop_assert_eq!(buffer.len(), model.len());
            prop_assert_eq!(buffer.is_empty(), model.is_empty());
            prop_assert_eq!(buffer.is_full(), model.len() == capacity);
        }
    }

    #[test]
    fn fill_then_drain_preserves_order(
        capacity in 1usize..64,
        values in proptest::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut buffer = RingBuffer::new(capacity).unwrap();
        let accepted: Vec<u32> = values.iter().copied().take(capacity).collect();

        for value in &values {
            let _ = buffer.write(*value);
        }
        for expected in &accepted {
            prop_assert_eq!(buffer.read(), Ok(*expected));
        }
        prop_assert!(buffer.is_empty());
    }
}

#[test]
fn long_random_interleaving_preserves_order() {
    fastrand::seed(42);
    let mut buffer = RingBuffer::new(7).unwrap();
    let mut next_write = 0u64;
    let mut next_read = 0u64;

    for _ in 0..10_000 {
        if fastrand::bool() {
            match buffer.write(next_write) {
                Ok(()) => next_write += 1,
                Err(RingBufferError::BufferFull) => assert_eq!(buffer.len(), 7),
                Err(err) => panic!("unexpected write error: {err}"),
            }
        } else {
            match buffer.read() {
                Ok(value) => {
                    assert_eq!(value, next_read);
                    next_read += 1;
                }
                Err(RingBufferError::BufferEmpty) => assert_eq!(buffer.len(), 0),
                Err(err) => panic!("unexpected read error: {err}"),
            }
        }
    }

    while let Ok(value) = buffer.read() {
        assert_eq!(value, next_read);
        next_read += 1;
    }
    assert_eq!(next_read, next_write);
}
