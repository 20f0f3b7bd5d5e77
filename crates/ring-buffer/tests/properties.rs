use proptest::prelude::*;
use ring_buffer::{RingBuffer, WindowConfig};
use std::collections::VecDeque;

const CAPACITY: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        9 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_len_and_full_track_push_count(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let mut buffer: RingBuffer<i32, CAPACITY> = RingBuffer::new();
        for &v in &values {
            buffer.push(v);
        }
        prop_assert_eq!(buffer.len(), values.len().min(CAPACITY));
        prop_assert_eq!(buffer.is_full(), values.len() >= CAPACITY);
        prop_assert_eq!(buffer.is_empty(), values.is_empty());
    }

    #[test]
    fn prop_window_matches_model(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut buffer: RingBuffer<i32, CAPACITY> = RingBuffer::new();
        let mut model: VecDeque<i32> = VecDeque::with_capacity(CAPACITY);

        for op in ops {
            match op {
                Op::Push(v) => {
                    let expected = if model.len() == CAPACITY { model.pop_front() } else { None };
                    model.push_back(v);
                    prop_assert_eq!(buffer.push_evicting(v), expected);
                }
                Op::Clear => {
                    model.clear();
                    buffer.clear();
                }
            }

            prop_assert_eq!(buffer.len(), model.len());
            for (i, expected) in model.iter().enumerate() {
                prop_assert_eq!(buffer[i], *expected);
            }
            prop_assert!(buffer.iter().eq(model.iter()));
            prop_assert_eq!(buffer.last(), model.back());
        }
    }

    #[test]
    fn prop_clear_always_empties(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let mut buffer: RingBuffer<i32, CAPACITY> = RingBuffer::new();
        for &v in &values {
            buffer.push(v);
        }
        buffer.clear();
        prop_assert_eq!(buffer.len(), 0);
        prop_assert!(buffer.is_empty());
        prop_assert!(!buffer.is_full());
        prop_assert!((0..CAPACITY).all(|i| *buffer.element_at(i) == 0));
    }

    #[test]
    fn prop_streaming_window_is_suffix(
        values in prop::collection::vec(any::<i32>(), 0..40),
        length in 1..=CAPACITY,
    ) {
        let mut buffer: RingBuffer<i32, CAPACITY> = RingBuffer::new();
        for &v in &values {
            buffer.push(v);
        }

        let config = WindowConfig::streaming(length);
        let mut out = [0; CAPACITY];
        let retained = values.len().min(CAPACITY);

        prop_assert_eq!(buffer.window_ready(&config), retained >= length);
        match buffer.read_window(&config, &mut out) {
            Ok(count) => {
                prop_assert_eq!(count, length);
                prop_assert_eq!(&out[..length], &values[values.len() - length..]);
            }
            Err(_) => prop_assert!(retained < length),
        }
    }
}
