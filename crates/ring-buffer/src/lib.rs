//! Fixed-Capacity Ring Buffer
//!
//! Provides an allocation-free sliding window over sampled values. Samples
//! are pushed one at a time; once the buffer is full each push overwrites
//! the oldest sample. Consumers read the window by index relative to the
//! oldest retained sample, or copy out the most recent samples to assemble
//! a feature vector.
//!
//! ```
//! use ring_buffer::RingBuffer;
//!
//! let mut buffer: RingBuffer<i32, 4> = RingBuffer::new();
//! for v in 1..=5 {
//!     buffer.push(v);
//! }
//! assert_eq!(buffer.len(), 4);
//! assert_eq!(buffer[0], 2);
//! assert_eq!(buffer[3], 5);
//! ```

mod buffer;
mod error;
mod window;

pub use buffer::{Iter, RingBuffer};
pub use error::RingBufferError;
pub use window::{WindowConfig, DEFAULT_WINDOW_LENGTH};

/// Default sample window capacity
pub const DEFAULT_CAPACITY: usize = 128;

/// Sensor sample window with the default capacity
pub type SampleBuffer = RingBuffer<f32, DEFAULT_CAPACITY>;
