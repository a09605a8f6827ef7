// FIFO queue over a circular buffer (SPSC = Single-Producer Single-Consumer)
pub mod fifo {
    pub mod buffer;
    pub mod buffer_impl;
    pub mod builder;
    pub mod error;
    pub use buffer::{RingBuffer, WriteObserver, DEFAULT_CAPACITY}; // re-export for stable path
    pub use builder::RingBufferBuilder;
    pub use error::RingBufferError;
}
pub mod debug {
    pub mod struct_debug;
}
