use super::buffer::{RingBuffer, WriteObserver, DEFAULT_CAPACITY};
use super::error::RingBufferError;

/// Configures and constructs a [`RingBuffer`].
///
/// The plain [`RingBuffer::new`] constructor covers the common case; the
/// builder exists for embeddings that also want a diagnostic observer
/// installed.
pub struct RingBufferBuilder<T> {
    capacity: usize,
    observer: Option<WriteObserver<T>>,
}

impl<T> Default for RingBufferBuilder<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            observer: None,
        }
    }
}

impl<T> RingBufferBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Install a diagnostic hook invoked after every successful write with
    /// a snapshot view of the raw slot contents.
    pub fn with_observer(mut self, observer: impl FnMut(&[Option<T>]) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// # Errors
    /// * `InvalidCapacity` if the configured capacity is zero.
    pub fn build(self) -> Result<RingBuffer<T>, RingBufferError> {
        let mut buffer = RingBuffer::new(self.capacity)?;
        buffer.observer = self.observer;
        Ok(buffer)
    }
}
