use std::error::Error;
use std::fmt;
use std::io;

/// Precondition violations signalled by [`super::buffer::RingBuffer`].
///
/// These are fail-fast contract checks, not transient conditions: the
/// buffer never retries, queues or waits, and its state is unchanged when
/// one of these is returned. Embedding systems are expected to treat
/// `BufferFull`/`BufferEmpty` as flow-control signals (backpressure,
/// polling) rather than catastrophic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// No free slot exists; the write stored nothing.
    BufferFull,
    /// No element exists; the read produced nothing.
    BufferEmpty,
    /// Construction was asked for a buffer with no slots. Carries the
    /// rejected capacity.
    InvalidCapacity(usize),
}

impl fmt::Display for RingBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferFull => write!(f, "buffer is full, no room to write"),
            Self::BufferEmpty => write!(f, "buffer is empty, nothing to read"),
            Self::InvalidCapacity(requested) => {
                write!(f, "capacity must be greater than zero (requested {requested})")
            }
        }
    }
}

impl Error for RingBufferError {}

impl From<RingBufferError> for io::Error {
    fn from(err: RingBufferError) -> Self {
        let kind = match err {
            // Flow-control signals for callers embedding the buffer in an
            // I/O pipeline.
            RingBufferError::BufferFull | RingBufferError::BufferEmpty => io::ErrorKind::WouldBlock,
            RingBufferError::InvalidCapacity(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
