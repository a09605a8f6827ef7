use std::fmt;

use crate::fifo::buffer::RingBuffer;

/// Debug function for RingBuffer
///
/// Shows:
/// - Capacity and logical occupancy
/// - Both cursors and both occupancy flags
/// - The raw slot contents
pub fn debug_ring_buffer<T: fmt::Debug>(
    buffer: &RingBuffer<T>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct("RingBuffer")
        .field("capacity", &buffer.capacity())
        .field("len", &buffer.len())
        .field("read_pos", &buffer.read_pos)
        .field("write_pos", &buffer.write_pos)
        .field("is_empty", &buffer.is_empty())
        .field("is_full", &buffer.is_full())
        .field("storage", &buffer.debug_contents())
        .finish()
}

/// Render the raw slot contents on a single line, e.g.
/// `[None, Some(3), Some(4)]`. Used by tests and observers that want the
/// movement of values through the slots made visible.
pub fn render_contents<T: fmt::Debug>(buffer: &RingBuffer<T>) -> String {
    format!("{:?}", buffer.debug_contents())
}
