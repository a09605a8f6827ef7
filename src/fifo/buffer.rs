// This is the storage layout and occupancy model for the FIFO queue

/// The number of slots used by the builder when no capacity is given.
/// This should be tuned per deployment.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Observer invoked after every successful write with a view of the raw
/// slot contents. Diagnostic only: the snapshot must not be used to drive
/// control flow, and installing an observer never changes buffer behavior.
pub type WriteObserver<T> = Box<dyn FnMut(&[Option<T>])>;

/// A fixed-capacity, single-producer/single-consumer FIFO queue over a
/// circular buffer.
///
/// Storage is allocated once at construction and never grows. Writes
/// advance a write cursor and reads advance a read cursor, both wrapping
/// modulo the capacity. Operations fail fast (`BufferFull`/`BufferEmpty`)
/// instead of waiting for space or data.
///
/// ### Occupancy design:
/// - **Cursors**: `read_pos` is the next slot to read, `write_pos` the next
///   slot to write. `read_pos == write_pos` on its own is ambiguous: the
///   buffer is either completely empty or completely full.
/// - **Flags**: `is_empty` and `is_full` are the tie-breaker. They are
///   updated incrementally on every mutation and always reflect the true
///   occupancy; they are never recomputed by scanning storage.
///
/// This struct is NOT thread safe. All mutation goes through `&mut self`;
/// a concurrent embedding must layer its own synchronization on top.
pub struct RingBuffer<T> {
    /// The slots. Entries outside the logical `[read_pos, write_pos)`
    /// window are `None`; a slot is cleared back to `None` when its value
    /// is read out.
    pub(crate) storage: Box<[Option<T>]>,

    /// The capacity of the buffer (number of slots). Fixed at construction.
    pub(crate) capacity: usize,

    /// Index of the next slot to be read.
    pub(crate) read_pos: usize,

    /// Index of the next slot to be written.
    pub(crate) write_pos: usize,

    /// True iff no element is stored. Checked before [`RingBuffer::read`].
    pub(crate) is_empty: bool,

    /// True iff every slot is occupied. Checked before [`RingBuffer::write`].
    pub(crate) is_full: bool,

    /// Optional diagnostic hook, see [`WriteObserver`].
    pub(crate) observer: Option<WriteObserver<T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::debug::struct_debug::debug_ring_buffer(self, f)
    }
}
