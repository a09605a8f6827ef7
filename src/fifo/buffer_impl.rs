use log::trace;

use super::buffer::RingBuffer;
use super::error::RingBufferError;

impl<T> RingBuffer<T> {
    /// Create a ring buffer with a fixed number of slots.
    ///
    /// The storage is allocated here, exactly once; no further allocation
    /// happens over the buffer's lifetime. The buffer starts empty with
    /// both cursors at slot 0.
    ///
    /// # Errors
    /// * `InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity(capacity));
        }

        let mut storage: Vec<Option<T>> = Vec::with_capacity(capacity);
        storage.resize_with(capacity, || None);

        Ok(Self {
            storage: storage.into_boxed_slice(),
            capacity,
            read_pos: 0,
            write_pos: 0,
            is_empty: true,
            is_full: false,
            observer: None,
        })
    }

    /// Store `value` at the write cursor and advance the cursor.
    ///
    /// # Returns
    /// * `Ok(())` if the value was stored
    /// * `Err(BufferFull)` if every slot is occupied; cursors and flags are
    ///   left untouched and `value` is dropped
    pub fn write(&mut self, value: T) -> Result<(), RingBufferError> {
        if self.is_full {
            return Err(RingBufferError::BufferFull);
        }

        self.storage[self.write_pos] = Some(value);
        self.write_pos = (self.write_pos + 1) % self.capacity;
        // The write cursor catching up to the read cursor means the last
        // free slot was just consumed.
        self.is_full = self.read_pos == self.write_pos;
        self.is_empty = false;
        trace!(
            "write: read_pos={} write_pos={} full={}",
            self.read_pos,
            self.write_pos,
            self.is_full
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&self.storage);
        }
        Ok(())
    }

    /// Take the value at the read cursor out of the buffer and advance the
    /// cursor.
    ///
    /// The slot is cleared back to `None` so that ownership of the element
    /// leaves the buffer the moment it is handed to the caller. For `Copy`
    /// element types this is pure housekeeping.
    ///
    /// # Returns
    /// * `Ok(value)` with the oldest stored element
    /// * `Err(BufferEmpty)` if nothing is stored; the buffer is left untouched
    pub fn read(&mut self) -> Result<T, RingBufferError> {
        if self.is_empty {
            return Err(RingBufferError::BufferEmpty);
        }

        let value = self.storage[self.read_pos]
            .take()
            .expect("occupied slot holds a value");
        self.read_pos = (self.read_pos + 1) % self.capacity;
        // Both cursors matching after a read means everything written has
        // been consumed.
        self.is_empty = self.read_pos == self.write_pos;
        self.is_full = false;
        trace!(
            "read: read_pos={} write_pos={} empty={}",
            self.read_pos,
            self.write_pos,
            self.is_empty
        );
        Ok(value)
    }

    /// True when every slot is occupied; should be checked before
    /// [`RingBuffer::write`].
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// True when no element is stored; should be checked before
    /// [`RingBuffer::read`].
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Returns the number of slots fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the logical number of stored elements.
    ///
    /// Derived from the cursors and the occupancy flags; the count is never
    /// stored separately.
    pub fn len(&self) -> usize {
        if self.is_full {
            self.capacity
        } else {
            (self.write_pos + self.capacity - self.read_pos) % self.capacity
        }
    }

    /// Raw view of the slots, including cleared `None` entries.
    ///
    /// Diagnostic only. Where occupied slots sit inside this slice depends
    /// on cursor history and is not a stable contract.
    pub fn debug_contents(&self) -> &[Option<T>] {
        &self.storage
    }
}
