use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::RingBuffer;
use super::ring_buffer::{next_slot, prev_slot};

/// A bidirectional position within a [`RingBuffer`], for traversal in the style of a pair of begin
/// and end iterators. See [`RingBuffer::cursor_begin`] and [`RingBuffer::cursor_end`].
///
/// Moving a Cursor wraps around the slots of the buffer. When a buffer is full, the position one
/// past its back element is the same slot as its front element, so comparing slots alone would
/// make the whole range look empty. To resolve this, the end Cursor of a full buffer is created
/// with a one-shot flag: the first time it is compared against a Cursor in the same slot, they are
/// unequal (a full lap remains), and every comparison afterwards compares slots as usual.
///
/// ```
/// # use ringslot::collections::circ::RingBuffer;
/// # use std::mem::MaybeUninit;
/// let mut slots = [const { MaybeUninit::uninit() }; 3];
/// let mut ring = RingBuffer::from_slots(&mut slots);
/// ring.extend(['a', 'b', 'c']);
///
/// let end = ring.cursor_end();
/// let mut cursor = ring.cursor_begin();
/// let mut visited = String::new();
/// while cursor != end {
///     visited.push(*cursor.get().unwrap());
///     cursor.move_next();
/// }
/// assert_eq!(visited, "abc");
/// ```
///
/// Because a Cursor borrows its buffer, the buffer can't be mutated while a Cursor exists. Prefer
/// [`RingBuffer::iter`] for plain iteration.
pub struct Cursor<'b, T> {
    pub(crate) ring: &'b RingBuffer<'b, T>,
    pub(crate) slot: usize,
    pub(crate) compare_twice: Cell<bool>,
}

impl<'b, T> Cursor<'b, T> {
    pub(crate) const fn new(ring: &'b RingBuffer<'b, T>, slot: usize, compare_twice: bool) -> Self {
        Cursor {
            ring,
            slot,
            compare_twice: Cell::new(compare_twice),
        }
    }

    /// Returns the slot that this Cursor points to, as an offset from the start of the buffer's
    /// memory.
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Returns true if this Cursor will compare unequal to the next Cursor in the same slot.
    pub fn is_lap_pending(&self) -> bool {
        self.compare_twice.get()
    }

    /// Returns the element in the current slot, or `None` if the slot is outside of the buffer's
    /// window (such as the end of a buffer that isn't full).
    pub fn get(&self) -> Option<&'b T> {
        if self.ring.is_live(self.slot) {
            // SAFETY: The slot has just been checked to be live, and the buffer is borrowed for 'b.
            Some(unsafe { self.ring.slot_ptr(self.slot).as_ref() })
        } else {
            None
        }
    }

    /// Returns the element in the current slot without checking that it is live.
    ///
    /// # Safety
    /// The Cursor must point to a live element, which isn't the case for the end position of a
    /// buffer that isn't full.
    pub unsafe fn get_unchecked(&self) -> &'b T {
        debug_assert!(self.ring.is_live(self.slot), "Cursor dereferenced outside of the window");
        // SAFETY: The caller guarantees that the slot is live.
        unsafe { self.ring.slot_ptr(self.slot).as_ref() }
    }

    /// Moves the Cursor to the next slot, wrapping from the last slot to the first.
    pub fn move_next(&mut self) -> &mut Self {
        if self.ring.cap() != 0 {
            self.slot = next_slot(self.slot, self.ring.cap());
        }
        self
    }

    /// Moves the Cursor to the previous slot, wrapping from the first slot to the last.
    pub fn move_prev(&mut self) -> &mut Self {
        if self.ring.cap() != 0 {
            self.slot = prev_slot(self.slot, self.ring.cap());
        }
        self
    }

    /// Moves the Cursor to the next slot, returning a copy of it from before the move.
    pub fn post_next(&mut self) -> Self {
        let before = self.clone();
        self.move_next();
        before
    }

    /// Moves the Cursor to the previous slot, returning a copy of it from before the move.
    pub fn post_prev(&mut self) -> Self {
        let before = self.clone();
        self.move_prev();
        before
    }
}

impl<'b, T> Clone for Cursor<'b, T> {
    fn clone(&self) -> Self {
        Cursor::new(self.ring, self.slot, self.compare_twice.get())
    }
}

impl<'b, T> PartialEq for Cursor<'b, T> {
    /// Compares the slots of two Cursors over the same buffer. If exactly one of them still has a
    /// lap pending, the comparison is unequal and uses up that lap. Two Cursors which both have a
    /// lap pending are the same end position, so they compare equal and keep their laps.
    fn eq(&self, other: &Self) -> bool {
        if !ptr::eq(self.ring, other.ring) || self.slot != other.slot {
            return false;
        }

        match (self.compare_twice.get(), other.compare_twice.get()) {
            (true, false) => {
                self.compare_twice.set(false);
                false
            },
            (false, true) => {
                other.compare_twice.set(false);
                false
            },
            // Two end cursors are always the same position.
            _ => true,
        }
    }
}

impl<'b, T> Debug for Cursor<'b, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("slot", &self.slot)
            .field("compare_twice", &self.compare_twice.get())
            .finish_non_exhaustive()
    }
}
