use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut, Range};
use std::ptr::NonNull;
use std::slice;

use super::{Cursor, Iter, IterMut};
use crate::util::error::{IndexOutOfBounds, ResultExtension, ZeroCapacity};
use crate::util::fmt::Entries;
use crate::util::slot;

/// A fixed-capacity circular buffer which constructs its elements inside memory that it borrows,
/// rather than owns.
///
/// The memory is supplied on construction, either as a slice of [`MaybeUninit<T>`] (see
/// [`RingBuffer::from_slots`]) or as a raw pointer (see [`RingBuffer::from_raw_parts`]). The
/// buffer never allocates or deallocates, it only tracks which of the slots currently hold a live
/// `T` and drops exactly those when cleared or dropped. For a buffer which manages its own memory,
/// see [`AllocRingBuffer`](crate::collections::circ::AllocRingBuffer).
///
/// Inserting into a full buffer evicts the element at the opposite end: pushing to the back drops
/// the front and pushing to the front drops the back. The length never exceeds the capacity.
///
/// RingBuffer isn't internally synchronized. It is [`Send`] and [`Sync`] when `T` is, but
/// concurrent mutation requires external locking. Any mutation invalidates outstanding iterators
/// and [`Cursor`]s, which the borrow checker enforces.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingBuffer.
///
/// | Method | Complexity |
/// |-|-|
/// | `push_back` / `push_front` | `O(1)` |
/// | `emplace_back` / `emplace_front` | `O(1)` |
/// | `pop_back` / `pop_front` | `O(1)` |
/// | `get` | `O(1)` |
/// | `len` / `cap` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `swap` | `O(1)` |
pub struct RingBuffer<'a, T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    /// The slot holding the front element, when non-empty.
    pub(crate) begin: usize,
    /// The slot that the next element pushed to the back is written to.
    pub(crate) end: usize,
    pub(crate) len: usize,
    // Borrows the memory for 'a, and owns the live elements within it.
    pub(crate) _phantom: PhantomData<(&'a mut (), T)>,
}

impl<'a, T> RingBuffer<'a, T> {
    /// Creates a null RingBuffer, which has no memory and a capacity of zero. Attempting to insert
    /// into a null buffer panics.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// let ring: RingBuffer<u8> = RingBuffer::null();
    /// assert_eq!(ring.cap(), 0);
    /// assert!(ring.data().is_none());
    /// ```
    pub const fn null() -> RingBuffer<'a, T> {
        RingBuffer {
            buf: NonNull::dangling(),
            cap: 0,
            begin: 0,
            end: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates an empty RingBuffer over the provided slots, using each of them for one element.
    /// Any values already in the slots are ignored and never dropped.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 3];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// for i in 1..=4 {
    ///     ring.push_back(i);
    /// }
    /// assert!(ring.iter().eq(&[2, 3, 4]));
    /// ```
    pub fn from_slots(slots: &'a mut [MaybeUninit<T>]) -> RingBuffer<'a, T> {
        let cap = slots.len();
        // SAFETY: A mutable slice is valid for reads and writes of all of its elements for 'a,
        // and MaybeUninit<T> has the same layout as T.
        unsafe { Self::from_raw_parts(NonNull::from(slots).cast(), cap) }
    }

    /// Creates an empty RingBuffer over `cap` slots of raw memory starting at `ptr`.
    ///
    /// # Safety
    /// - `ptr` must be properly aligned for `T` and valid for reads and writes of `cap` elements.
    /// - The memory must remain valid, and must not be accessed other than through the RingBuffer,
    ///   for `'a`.
    ///
    /// The memory is never deallocated by the RingBuffer. Use [`RingBuffer::data`] and
    /// [`RingBuffer::cap`] to release it after the buffer has been cleared.
    pub const unsafe fn from_raw_parts(ptr: NonNull<T>, cap: usize) -> RingBuffer<'a, T> {
        RingBuffer {
            buf: ptr,
            cap,
            begin: 0,
            end: 0,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of live elements in the RingBuffer.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the RingBuffer contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the RingBuffer holds as many elements as it has slots, meaning that the next
    /// insertion will evict an element. A null buffer is always full.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 2];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// ring.push_back('a');
    /// assert!(!ring.is_full());
    /// ring.push_back('b');
    /// assert!(ring.is_full());
    /// ```
    pub const fn is_full(&self) -> bool {
        self.len == self.cap
    }

    /// Returns the number of slots in the RingBuffer. This is fixed for the buffer's lifetime.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the maximum number of elements the RingBuffer can hold, which is always its
    /// capacity.
    pub const fn max_len(&self) -> usize {
        self.cap()
    }

    /// Returns a pointer to the start of the underlying memory, or `None` for a buffer without any
    /// slots.
    ///
    /// The first slot doesn't necessarily hold the front element once the window has wrapped
    /// around. Use [`RingBuffer::iter`] or [`RingBuffer::as_slices`] for ordered access.
    pub const fn data(&self) -> Option<NonNull<T>> {
        if self.cap == 0 {
            None
        } else {
            Some(self.buf)
        }
    }

    /// Constructs an element with `make` and pushes it onto the back of the RingBuffer, returning
    /// a reference to it.
    ///
    /// If the buffer is full, the front element is dropped before `make` is invoked, so the new
    /// element takes its slot. Should `make` panic, the buffer remains valid without the evicted
    /// element.
    ///
    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 4];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// let name = ring.emplace_back(|| String::from("ring"));
    /// name.push_str("slot");
    /// assert_eq!(ring.back().map(String::as_str), Some("ringslot"));
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.check_cap();

        if self.is_full() {
            self.evict_front();
        }

        let target = self.slot_ptr(self.end);
        // SAFETY: The slot at end is always vacant while the buffer isn't full, which was just
        // ensured by eviction.
        let value = unsafe { slot::write_at(target, make()) };
        self.end = next_slot(self.end, self.cap);
        self.len += 1;
        value
    }

    /// Constructs an element with `make` and pushes it onto the front of the RingBuffer, returning
    /// a reference to it.
    ///
    /// If the buffer is full, the back element is dropped before `make` is invoked.
    ///
    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    pub fn emplace_front<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.check_cap();

        if self.is_full() {
            self.evict_back();
        }

        let new_begin = prev_slot(self.begin, self.cap);
        let target = self.slot_ptr(new_begin);
        // SAFETY: The slot preceding begin is vacant while the buffer isn't full.
        let value = unsafe { slot::write_at(target, make()) };
        self.begin = new_begin;
        self.len += 1;
        value
    }

    /// Pushes `value` onto the back of the RingBuffer, dropping the front element if the buffer is
    /// full.
    ///
    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 3];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// assert!(ring.iter().eq(&[2, 3, 4]));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.emplace_back(|| value);
    }

    /// Pushes `value` onto the front of the RingBuffer, dropping the back element if the buffer is
    /// full.
    ///
    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    pub fn push_front(&mut self, value: T) {
        self.emplace_front(|| value);
    }

    /// Removes the front element and returns it, or `None` if the RingBuffer is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 3];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// ring.extend([1, 2, 3]);
    /// assert_eq!(ring.pop_front(), Some(1));
    /// assert_eq!(ring.pop_front(), Some(2));
    /// assert_eq!(ring.pop_front(), Some(3));
    /// assert_eq!(ring.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let target = self.slot_ptr(self.begin);
        self.begin = next_slot(self.begin, self.cap);
        self.len -= 1;
        // SAFETY: The front slot was live and is no longer part of the window.
        Some(unsafe { slot::take_at(target) })
    }

    /// Removes the back element and returns it, or `None` if the RingBuffer is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.end = prev_slot(self.end, self.cap);
        self.len -= 1;
        // SAFETY: The slot preceding end was live and is no longer part of the window.
        Some(unsafe { slot::take_at(self.slot_ptr(self.end)) })
    }

    /// Removes the front element without checking that the RingBuffer is non-empty.
    ///
    /// # Safety
    /// The RingBuffer must contain at least one element. Debug builds panic rather than invoking
    /// undefined behavior.
    pub unsafe fn pop_front_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_front_unchecked called on an empty RingBuffer");
        // SAFETY: The caller guarantees that the buffer isn't empty.
        unsafe { self.pop_front().unwrap_unchecked() }
    }

    /// Removes the back element without checking that the RingBuffer is non-empty.
    ///
    /// # Safety
    /// The RingBuffer must contain at least one element. Debug builds panic rather than invoking
    /// undefined behavior.
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_back_unchecked called on an empty RingBuffer");
        // SAFETY: The caller guarantees that the buffer isn't empty.
        unsafe { self.pop_back().unwrap_unchecked() }
    }

    /// Drops all elements in the RingBuffer and rewinds it to the first slot. The capacity is
    /// unaffected.
    ///
    /// If dropping an element panics, the remaining elements are still dropped before the panic
    /// propagates, and the RingBuffer is left empty.
    pub fn clear(&mut self) {
        let (head, tail) = self.runs();
        // Forget the elements first, so that a panicking drop leaks instead of double dropping.
        self.begin = 0;
        self.end = 0;
        self.len = 0;

        if head.is_empty() {
            return;
        }

        // SAFETY: Both runs are within the allocation and held live elements, which are now
        // outside of the window. The guard destroys the tail even if a drop in the head panics.
        unsafe {
            let _tail = slot::DestroyRunOnDrop::new(self.slot_ptr(tail.start), tail.len());
            slot::destroy_run(self.slot_ptr(head.start), head.len());
        }
    }

    /// Swaps the contents, memory and capacity of self with `other`, without touching any elements.
    pub fn swap(&mut self, other: &mut RingBuffer<'a, T>) {
        mem::swap(self, other);
    }

    /// Returns a reference to the front element, or `None` if the RingBuffer is empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or `None` if the RingBuffer is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the back element, or `None` if the RingBuffer is empty.
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Returns a mutable reference to the back element, or `None` if the RingBuffer is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.checked_sub(1)?)
    }

    /// Returns a reference to the front element without checking that the RingBuffer is
    /// non-empty.
    ///
    /// # Safety
    /// The RingBuffer must contain at least one element.
    pub unsafe fn front_unchecked(&self) -> &T {
        debug_assert!(!self.is_empty(), "front_unchecked called on an empty RingBuffer");
        // SAFETY: The caller guarantees that the front slot is live.
        unsafe { self.slot_ptr(self.begin).as_ref() }
    }

    /// Returns a reference to the back element without checking that the RingBuffer is non-empty.
    ///
    /// # Safety
    /// The RingBuffer must contain at least one element.
    pub unsafe fn back_unchecked(&self) -> &T {
        debug_assert!(!self.is_empty(), "back_unchecked called on an empty RingBuffer");
        // SAFETY: The caller guarantees that the slot before end is live.
        unsafe { self.slot_ptr(prev_slot(self.end, self.cap)).as_ref() }
    }

    /// Returns a reference to the element `index` positions from the front, or `None` if it is out
    /// of bounds.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 3];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// ring.extend(['a', 'b', 'c', 'd']);
    /// assert_eq!(ring.get(0), Some(&'b'));
    /// assert_eq!(ring.get(2), Some(&'d'));
    /// assert_eq!(ring.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: All slots within len of begin are live.
            Some(unsafe { self.slot_ptr(offset_slot(self.begin, index, self.cap)).as_ref() })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element `index` positions from the front, or `None` if
    /// it is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: All slots within len of begin are live, and self is borrowed mutably.
            Some(unsafe { self.slot_ptr(offset_slot(self.begin, index, self.cap)).as_mut() })
        } else {
            None
        }
    }

    /// Returns the elements of the RingBuffer as two slices, which together hold all elements in
    /// order. The second slice is only non-empty when the window wraps past the last slot.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::RingBuffer;
    /// # use std::mem::MaybeUninit;
    /// let mut slots = [const { MaybeUninit::uninit() }; 3];
    /// let mut ring = RingBuffer::from_slots(&mut slots);
    /// ring.extend([1, 2, 3]);
    /// assert_eq!(ring.as_slices(), (&[1, 2, 3][..], &[][..]));
    /// ring.push_back(4);
    /// assert_eq!(ring.as_slices(), (&[2, 3][..], &[4][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (head, tail) = self.runs();
        // SAFETY: Both runs contain only live elements within the allocation.
        unsafe {
            (
                slice::from_raw_parts(self.slot_ptr(head.start).as_ptr(), head.len()),
                slice::from_raw_parts(self.slot_ptr(tail.start).as_ptr(), tail.len()),
            )
        }
    }

    /// Returns the elements of the RingBuffer as two mutable slices. See
    /// [`RingBuffer::as_slices`].
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (head, tail) = self.runs();
        // SAFETY: Both runs contain only live elements within the allocation and never overlap.
        unsafe {
            (
                slice::from_raw_parts_mut(self.slot_ptr(head.start).as_ptr(), head.len()),
                slice::from_raw_parts_mut(self.slot_ptr(tail.start).as_ptr(), tail.len()),
            )
        }
    }

    /// Returns an iterator over references to the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: self.buf,
            cap: self.cap,
            head: self.begin,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to the elements, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            buf: self.buf,
            cap: self.cap,
            head: self.begin,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns a [`Cursor`] pointing at the front element.
    pub fn cursor_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.begin, false)
    }

    /// Returns a [`Cursor`] pointing one past the back element.
    ///
    /// When the buffer is full (and not null), this position shares its slot with
    /// [`RingBuffer::cursor_begin`], so the returned cursor compares unequal to a cursor in that
    /// slot exactly once. See [`Cursor`] for details.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.end, self.is_full() && !self.is_empty())
    }
}

impl<'a, T: Clone> RingBuffer<'a, T> {
    /// Pushes a clone of `value` onto the back of the RingBuffer, dropping the front element if the
    /// buffer is full.
    ///
    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    pub fn push_back_cloned(&mut self, value: &T) {
        self.emplace_back(|| value.clone());
    }

    /// Pushes a clone of `value` onto the front of the RingBuffer, dropping the back element if
    /// the buffer is full.
    ///
    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    pub fn push_front_cloned(&mut self, value: &T) {
        self.emplace_front(|| value.clone());
    }
}

impl<'a, T> RingBuffer<'a, T> {
    /// Returns a pointer to the provided slot.
    pub(crate) const fn slot_ptr(&self, slot: usize) -> NonNull<T> {
        // SAFETY: Slots are always less than cap (or zero), so the offset is within the memory
        // provided on construction and can't overflow isize::MAX.
        unsafe { self.buf.add(slot) }
    }

    /// Returns true if the provided slot currently holds a live element.
    pub(crate) const fn is_live(&self, slot: usize) -> bool {
        if slot >= self.cap {
            return false;
        }

        let offset = if slot >= self.begin {
            slot - self.begin
        } else {
            slot + self.cap - self.begin
        };
        offset < self.len
    }

    /// Returns the ranges of slots holding live elements, in order. The second range is only
    /// non-empty if the window wraps.
    pub(crate) fn runs(&self) -> (Range<usize>, Range<usize>) {
        let head_len = self.len.min(self.cap - self.begin);
        (
            self.begin..(self.begin + head_len),
            0..(self.len - head_len),
        )
    }

    fn evict_front(&mut self) {
        let target = self.slot_ptr(self.begin);
        self.begin = next_slot(self.begin, self.cap);
        self.len -= 1;
        // SAFETY: The front slot was live and is no longer part of the window.
        unsafe { slot::destroy_at(target) }
    }

    fn evict_back(&mut self) {
        self.end = prev_slot(self.end, self.cap);
        self.len -= 1;
        // SAFETY: The back slot was live and is no longer part of the window.
        unsafe { slot::destroy_at(self.slot_ptr(self.end)) }
    }

    /// # Panics
    /// Panics if the RingBuffer has zero capacity.
    fn check_cap(&self) {
        if self.cap == 0 {
            Err(ZeroCapacity).throw()
        }
    }
}

/// Returns the slot after `slot`, wrapping to the first slot after the last.
pub(crate) const fn next_slot(slot: usize, cap: usize) -> usize {
    if slot + 1 == cap { 0 } else { slot + 1 }
}

/// Returns the slot before `slot`, wrapping to the last slot before the first.
pub(crate) const fn prev_slot(slot: usize, cap: usize) -> usize {
    if slot == 0 { cap - 1 } else { slot - 1 }
}

/// Returns the slot `offset` positions after `slot`. Requires `slot < cap` and `offset <= cap`.
pub(crate) const fn offset_slot(slot: usize, offset: usize, cap: usize) -> usize {
    let target = slot + offset;
    if target >= cap { target - cap } else { target }
}

impl<'a, T> Default for RingBuffer<'a, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a, T> Drop for RingBuffer<'a, T> {
    fn drop(&mut self) {
        // Only the elements are dropped, the memory belongs to whoever provided it.
        self.clear();
    }
}

impl<'a, T> Index<usize> for RingBuffer<'a, T> {
    type Output = T;

    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len;
        self.get(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<'a, T> IndexMut<usize> for RingBuffer<'a, T> {
    /// # Panics
    /// Panics if the provided index is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len;
        self.get_mut(index).ok_or(IndexOutOfBounds { index, len }).throw()
    }
}

impl<'a, T> Extend<T> for RingBuffer<'a, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, 'b, T: Copy + 'b> Extend<&'b T> for RingBuffer<'a, T> {
    fn extend<I: IntoIterator<Item = &'b T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(*item);
        }
    }
}

// SAFETY: RingBuffer uniquely borrows its memory and owns the elements within it, so it can be sent
// to another thread when T: Send.
unsafe impl<'a, T: Send> Send for RingBuffer<'a, T> {}
// SAFETY: RingBuffer's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that RingBuffer<T> can safely implement Sync when T: Sync.
unsafe impl<'a, T: Sync> Sync for RingBuffer<'a, T> {}

impl<'a, 'b, T: PartialEq> PartialEq<RingBuffer<'b, T>> for RingBuffer<'a, T> {
    fn eq(&self, other: &RingBuffer<'b, T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a, T: Eq> Eq for RingBuffer<'a, T> {}

impl<'a, 'b, T: PartialOrd> PartialOrd<RingBuffer<'b, T>> for RingBuffer<'a, T> {
    fn partial_cmp(&self, other: &RingBuffer<'b, T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<'a, T: Ord> Ord for RingBuffer<'a, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<'a, T: Hash> Hash for RingBuffer<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the same way as a slice would, regardless of where the window wraps.
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<'a, T: Debug> Debug for RingBuffer<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("contents", &Entries(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<'a, T: Debug> Display for RingBuffer<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
