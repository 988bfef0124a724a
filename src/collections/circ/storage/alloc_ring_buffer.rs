use std::alloc::Layout;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, Index, IndexMut};
use std::ptr::NonNull;

use tracing::{debug, trace};

use super::{Global, SlotAlloc};
use crate::collections::circ::{Iter, IterMut, RingBuffer};
use crate::util::error::{CapacityOverflow, ResultExtension};

/// A [`RingBuffer`] which allocates its own slots on creation and releases them when dropped.
///
/// The inner buffer is available for reading through [`Deref`], while mutation goes through the
/// methods on AllocRingBuffer itself. This keeps the buffer tied to the memory it was created with,
/// so the right region is always returned to the allocator.
///
/// # Examples
/// ```
/// # use ringslot::collections::circ::AllocRingBuffer;
/// let mut ring = AllocRingBuffer::with_cap(3);
/// for i in 0..5 {
///     ring.push_back(i);
/// }
/// assert_eq!(ring.len(), 3);
/// assert!(ring.iter().eq(&[2, 3, 4]));
/// ```
pub struct AllocRingBuffer<T, A: SlotAlloc = Global> {
    // The 'static lifetime is a stand in for the lifetime of self. A mutable reference to the ring
    // is never handed out, so it can't escape or be swapped for one over other memory.
    pub(crate) ring: RingBuffer<'static, T>,
    pub(crate) alloc: A,
}

impl<T> AllocRingBuffer<T> {
    /// Creates an empty AllocRingBuffer with exactly `cap` slots, using the global allocator.
    ///
    /// # Panics
    /// Panics if the memory required exceeds [`isize::MAX`] bytes.
    pub fn with_cap(cap: usize) -> AllocRingBuffer<T> {
        Self::with_cap_in(cap, Global)
    }

    /// Creates an AllocRingBuffer with `cap` slots, filled from `iter`. If `iter` yields more than
    /// `cap` items, only the last `cap` of them are kept.
    ///
    /// # Panics
    /// Panics if the memory required exceeds [`isize::MAX`] bytes, or if `cap` is zero and `iter`
    /// isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::AllocRingBuffer;
    /// let ring = AllocRingBuffer::from_iter_with_cap("abcdef".chars(), 2);
    /// assert!(ring.iter().eq(&['e', 'f']));
    /// ```
    pub fn from_iter_with_cap<I: IntoIterator<Item = T>>(iter: I, cap: usize) -> AllocRingBuffer<T> {
        let mut ring = Self::with_cap(cap);
        ring.extend(iter);
        ring
    }
}

impl<T, A: SlotAlloc> AllocRingBuffer<T, A> {
    /// Creates an empty AllocRingBuffer with exactly `cap` slots, obtained from `alloc`.
    ///
    /// # Panics
    /// Panics if the memory required exceeds [`isize::MAX`] bytes.
    pub fn with_cap_in(cap: usize, alloc: A) -> AllocRingBuffer<T, A> {
        Self::try_with_cap_in(cap, alloc).throw()
    }

    /// Creates an empty AllocRingBuffer with exactly `cap` slots, obtained from `alloc`. Nothing is
    /// allocated for a capacity of zero or a zero-sized `T`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory required exceeds [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ringslot::collections::circ::{AllocRingBuffer, Global};
    /// assert!(AllocRingBuffer::<u64>::try_with_cap_in(usize::MAX, Global).is_err());
    /// assert!(AllocRingBuffer::<u64>::try_with_cap_in(16, Global).is_ok());
    /// ```
    pub fn try_with_cap_in(cap: usize, alloc: A) -> Result<AllocRingBuffer<T, A>, CapacityOverflow> {
        let layout = Self::make_layout(cap).inspect_err(|_| {
            debug!(capacity = cap, elem_size = size_of::<T>(), "rejected ring buffer capacity");
        })?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let ptr = alloc.allocate(layout).cast();
            trace!(capacity = cap, bytes = layout.size(), "allocated ring buffer storage");
            ptr
        };

        Ok(AllocRingBuffer {
            // SAFETY: ptr is either dangling for a zero-sized layout, or freshly allocated for
            // cap elements of T. It stays valid until self is dropped, and isn't accessed
            // elsewhere.
            ring: unsafe { RingBuffer::from_raw_parts(ptr, cap) },
            alloc,
        })
    }

    /// Returns a reference to the inner [`RingBuffer`], the same as dereferencing.
    pub fn buffer(&self) -> &RingBuffer<'_, T> {
        &self.ring
    }

    /// Returns a reference to the allocator that provided the slots.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// See [`RingBuffer::emplace_back`].
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.ring.emplace_back(make)
    }

    /// See [`RingBuffer::emplace_front`].
    pub fn emplace_front<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.ring.emplace_front(make)
    }

    /// See [`RingBuffer::push_back`].
    pub fn push_back(&mut self, value: T) {
        self.ring.push_back(value);
    }

    /// See [`RingBuffer::push_front`].
    pub fn push_front(&mut self, value: T) {
        self.ring.push_front(value);
    }

    /// See [`RingBuffer::pop_front`].
    pub fn pop_front(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    /// See [`RingBuffer::pop_back`].
    pub fn pop_back(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    /// See [`RingBuffer::pop_front_unchecked`].
    ///
    /// # Safety
    /// The AllocRingBuffer must contain at least one element.
    pub unsafe fn pop_front_unchecked(&mut self) -> T {
        // SAFETY: Upheld by the caller.
        unsafe { self.ring.pop_front_unchecked() }
    }

    /// See [`RingBuffer::pop_back_unchecked`].
    ///
    /// # Safety
    /// The AllocRingBuffer must contain at least one element.
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        // SAFETY: Upheld by the caller.
        unsafe { self.ring.pop_back_unchecked() }
    }

    /// See [`RingBuffer::clear`].
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// See [`RingBuffer::front_mut`].
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.ring.front_mut()
    }

    /// See [`RingBuffer::back_mut`].
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.ring.back_mut()
    }

    /// See [`RingBuffer::get_mut`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.ring.get_mut(index)
    }

    /// See [`RingBuffer::iter_mut`].
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.ring.iter_mut()
    }

    /// See [`RingBuffer::as_mut_slices`].
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        self.ring.as_mut_slices()
    }

    /// Swaps the contents, memory and allocator of self with `other`.
    pub fn swap(&mut self, other: &mut AllocRingBuffer<T, A>) {
        mem::swap(self, other);
    }

    /// Creates a deep copy of self with the same capacity, with slots obtained from `alloc`.
    ///
    /// # Panics
    /// Panics if the memory required exceeds [`isize::MAX`] bytes.
    pub fn clone_in<B: SlotAlloc>(&self, alloc: B) -> AllocRingBuffer<T, B>
    where
        T: Clone,
    {
        let mut ring = AllocRingBuffer::with_cap_in(self.cap(), alloc);
        for item in self.iter() {
            ring.push_back(item.clone());
        }
        ring
    }

    /// A helper function to create a [`Layout`] for `cap` slots of `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }
}

impl<T: Clone, A: SlotAlloc> AllocRingBuffer<T, A> {
    /// See [`RingBuffer::push_back_cloned`].
    pub fn push_back_cloned(&mut self, value: &T) {
        self.ring.push_back_cloned(value);
    }

    /// See [`RingBuffer::push_front_cloned`].
    pub fn push_front_cloned(&mut self, value: &T) {
        self.ring.push_front_cloned(value);
    }
}

impl<T, A: SlotAlloc> Drop for AllocRingBuffer<T, A> {
    fn drop(&mut self) {
        // SAFETY: The same layout was already created successfully during construction.
        let layout = unsafe { Self::make_layout(self.ring.cap()).unwrap_unchecked() };
        // Created before clearing, so the exact region that the ring reports is released even if
        // dropping an element panics.
        let _release = self
            .ring
            .data()
            .filter(|_| layout.size() != 0)
            .map(|data| Release {
                alloc: &self.alloc,
                ptr: data.cast(),
                layout,
            });

        self.ring.clear();
    }
}

/// Returns a block to its allocator when dropped.
struct Release<'r, A: SlotAlloc> {
    alloc: &'r A,
    ptr: NonNull<u8>,
    layout: Layout,
}

impl<'r, A: SlotAlloc> Drop for Release<'r, A> {
    fn drop(&mut self) {
        trace!(bytes = self.layout.size(), "released ring buffer storage");
        // SAFETY: Release is only created in AllocRingBuffer::drop, for the block that the
        // allocator provided with this layout, which the ring never uses again.
        unsafe { self.alloc.deallocate(self.ptr, self.layout) }
    }
}

impl<T, A: SlotAlloc> Deref for AllocRingBuffer<T, A> {
    type Target = RingBuffer<'static, T>;

    fn deref(&self) -> &Self::Target {
        &self.ring
    }
}

impl<T, A: SlotAlloc> Index<usize> for AllocRingBuffer<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.ring[index]
    }
}

impl<T, A: SlotAlloc> IndexMut<usize> for AllocRingBuffer<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.ring[index]
    }
}

impl<T, A: SlotAlloc> Extend<T> for AllocRingBuffer<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

impl<'b, T, A: SlotAlloc> IntoIterator for &'b AllocRingBuffer<T, A> {
    type Item = &'b T;

    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ring.iter()
    }
}

impl<'b, T, A: SlotAlloc> IntoIterator for &'b mut AllocRingBuffer<T, A> {
    type Item = &'b mut T;

    type IntoIter = IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ring.iter_mut()
    }
}

impl<T: Clone, A: SlotAlloc + Clone> Clone for AllocRingBuffer<T, A> {
    fn clone(&self) -> Self {
        self.clone_in(self.alloc.clone())
    }
}

impl<T: PartialEq, A: SlotAlloc, B: SlotAlloc> PartialEq<AllocRingBuffer<T, B>>
    for AllocRingBuffer<T, A>
{
    fn eq(&self, other: &AllocRingBuffer<T, B>) -> bool {
        self.ring == other.ring
    }
}

impl<T: Eq, A: SlotAlloc> Eq for AllocRingBuffer<T, A> {}

impl<T: Hash, A: SlotAlloc> Hash for AllocRingBuffer<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ring.hash(state);
    }
}

impl<T: Debug, A: SlotAlloc> Debug for AllocRingBuffer<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocRingBuffer")
            .field("ring", &self.ring)
            .finish_non_exhaustive()
    }
}

impl<T: Debug, A: SlotAlloc> Display for AllocRingBuffer<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.ring, f)
    }
}
