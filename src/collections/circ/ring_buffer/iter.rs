use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::RingBuffer;
use super::ring_buffer::{next_slot, offset_slot};
use crate::util::fmt::Entries;

impl<'a, T> IntoIterator for RingBuffer<'a, T> {
    type Item = T;

    type IntoIter = IntoIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            ring: self,
        }
    }
}

/// An owned iterator over the elements of a [`RingBuffer`], from front to back. The memory stays
/// borrowed until the iterator is dropped, at which point any remaining elements are dropped too.
pub struct IntoIter<'a, T> {
    // Popping from the held buffer already handles wrapping and the drop of leftovers.
    pub(crate) ring: RingBuffer<'a, T>,
}

impl<'a, T> Iterator for IntoIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, T> DoubleEndedIterator for IntoIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ring.pop_back()
    }
}

impl<'a, T> FusedIterator for IntoIter<'a, T> {}

impl<'a, T> ExactSizeIterator for IntoIter<'a, T> {
    fn len(&self) -> usize {
        self.ring.len()
    }
}

impl<'a, T: Debug> Debug for IntoIter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&Entries(self.ring.iter())).finish()
    }
}

impl<'b, 'a, T> IntoIterator for &'b RingBuffer<'a, T> {
    type Item = &'b T;

    type IntoIter = Iter<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the elements of a [`RingBuffer`], from front to back. See
/// [`RingBuffer::iter`].
pub struct Iter<'b, T> {
    // Rather than comparing slots, len counts the items left to yield, so a full window never
    // looks empty.
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) head: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'b T>,
}

impl<'b, T> Iterator for Iter<'b, T> {
    type Item = &'b T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: head is the slot of the front-most element that hasn't been yielded, which is
        // live for 'b because the buffer is borrowed immutably.
        let value = unsafe { self.buf.add(self.head).as_ref() };
        self.head = next_slot(self.head, self.cap);
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'b, T> DoubleEndedIterator for Iter<'b, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The newly decremented len is the offset of the back-most element that hasn't
        // been yielded.
        Some(unsafe { self.buf.add(offset_slot(self.head, self.len, self.cap)).as_ref() })
    }
}

impl<'b, T> FusedIterator for Iter<'b, T> {}

impl<'b, T> ExactSizeIterator for Iter<'b, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'b, T> Clone for Iter<'b, T> {
    fn clone(&self) -> Self {
        Iter {
            buf: self.buf,
            cap: self.cap,
            head: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<'b, T: Debug> Debug for Iter<'b, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&Entries(self.clone())).finish()
    }
}

// SAFETY: Iter only hands out shared references to T.
unsafe impl<'b, T: Sync> Send for Iter<'b, T> {}
// SAFETY: Iter only hands out shared references to T.
unsafe impl<'b, T: Sync> Sync for Iter<'b, T> {}

impl<'b, 'a, T> IntoIterator for &'b mut RingBuffer<'a, T> {
    type Item = &'b mut T;

    type IntoIter = IterMut<'b, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A borrowed iterator over mutable references to the elements of a [`RingBuffer`], from front
/// to back. See [`RingBuffer::iter_mut`].
pub struct IterMut<'b, T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) head: usize,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<&'b mut T>,
}

impl<'b, T> Iterator for IterMut<'b, T> {
    type Item = &'b mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        // SAFETY: head is live for 'b, and each slot is only yielded once, so no two mutable
        // references alias.
        let value = unsafe { self.buf.add(self.head).as_mut() };
        self.head = next_slot(self.head, self.cap);
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'b, T> DoubleEndedIterator for IterMut<'b, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The back-most unyielded slot is live and won't be yielded again.
        Some(unsafe { self.buf.add(offset_slot(self.head, self.len, self.cap)).as_mut() })
    }
}

impl<'b, T> FusedIterator for IterMut<'b, T> {}

impl<'b, T> ExactSizeIterator for IterMut<'b, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'b, T> Debug for IterMut<'b, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish_non_exhaustive()
    }
}

// SAFETY: IterMut behaves like a &mut [T], which is Send when T: Send.
unsafe impl<'b, T: Send> Send for IterMut<'b, T> {}
// SAFETY: IterMut behaves like a &mut [T], which is Sync when T: Sync.
unsafe impl<'b, T: Sync> Sync for IterMut<'b, T> {}
