//! Circular collection types, which reuse a fixed number of slots rather than growing.
//!
//! # Purpose
//! [`RingBuffer`] is the core type here. It doesn't own any memory, instead constructing elements
//! inside slots that are lent to it, whether they live on the stack, in an arena or on the heap.
//! [`AllocRingBuffer`] layers ownership on top, acquiring slots from a [`SlotAlloc`] and composing
//! a [`RingBuffer`] over them.
//!
//! # Method
//! The window of live elements is tracked as a pair of slot indices and a length. Moving between
//! slots compares against the capacity and resets, so no division is ever required.

pub mod ring_buffer;
#[cfg(feature = "alloc")]
pub mod storage;

#[doc(inline)]
pub use ring_buffer::{Cursor, IntoIter, Iter, IterMut, RingBuffer};
#[doc(inline)]
#[cfg(feature = "alloc")]
pub use storage::{AllocRingBuffer, Global, SlotAlloc};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ZeroCapacity};
