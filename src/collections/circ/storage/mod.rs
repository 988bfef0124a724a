//! A module containing [`AllocRingBuffer`], which owns the memory behind a
//! [`RingBuffer`](super::RingBuffer), along with the [`SlotAlloc`] trait it allocates through.
//!
//! [`AllocRingBuffer`] is also re-exported under the parent module.

mod alloc_ring_buffer;
mod slot_alloc;

pub use alloc_ring_buffer::*;
pub use slot_alloc::*;
