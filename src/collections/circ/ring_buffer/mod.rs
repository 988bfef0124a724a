//! A module containing [`RingBuffer`] and associated types.
//!
//! Borrowed iteration is provided by [`Iter`] and [`IterMut`], owned iteration by [`IntoIter`],
//! and [`Cursor`] offers begin / end style traversal that wraps around the buffer's slots.
//!
//! [`RingBuffer`] is also re-exported under the parent module.

mod cursor;
mod iter;
mod ring_buffer;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use ring_buffer::*;
