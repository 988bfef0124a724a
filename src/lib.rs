//! This crate is a small library of low-level collections, built around a non-owning ring buffer.
//!
//! # Purpose
//! A [`RingBuffer`](collections::circ::RingBuffer) keeps a fixed number of elements, evicting the
//! oldest one at the opposite end when a new one is pushed into a full buffer. Unlike most
//! collections, it never allocates. It borrows a block of slots and constructs elements inside
//! them, which means that the same logic works over a stack array, an arena or the heap. An owning
//! [`AllocRingBuffer`](collections::circ::AllocRingBuffer) is layered on top for the common case.
//!
//! # Error Handling
//! Most misuse is either impossible or reported through return values: popping from an empty
//! buffer returns [`None`], and cursors and iterators borrow their buffer so they can't be
//! invalidated by a mutation. Where panicking is more ergonomic, such as indexing out of bounds or
//! pushing into a buffer with no slots, the panic message comes from a strongly typed error that
//! implements [`Error`](std::error::Error).
//!
//! There are also `unsafe` unchecked variants of some accessors for hot paths. Misusing them is
//! undefined behavior, although debug builds catch it with an assertion instead.
//!
//! # Features
//! - `circ`: The [`circ`](collections::circ) module and [`RingBuffer`](collections::circ::RingBuffer).
//! - `alloc`: The owning [`AllocRingBuffer`](collections::circ::AllocRingBuffer), which also emits
//!   `tracing` events when it acquires and releases memory.
//!
//! Both are enabled by default.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
