//! General-purpose collection types.
//!
//! # Purpose
//! So far this only holds circular collections, which I wrote to learn about constructing and
//! dropping values by hand inside memory that a collection doesn't own.

#[cfg(feature = "circ")]
pub mod circ;
