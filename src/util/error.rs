use derive_more::{Display, Error};

/// An index was used that doesn't refer to a live element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for ring buffer with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An element was inserted into a ring buffer without any slots, such as a null buffer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cannot insert into a ring buffer with zero capacity!")]
pub struct ZeroCapacity;

/// The memory required for the requested number of slots exceeds [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

pub(crate) trait ResultExtension<T> {
    /// Similar to [`Result::unwrap`], but panics with the message of the error itself rather than
    /// its debug representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: std::error::Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
