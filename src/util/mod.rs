pub mod error;
pub mod fmt;
pub mod panic;
pub mod slot;
pub mod testing;
