//! Primitives for constructing and destroying values inside slots of borrowed, possibly
//! uninitialized memory. A slot is a properly aligned [`NonNull<T>`] which the caller tracks as
//! either live or vacant.

use std::ptr::{self, NonNull};

/// Moves `value` into the vacant `slot`, returning a reference to the now live element.
///
/// # Safety
/// `slot` must be valid for writes and properly aligned. Any value previously held in the slot is
/// overwritten without being dropped, so the slot should be vacant.
pub(crate) unsafe fn write_at<'a, T>(slot: NonNull<T>, value: T) -> &'a mut T {
    // SAFETY: Validity and alignment are upheld by the caller.
    unsafe {
        slot.write(value);
        &mut *slot.as_ptr()
    }
}

/// Moves the live value out of `slot`, leaving it vacant.
///
/// # Safety
/// `slot` must hold a live value, which must be treated as vacant after this call.
pub(crate) unsafe fn take_at<T>(slot: NonNull<T>) -> T {
    // SAFETY: The caller guarantees the slot is initialized, and forgets about it afterwards.
    unsafe { slot.read() }
}

/// Drops the live value in `slot` in place, leaving it vacant.
///
/// # Safety
/// `slot` must hold a live value, which must be treated as vacant after this call.
pub(crate) unsafe fn destroy_at<T>(slot: NonNull<T>) {
    // SAFETY: The caller guarantees the slot is initialized and ready to drop.
    unsafe { ptr::drop_in_place(slot.as_ptr()) }
}

/// Drops `count` consecutive live values in place, starting from `first`.
///
/// # Safety
/// All `count` slots from `first` must hold live values within a single allocation. They are all
/// vacant after this call.
pub(crate) unsafe fn destroy_run<T>(first: NonNull<T>, count: usize) {
    // SAFETY: The caller guarantees that the run is initialized and contained in one allocation,
    // making it valid as a slice.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first.as_ptr(), count)) }
}

/// Drops a run of live values when it goes out of scope, which includes unwinding from a panic in
/// an earlier drop.
pub(crate) struct DestroyRunOnDrop<T> {
    first: NonNull<T>,
    count: usize,
}

impl<T> DestroyRunOnDrop<T> {
    /// # Safety
    /// The requirements of [`destroy_run`] must hold for `first` and `count` when the guard is
    /// dropped, and nothing else may drop the run.
    pub(crate) const unsafe fn new(first: NonNull<T>, count: usize) -> DestroyRunOnDrop<T> {
        DestroyRunOnDrop { first, count }
    }
}

impl<T> Drop for DestroyRunOnDrop<T> {
    fn drop(&mut self) {
        // SAFETY: Upheld by the caller of DestroyRunOnDrop::new.
        unsafe { destroy_run(self.first, self.count) }
    }
}
