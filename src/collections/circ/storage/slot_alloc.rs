use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A source of raw memory for [`AllocRingBuffer`](super::AllocRingBuffer).
///
/// # Safety
/// Implementors must return memory which fits `layout` (both size and alignment) and remains valid
/// until it is passed back to [`SlotAlloc::deallocate`]. Memory is only ever requested for layouts
/// with a non-zero size.
pub unsafe trait SlotAlloc {
    /// Allocates a block of memory for `layout`, which has a non-zero size.
    ///
    /// Rather than returning an error, an implementation which fails to allocate should call
    /// [`alloc::handle_alloc_error`] or otherwise diverge.
    fn allocate(&self, layout: Layout) -> NonNull<u8>;

    /// Releases a block of memory.
    ///
    /// # Safety
    /// `ptr` must have been returned by [`SlotAlloc::allocate`] on this allocator, with the same
    /// `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global allocator, as used by [`Box`] and [`Vec`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Global;

// SAFETY: std::alloc provides memory of the requested layout until it is deallocated.
unsafe impl SlotAlloc for Global {
    fn allocate(&self, layout: Layout) -> NonNull<u8> {
        debug_assert!(layout.size() != 0, "zero-sized layouts shouldn't be allocated");
        NonNull::new(
            // SAFETY: Zero-sized layouts are never requested.
            unsafe { alloc::alloc(layout) }
        ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: The caller guarantees that ptr was allocated here with the same layout.
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

// SAFETY: Forwarding to an allocator which upholds the contract.
unsafe impl<A: SlotAlloc + ?Sized> SlotAlloc for &A {
    fn allocate(&self, layout: Layout) -> NonNull<u8> {
        (**self).allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: Upheld by the caller.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}
