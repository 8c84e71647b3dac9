//! Raw acquire/release for caller-managed buffers.
//!
//! Every block carries a hidden size header so [`release`] can rebuild its layout
//! from the pointer alone, the way `free` does. Owned strings come from the same
//! allocator, so the C side releases everything with `lumen_free`.

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

use crate::fault::{trap, Fault};

const ALIGN: usize = 16;
const HEADER: usize = 16;

#[inline]
fn layout_for(size: usize) -> Option<Layout> {
    let total = size.checked_add(HEADER)?;
    Layout::from_size_align(total, ALIGN).ok()
}

/// Allocates `size` usable bytes (uninitialized). Never returns null; a zero-size
/// request still yields a unique block.
pub fn acquire(size: usize) -> NonNull<u8> {
    let Some(layout) = layout_for(size) else {
        trap(Fault::OutOfMemory { size });
    };
    // SAFETY: layout is never zero-sized because of the header.
    let base = unsafe { alloc::alloc(layout) };
    if base.is_null() {
        trap(Fault::OutOfMemory { size });
    }
    unsafe {
        (base as *mut usize).write(size);
        tracing::trace!(size, "acquire");
        NonNull::new_unchecked(base.add(HEADER))
    }
}

/// Allocates `size` bytes set to zero.
pub fn acquire_zeroed(size: usize) -> NonNull<u8> {
    let p = acquire(size);
    unsafe { ptr::write_bytes(p.as_ptr(), 0, size) };
    p
}

/// Releases a block obtained from [`acquire`]. Null is a no-op.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by [`acquire`]; releasing it twice
/// is undefined behavior.
pub unsafe fn release(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }
    let base = ptr.sub(HEADER);
    let size = (base as *const usize).read();
    tracing::trace!(size, "release");
    // Layout was valid when the block was acquired.
    let layout = Layout::from_size_align_unchecked(size + HEADER, ALIGN);
    alloc::dealloc(base, layout);
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn block_size(ptr: *const u8) -> usize {
        (ptr.sub(HEADER) as *const usize).read()
    }

    #[test]
    fn acquire_release_roundtrip() {
        let p = acquire(64);
        assert_eq!(p.as_ptr() as usize % ALIGN, 0);
        unsafe {
            assert_eq!(block_size(p.as_ptr()), 64);
            ptr::write_bytes(p.as_ptr(), 0xAB, 64);
            assert_eq!(*p.as_ptr().add(63), 0xAB);
            release(p.as_ptr());
        }
    }

    #[test]
    fn zero_size_blocks_are_distinct() {
        let a = acquire(0);
        let b = acquire(0);
        assert_ne!(a, b);
        unsafe {
            release(a.as_ptr());
            release(b.as_ptr());
        }
    }

    #[test]
    fn zeroed_blocks_are_zero() {
        let p = acquire_zeroed(33);
        let s = unsafe { std::slice::from_raw_parts(p.as_ptr(), 33) };
        assert!(s.iter().all(|&b| b == 0));
        unsafe { release(p.as_ptr()) };
    }

    #[test]
    fn release_null_is_noop() {
        unsafe { release(ptr::null_mut()) };
    }

    #[test]
    #[should_panic(expected = "lumen_trap(9803)")]
    fn oversized_request_traps() {
        acquire(usize::MAX);
    }
}
