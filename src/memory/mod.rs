//! Memory owners the skip list draws node storage from.
//!
//! The list never calls the global allocator for node storage itself; every
//! slab segment is requested through a [`MemoryOwner`], so an engine can swap
//! in arena or pooled allocation without touching index logic.

mod bounded;

use std::{
    alloc::{self, Layout, LayoutError},
    ptr::NonNull,
};

pub use bounded::BoundedMemory;

/// Failure to obtain memory for node storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// A bounded owner refused a request that would exceed its budget.
    #[error("memory budget exhausted: requested {requested} bytes, {remaining} remaining")]
    Exhausted {
        /// Bytes requested.
        requested: usize,
        /// Bytes left in the budget at the time of the request.
        remaining: usize,
    },
    /// The underlying allocator returned null.
    #[error("allocator returned null for {size} bytes")]
    OutOfMemory {
        /// Bytes requested.
        size: usize,
    },
    /// The requested layout could not be formed.
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
    /// Every addressable node slot is in use.
    #[error("node index space exhausted")]
    IndexSpace,
}

/// Source of raw memory for node storage.
///
/// # Safety
///
/// Implementations must return blocks that are valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and not aliased by any
/// other live allocation. `deallocate` and `reallocate` are only ever called
/// with a pointer previously returned by the same owner together with the
/// layout it was allocated with.
pub unsafe trait MemoryOwner: Send + Sync {
    /// Allocate a block described by `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Release a block previously returned by [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by this owner with `layout` and must not
    /// be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Resize a block, preserving its contents up to the smaller size.
    ///
    /// # Safety
    ///
    /// `ptr` must have been allocated by this owner with `layout`. On success
    /// the old pointer must no longer be used.
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError>;
}

/// Zero-sized blocks are represented by a dangling, well-aligned pointer.
fn dangling(layout: Layout) -> NonNull<u8> {
    // SAFETY: alignments are non-zero powers of two
    unsafe { NonNull::new_unchecked(layout.align() as *mut u8) }
}

/// Forwards to the process global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemMemory;

unsafe impl MemoryOwner for SystemMemory {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(dangling(layout));
        }
        // SAFETY: layout has a non-zero size
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError::OutOfMemory {
            size: layout.size(),
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            alloc::dealloc(ptr.as_ptr(), layout);
        }
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let new_layout = Layout::from_size_align(new_size, layout.align())?;
        if layout.size() == 0 {
            return self.allocate(new_layout);
        }
        if new_size == 0 {
            self.deallocate(ptr, layout);
            return Ok(dangling(new_layout));
        }
        let grown = alloc::realloc(ptr.as_ptr(), layout, new_size);
        NonNull::new(grown).ok_or(AllocError::OutOfMemory { size: new_size })
    }
}
