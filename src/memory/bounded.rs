use std::{
    alloc::Layout,
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering},
};

use super::{AllocError, MemoryOwner, SystemMemory};

/// Wraps another owner and refuses requests once `limit` bytes are in use.
#[derive(Debug)]
pub struct BoundedMemory<M = SystemMemory> {
    inner: M,
    limit: usize,
    used: AtomicUsize,
}

impl BoundedMemory<SystemMemory> {
    /// Budget `limit` bytes on top of the global allocator.
    pub fn new(limit: usize) -> Self {
        Self::with_owner(SystemMemory, limit)
    }
}

impl<M: MemoryOwner> BoundedMemory<M> {
    /// Budget `limit` bytes on top of `inner`.
    pub fn with_owner(inner: M, limit: usize) -> Self {
        Self {
            inner,
            limit,
            used: AtomicUsize::new(0),
        }
    }

    /// Bytes currently handed out.
    pub fn used(&self) -> usize {
        self.used.load(Ordering::Acquire)
    }

    /// Configured budget in bytes.
    pub fn limit(&self) -> usize {
        self.limit
    }

    fn reserve(&self, bytes: usize) -> Result<(), AllocError> {
        self.used
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                used.checked_add(bytes).filter(|total| *total <= self.limit)
            })
            .map(|_| ())
            .map_err(|used| AllocError::Exhausted {
                requested: bytes,
                remaining: self.limit.saturating_sub(used),
            })
    }

    fn release(&self, bytes: usize) {
        self.used.fetch_sub(bytes, Ordering::AcqRel);
    }
}

unsafe impl<M: MemoryOwner> MemoryOwner for BoundedMemory<M> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        self.reserve(layout.size())?;
        self.inner.allocate(layout).inspect_err(|_| {
            self.release(layout.size());
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.inner.deallocate(ptr, layout);
        self.release(layout.size());
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        layout: Layout,
        new_size: usize,
    ) -> Result<NonNull<u8>, AllocError> {
        let old_size = layout.size();
        if new_size > old_size {
            self.reserve(new_size - old_size)?;
        }
        match self.inner.reallocate(ptr, layout, new_size) {
            Ok(ptr) => {
                if new_size < old_size {
                    self.release(old_size - new_size);
                }
                Ok(ptr)
            }
            Err(err) => {
                if new_size > old_size {
                    self.release(new_size - old_size);
                }
                Err(err)
            }
        }
    }
}
