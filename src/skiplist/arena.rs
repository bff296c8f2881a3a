//! Segmented slab holding skip list nodes.
//!
//! Nodes are addressed by `u32` slot indices. Segment `k` holds
//! `base << k` slots and is requested from the [`MemoryOwner`] the first time
//! a slot inside it is reserved. Segments are never moved or freed while the
//! arena is alive, so a reader holding a slot reference never sees it
//! relocated underneath it.
//!
//! ```text
//! segment 0: [0 .. base)
//! segment 1: [base .. 3*base)
//! segment 2: [3*base .. 7*base)
//! ...
//! ```
//!
//! The arena does not know which slots are occupied; the owning list is
//! responsible for dropping every live node before the arena is dropped.

use std::{
    alloc::Layout,
    cell::UnsafeCell,
    marker::PhantomData,
    mem::MaybeUninit,
    ptr::{self, NonNull},
    sync::atomic::{AtomicPtr, Ordering},
};

use super::node::{Node, HEAD};
use crate::{
    memory::{AllocError, MemoryOwner},
    observability::log_debug,
};

const MAX_SEGMENTS: usize = 32;

/// Slot indices at or above this value are reserved for link sentinels.
const INDEX_LIMIT: u64 = HEAD as u64;

type Slot<K, V> = UnsafeCell<MaybeUninit<Node<K, V>>>;

pub(crate) struct NodeArena<K, V, M: MemoryOwner> {
    segments: [AtomicPtr<Slot<K, V>>; MAX_SEGMENTS],
    shift: u32,
    memory: M,
    _marker: PhantomData<*mut Node<K, V>>,
}

// SAFETY: the arena hands out shared references to nodes across threads and
// moves nodes in and out on whichever thread holds the writer lock.
unsafe impl<K: Send, V: Send, M: MemoryOwner> Send for NodeArena<K, V, M> {}
unsafe impl<K: Send + Sync, V: Send + Sync, M: MemoryOwner> Sync for NodeArena<K, V, M> {}

impl<K, V, M: MemoryOwner> NodeArena<K, V, M> {
    pub(crate) fn new(memory: M, shift: u32) -> Self {
        Self {
            segments: std::array::from_fn(|_| AtomicPtr::new(ptr::null_mut())),
            shift,
            memory,
            _marker: PhantomData,
        }
    }

    pub(crate) fn memory(&self) -> &M {
        &self.memory
    }

    /// Number of slots in segment `segment`.
    fn capacity_of(&self, segment: usize) -> u64 {
        (1u64 << self.shift) << segment
    }

    /// Map a slot index to `(segment, offset)`.
    #[inline]
    fn locate(&self, idx: u32) -> (usize, usize) {
        let bucket = ((idx as u64) >> self.shift) + 1;
        let segment = (63 - bucket.leading_zeros()) as usize;
        let start = (1u64 << self.shift) * ((1u64 << segment) - 1);
        (segment, (idx as u64 - start) as usize)
    }

    fn segment_layout(&self, segment: usize) -> Result<Layout, AllocError> {
        Ok(Layout::array::<Slot<K, V>>(self.capacity_of(segment) as usize)?)
    }

    /// Make sure the segment containing `idx` is backed by memory.
    ///
    /// Writer only.
    pub(crate) fn reserve(&self, idx: u32) -> Result<(), AllocError> {
        if idx as u64 >= INDEX_LIMIT {
            return Err(AllocError::IndexSpace);
        }
        let (segment, _) = self.locate(idx);
        if segment >= MAX_SEGMENTS {
            return Err(AllocError::IndexSpace);
        }
        if !self.segments[segment].load(Ordering::Acquire).is_null() {
            return Ok(());
        }
        let layout = self.segment_layout(segment)?;
        let block = self.memory.allocate(layout)?;
        self.segments[segment].store(block.as_ptr() as *mut Slot<K, V>, Ordering::Release);
        log_debug!(
            component = "arena",
            event = "segment_allocated",
            segment,
            slots = self.capacity_of(segment),
            bytes = layout.size(),
        );
        Ok(())
    }

    #[inline]
    fn slot(&self, idx: u32) -> *mut MaybeUninit<Node<K, V>> {
        let (segment, offset) = self.locate(idx);
        let base = self.segments[segment].load(Ordering::Acquire);
        debug_assert!(!base.is_null(), "slot {idx} lies in an unreserved segment");
        // SAFETY: reserved segments hold `capacity_of(segment)` slots and
        // `offset` is below that by construction of `locate`.
        unsafe { (*base.add(offset)).get() }
    }

    /// Move `node` into a vacant slot.
    ///
    /// # Safety
    ///
    /// Writer only. `idx` must have been reserved and must not hold a live
    /// node, and no reader may still hold a reference into it.
    pub(crate) unsafe fn write(&self, idx: u32, node: Node<K, V>) -> &Node<K, V> {
        let slot = self.slot(idx);
        (*slot).write(node);
        (*slot).assume_init_ref()
    }

    /// Borrow the node stored at `idx`.
    ///
    /// # Safety
    ///
    /// `idx` must hold an initialized node that is not reclaimed while the
    /// returned reference is alive.
    #[inline]
    pub(crate) unsafe fn node(&self, idx: u32) -> &Node<K, V> {
        (*self.slot(idx)).assume_init_ref()
    }

    /// Move the node out of `idx`, leaving the slot vacant.
    ///
    /// # Safety
    ///
    /// Writer only. `idx` must hold an initialized node that no reader can
    /// still reach.
    pub(crate) unsafe fn take(&self, idx: u32) -> Node<K, V> {
        (*self.slot(idx)).assume_init_read()
    }
}

impl<K, V, M: MemoryOwner> Drop for NodeArena<K, V, M> {
    fn drop(&mut self) {
        for segment in 0..MAX_SEGMENTS {
            let base = *self.segments[segment].get_mut();
            let Some(block) = NonNull::new(base as *mut u8) else {
                continue;
            };
            if let Ok(layout) = self.segment_layout(segment) {
                // SAFETY: the block was allocated by `memory` with this layout.
                unsafe { self.memory.deallocate(block, layout) };
            }
        }
    }
}
