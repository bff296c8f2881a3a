//! Deferred reclamation for unlinked nodes.
//!
//! Readers pin the current epoch for as long as they may hold references
//! into the list. The writer tags every unlinked node with the epoch that was
//! current when it was unlinked and only releases it once the global epoch
//! has moved two steps past that tag.
//!
//! Only two reader counters are needed because the epoch is allowed to move
//! from `e` to `e + 1` only once no reader is pinned at `e - 1`. At any point
//! readers are therefore pinned at the current epoch or the one before it,
//! and those two share no parity. Reaching `r + 2` means every reader pinned
//! at `r` or earlier has unpinned, so nothing can still be traversing a node
//! unlinked during `r`.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

pub(crate) struct EpochGate {
    epoch: CachePadded<AtomicUsize>,
    pinned: [CachePadded<AtomicUsize>; 2],
}

/// Keeps the epoch it was pinned at from being reclaimed past.
pub(crate) struct ReadGuard<'a> {
    gate: &'a EpochGate,
    epoch: usize,
}

impl EpochGate {
    pub(crate) fn new() -> Self {
        Self {
            epoch: CachePadded::new(AtomicUsize::new(0)),
            pinned: [
                CachePadded::new(AtomicUsize::new(0)),
                CachePadded::new(AtomicUsize::new(0)),
            ],
        }
    }

    #[inline]
    fn counter(&self, epoch: usize) -> &AtomicUsize {
        &self.pinned[epoch & 1]
    }

    /// Register a reader at the current epoch.
    pub(crate) fn pin(&self) -> ReadGuard<'_> {
        loop {
            let epoch = self.epoch.load(Ordering::SeqCst);
            self.counter(epoch).fetch_add(1, Ordering::SeqCst);
            if self.epoch.load(Ordering::SeqCst) == epoch {
                return ReadGuard { gate: self, epoch };
            }
            // The writer moved on between the load and the increment; the
            // count may belong to a parity it is about to drain.
            self.counter(epoch).fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Epoch to tag a node with when it is unlinked.
    #[inline]
    pub(crate) fn current(&self) -> usize {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Move the epoch forward if no reader is pinned at the previous one.
    ///
    /// Writer only.
    pub(crate) fn try_advance(&self) -> bool {
        let epoch = self.epoch.load(Ordering::SeqCst);
        if self.counter(epoch.wrapping_sub(1)).load(Ordering::SeqCst) != 0 {
            return false;
        }
        self.epoch.store(epoch.wrapping_add(1), Ordering::SeqCst);
        true
    }

    /// Whether a node unlinked during `retired_at` can no longer be observed.
    #[inline]
    pub(crate) fn is_reclaimable(&self, retired_at: usize) -> bool {
        self.current().wrapping_sub(retired_at) >= 2
    }

    #[cfg(test)]
    pub(crate) fn pinned(&self) -> usize {
        self.pinned[0].load(Ordering::SeqCst) + self.pinned[1].load(Ordering::SeqCst)
    }
}

impl Drop for ReadGuard<'_> {
    fn drop(&mut self) {
        self.gate.counter(self.epoch).fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_waits_for_previous_epoch() {
        let gate = EpochGate::new();
        let retired_at = gate.current();

        let guard = gate.pin();
        assert_eq!(gate.pinned(), 1);

        // Nobody is pinned at the epoch before the guard's.
        assert!(gate.try_advance());
        assert!(!gate.is_reclaimable(retired_at));
        // The guard still sits on the previous epoch.
        assert!(!gate.try_advance());
        assert!(!gate.is_reclaimable(retired_at));

        drop(guard);
        assert_eq!(gate.pinned(), 0);
        assert!(gate.try_advance());
        assert!(gate.is_reclaimable(retired_at));
    }

    #[test]
    fn readers_pinned_after_retirement_do_not_block() {
        let gate = EpochGate::new();
        let retired_at = gate.current();
        assert!(gate.try_advance());

        let _late = gate.pin();
        assert!(gate.try_advance());
        assert!(gate.is_reclaimable(retired_at));
    }
}
