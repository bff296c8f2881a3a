use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::SkipListError;

/// Structural ceiling on tower height.
pub const MAX_HEIGHT: usize = 12;

/// Inverse probability of a tower growing one more level.
pub const BRANCHING: u32 = 4;

/// Link value meaning "no successor".
pub(crate) const NIL: u32 = u32::MAX;

/// Position of the sentinel head while searching. Never stored in a link.
pub(crate) const HEAD: u32 = u32::MAX - 1;

/// Forward links of one node (or of the head), indexed by level.
pub(crate) type Tower = [AtomicU32; MAX_HEIGHT];

pub(crate) fn empty_tower() -> Tower {
    std::array::from_fn(|_| AtomicU32::new(NIL))
}

/// A key/value entry plus its forward links.
///
/// Only `height` leading entries of `tower` are part of the list; the rest
/// stay `NIL` for the node's whole life. Key, value and recorded sizes are
/// written once before the node is published and never change afterwards.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) key_bytes: usize,
    pub(crate) value_bytes: usize,
    height: u8,
    tower: Tower,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(
        key: K,
        value: V,
        height: usize,
        key_bytes: usize,
        value_bytes: usize,
    ) -> Result<Self, SkipListError> {
        if height == 0 || height > MAX_HEIGHT {
            return Err(SkipListError::HeightOverflow {
                height,
                max: MAX_HEIGHT,
            });
        }
        Ok(Self {
            key,
            value,
            key_bytes,
            value_bytes,
            height: height as u8,
            tower: empty_tower(),
        })
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.height as usize
    }

    #[inline]
    pub(crate) fn tower(&self) -> &Tower {
        &self.tower
    }

    #[inline]
    pub(crate) fn next(&self, level: usize) -> u32 {
        debug_assert!(level < self.height());
        self.tower[level].load(Ordering::Acquire)
    }

    /// Set a link before the node is published.
    #[inline]
    pub(crate) fn init_next(&mut self, level: usize, next: u32) {
        debug_assert!(level < self.height());
        *self.tower[level].get_mut() = next;
    }

    #[inline]
    pub(crate) fn accounted_bytes(&self) -> usize {
        self.key_bytes + self.value_bytes
    }
}
