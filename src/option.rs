use std::{fmt, sync::Arc};

use crate::diagnostics::{DiagnosticSink, TracingSink};

/// Seed used for level generation when none is configured.
pub const DEFAULT_SEED: u64 = 0xdead_beef;

/// log2 of the slot count of the first slab segment when none is configured.
pub const DEFAULT_SEGMENT_SHIFT: u32 = 6;

pub(crate) const MAX_SEGMENT_SHIFT: u32 = 16;

/// Construction options for a [`SkipList`](crate::SkipList).
#[derive(Clone)]
pub struct SkipListOptions {
    pub(crate) seed: u64,
    pub(crate) segment_shift: u32,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        SkipListOptions {
            seed: DEFAULT_SEED,
            segment_shift: DEFAULT_SEGMENT_SHIFT,
            sink: Arc::new(TracingSink),
        }
    }
}

impl SkipListOptions {
    /// Seed for the private level-generation RNG.
    pub fn seed(self, seed: u64) -> Self {
        SkipListOptions { seed, ..self }
    }

    /// Size the first slab segment at `1 << shift` node slots.
    ///
    /// Later segments double in size. Values above 16 are clamped.
    pub fn segment_shift(self, segment_shift: u32) -> Self {
        SkipListOptions {
            segment_shift: segment_shift.min(MAX_SEGMENT_SHIFT),
            ..self
        }
    }

    /// Receiver for duplicate-insert, missing-delete and allocation-failure reports.
    pub fn diagnostic_sink(self, sink: Arc<dyn DiagnosticSink>) -> Self {
        SkipListOptions { sink, ..self }
    }
}

impl fmt::Debug for SkipListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipListOptions")
            .field("seed", &self.seed)
            .field("segment_shift", &self.segment_shift)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let options = SkipListOptions::default().seed(7).segment_shift(40);
        assert_eq!(options.seed, 7);
        assert_eq!(options.segment_shift, MAX_SEGMENT_SHIFT);
        assert_eq!(
            SkipListOptions::default().segment_shift,
            DEFAULT_SEGMENT_SHIFT
        );
    }
}
