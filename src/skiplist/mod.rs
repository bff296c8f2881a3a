//! Concurrent ordered index backing the mutable memtable.
//!
//! A skip list with one writer and any number of lock-free readers. Nodes
//! live in a segmented slab ([`arena`]) and link to each other by slot index;
//! unlinked nodes are released through an epoch gate ([`epoch`]) once no
//! reader can still be walking through them.
//!
//! ```text
//! level 2:  HEAD ─────────────────────► 30 ───────────────► NIL
//! level 1:  HEAD ────────► 10 ────────► 30 ──────► 50 ────► NIL
//! level 0:  HEAD ──► 5 ──► 10 ──► 20 ──► 30 ──► 40 ──► 50 ──► NIL
//! ```
//!
//! Mutations are serialized by a single writer lock scoped to the whole list.
//! A new node is fully built, the list height is raised if needed, and the
//! node is then linked bottom-up with release stores, so a reader following
//! any link only ever reaches a complete node.

mod arena;
mod epoch;
mod iter;
mod node;

use std::{
    cmp::Ordering as CmpOrdering,
    collections::VecDeque,
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;

use self::{
    arena::NodeArena,
    epoch::EpochGate,
    node::{empty_tower, Node, Tower, HEAD, NIL},
};
pub use self::{
    iter::{Entries, Iter},
    node::{BRANCHING, MAX_HEIGHT},
};
use crate::{
    comparator::{Comparator, OrdComparator},
    diagnostics::{DiagnosticSink, Level},
    error::SkipListError,
    memory::{AllocError, MemoryOwner, SystemMemory},
    observability::{log_debug, log_error},
    option::SkipListOptions,
    size::ByteSize,
};

/// Point-in-time counters describing a [`SkipList`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipListStats {
    /// Live entries.
    pub entries: usize,
    /// Accounted key and value bytes of live entries.
    pub memory_usage: usize,
    /// Current maximum tower height.
    pub height: usize,
    /// Successful inserts since creation.
    pub inserts: u64,
    /// Successful deletes since creation.
    pub deletes: u64,
    /// Inserts rejected because the key was present.
    pub duplicate_rejections: u64,
    /// Deletes rejected because the key was absent.
    pub missing_deletes: u64,
    /// Unlinked nodes still waiting for readers to move on.
    pub retired_pending: usize,
    /// Slab slots currently holding a node, live or retired.
    pub slots_in_use: usize,
}

/// State touched only while holding the writer lock.
struct WriterState {
    rng: fastrand::Rng,
    next_slot: u32,
    free_slots: Vec<u32>,
    /// Unlinked nodes with the epoch they were unlinked in, oldest first.
    retired: VecDeque<(usize, u32)>,
    inserts: u64,
    deletes: u64,
    duplicate_rejections: u64,
    missing_deletes: u64,
}

impl WriterState {
    fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            next_slot: 0,
            free_slots: Vec::new(),
            retired: VecDeque::new(),
            inserts: 0,
            deletes: 0,
            duplicate_rejections: 0,
            missing_deletes: 0,
        }
    }

    /// Pick a tower height: 1, plus one more level per successful 1-in-4 trial.
    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < MAX_HEIGHT && self.rng.u32(..BRANCHING) == 0 {
            height += 1;
        }
        height
    }

    fn acquire_slot<K, V, M: MemoryOwner>(
        &mut self,
        arena: &NodeArena<K, V, M>,
    ) -> Result<u32, AllocError> {
        if let Some(slot) = self.free_slots.pop() {
            return Ok(slot);
        }
        let slot = self.next_slot;
        arena.reserve(slot)?;
        self.next_slot += 1;
        Ok(slot)
    }

    fn slots_in_use(&self) -> usize {
        self.next_slot as usize - self.free_slots.len()
    }
}

/// Ordered map from unique keys to immutable values.
///
/// All operations take `&self`: share the list behind an `Arc` to read from
/// many threads while one thread writes.
pub struct SkipList<K, V, C = OrdComparator, M: MemoryOwner = SystemMemory> {
    head: Tower,
    height: AtomicUsize,
    len: AtomicUsize,
    memory_usage: AtomicUsize,
    arena: NodeArena<K, V, M>,
    epoch: EpochGate,
    writer: Mutex<WriterState>,
    comparator: C,
    sink: Arc<dyn DiagnosticSink>,
}

impl<K: Ord, V> SkipList<K, V> {
    /// Create an empty list ordered by `K: Ord`.
    pub fn new() -> Self {
        Self::with_options(OrdComparator, SystemMemory, SkipListOptions::default())
    }
}

impl<K: Ord, V> Default for SkipList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> SkipList<K, V, C> {
    /// Create an empty list ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_options(comparator, SystemMemory, SkipListOptions::default())
    }
}

impl<K, V, C, M> SkipList<K, V, C, M>
where
    C: Comparator<K>,
    M: MemoryOwner,
{
    /// Create an empty list drawing node storage from `memory`.
    pub fn with_options(comparator: C, memory: M, options: SkipListOptions) -> Self {
        Self {
            head: empty_tower(),
            height: AtomicUsize::new(1),
            len: AtomicUsize::new(0),
            memory_usage: AtomicUsize::new(0),
            arena: NodeArena::new(memory, options.segment_shift),
            epoch: EpochGate::new(),
            writer: Mutex::new(WriterState::new(options.seed)),
            comparator,
            sink: options.sink,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Whether the list holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accounted bytes of live keys and values, excluding node overhead.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        self.memory_usage.load(Ordering::Acquire)
    }

    /// Current maximum tower height, in `1..=MAX_HEIGHT`.
    #[inline]
    pub fn height(&self) -> usize {
        self.height.load(Ordering::Acquire)
    }

    /// The memory owner node storage is drawn from.
    pub fn memory(&self) -> &M {
        self.arena.memory()
    }

    /// Snapshot of the list's counters.
    pub fn stats(&self) -> SkipListStats {
        let writer = self.writer.lock();
        SkipListStats {
            entries: self.len(),
            memory_usage: self.memory_usage(),
            height: self.height(),
            inserts: writer.inserts,
            deletes: writer.deletes,
            duplicate_rejections: writer.duplicate_rejections,
            missing_deletes: writer.missing_deletes,
            retired_pending: writer.retired.len(),
            slots_in_use: writer.slots_in_use(),
        }
    }

    #[inline]
    fn tower(&self, at: u32) -> &Tower {
        if at == HEAD {
            &self.head
        } else {
            // SAFETY: `at` was read from a link while the caller holds either
            // a read guard or the writer lock, so the node is not reclaimed.
            unsafe { self.arena.node(at) }.tower()
        }
    }

    #[inline]
    fn next(&self, at: u32, level: usize) -> u32 {
        self.tower(at)[level].load(Ordering::Acquire)
    }

    #[inline]
    fn compare_at(&self, at: u32, key: &K) -> CmpOrdering {
        // SAFETY: see `tower`.
        let node = unsafe { self.arena.node(at) };
        self.comparator.compare(&node.key, key)
    }

    /// Locate the node holding `key`, stopping at the first level it shows up on.
    ///
    /// The caller must hold a read guard or the writer lock.
    fn find(&self, key: &K) -> Option<u32> {
        let mut level = self.height() - 1;
        let mut current = HEAD;
        loop {
            let next = self.next(current, level);
            if next != NIL {
                match self.compare_at(next, key) {
                    CmpOrdering::Less => {
                        current = next;
                        continue;
                    }
                    CmpOrdering::Equal => return Some(next),
                    CmpOrdering::Greater => {}
                }
            }
            if level == 0 {
                return None;
            }
            level -= 1;
        }
    }

    /// First node whose key is not less than `key`, or `NIL`.
    ///
    /// The caller must hold a read guard or the writer lock.
    fn lower_bound(&self, key: &K) -> u32 {
        let mut level = self.height() - 1;
        let mut current = HEAD;
        loop {
            let next = self.next(current, level);
            if next != NIL && self.compare_at(next, key) == CmpOrdering::Less {
                current = next;
                continue;
            }
            if level == 0 {
                return next;
            }
            level -= 1;
        }
    }

    /// Fill `preds` with the rightmost node before `key` on every level.
    ///
    /// Levels at or above the current height keep `HEAD`: a taller node
    /// becomes the first entry there. Returns the node holding `key`, if any.
    /// Writer only.
    fn find_predecessors(&self, key: &K, preds: &mut [u32; MAX_HEIGHT]) -> Option<u32> {
        preds.fill(HEAD);
        let mut found = None;
        let mut current = HEAD;
        for level in (0..self.height()).rev() {
            loop {
                let next = self.next(current, level);
                if next == NIL {
                    break;
                }
                match self.compare_at(next, key) {
                    CmpOrdering::Less => current = next,
                    CmpOrdering::Equal => {
                        found = Some(next);
                        break;
                    }
                    CmpOrdering::Greater => break,
                }
            }
            preds[level] = current;
        }
        found
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        let _guard = self.epoch.pin();
        self.find(key).is_some()
    }

    /// Run `f` on the value stored under `key`.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let _guard = self.epoch.pin();
        self.find(key).map(|idx| {
            // SAFETY: pinned above; the node outlives the guard.
            let node = unsafe { self.arena.node(idx) };
            f(&node.value)
        })
    }

    /// Clone of the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.get_with(key, V::clone)
    }

    /// Like [`get`](Self::get), but reports a miss as [`SkipListError::KeyNotFound`].
    pub fn get_strict(&self, key: &K) -> Result<V, SkipListError>
    where
        V: Clone,
    {
        self.get(key).ok_or(SkipListError::KeyNotFound)
    }

    /// Cursor over the entries in ascending key order.
    ///
    /// The cursor starts unpositioned; call [`Iter::seek_to_first`] or
    /// [`Iter::seek`] before reading from it. Nodes it can reach are kept
    /// alive until it is dropped.
    pub fn iter(&self) -> Iter<'_, K, V, C, M> {
        Iter::new(self)
    }

    /// Owned `(key, value)` pairs in ascending key order.
    pub fn entries(&self) -> Entries<'_, K, V, C, M>
    where
        K: Clone,
        V: Clone,
    {
        let mut iter = self.iter();
        iter.seek_to_first();
        iter.entries()
    }

    /// Insert `key` with `value`.
    ///
    /// Fails with [`SkipListError::DuplicateKey`] if `key` is present and
    /// with [`SkipListError::Allocation`] if the memory owner refuses the
    /// node; the list is unchanged in both cases.
    pub fn insert(&self, key: K, value: V) -> Result<(), SkipListError>
    where
        K: ByteSize,
        V: ByteSize,
    {
        let mut writer = self.writer.lock();
        let height = writer.random_height();
        self.insert_locked(&mut writer, key, value, height)
    }

    fn insert_locked(
        &self,
        writer: &mut WriterState,
        key: K,
        value: V,
        height: usize,
    ) -> Result<(), SkipListError>
    where
        K: ByteSize,
        V: ByteSize,
    {
        let mut preds = [HEAD; MAX_HEIGHT];
        if self.find_predecessors(&key, &mut preds).is_some() {
            writer.duplicate_rejections += 1;
            self.sink
                .record(Level::Warn, "insert rejected: key already present");
            return Err(SkipListError::DuplicateKey);
        }

        let key_bytes = key.byte_size();
        let value_bytes = value.byte_size();
        let mut node = Node::new(key, value, height, key_bytes, value_bytes)?;

        let slot = match writer.acquire_slot(&self.arena) {
            Ok(slot) => slot,
            Err(err) => {
                log_error!(
                    component = "skiplist",
                    event = "node_allocation_failed",
                    error = %err,
                );
                self.sink
                    .record(Level::Error, &format!("insert failed: {err}"));
                return Err(err.into());
            }
        };

        for (level, pred) in preds.iter().enumerate().take(height) {
            node.init_next(level, self.next(*pred, level));
        }
        // SAFETY: the slot is vacant and we hold the writer lock.
        unsafe { self.arena.write(slot, node) };

        let current = self.height();
        if height > current {
            self.height.store(height, Ordering::Release);
            log_debug!(
                component = "skiplist",
                event = "height_raised",
                from = current,
                to = height,
            );
        }

        for (level, pred) in preds.iter().enumerate().take(height) {
            self.tower(*pred)[level].store(slot, Ordering::Release);
        }

        self.len.fetch_add(1, Ordering::AcqRel);
        self.memory_usage
            .fetch_add(key_bytes + value_bytes, Ordering::AcqRel);
        writer.inserts += 1;
        self.collect(writer);
        Ok(())
    }

    /// Remove `key` and release its node once no reader can observe it.
    ///
    /// Fails with [`SkipListError::KeyNotFound`] and leaves the list
    /// unchanged if `key` is absent.
    pub fn delete(&self, key: &K) -> Result<(), SkipListError> {
        let mut writer = self.writer.lock();
        let mut preds = [HEAD; MAX_HEIGHT];
        let Some(target) = self.find_predecessors(key, &mut preds) else {
            writer.missing_deletes += 1;
            self.sink
                .record(Level::Warn, "delete rejected: key not present");
            return Err(SkipListError::KeyNotFound);
        };

        // SAFETY: reachable from head and we hold the writer lock.
        let node = unsafe { self.arena.node(target) };
        for level in (0..node.height()).rev() {
            let link = &self.tower(preds[level])[level];
            debug_assert_eq!(link.load(Ordering::Relaxed), target);
            link.store(node.next(level), Ordering::Release);
        }

        self.len.fetch_sub(1, Ordering::AcqRel);
        self.memory_usage
            .fetch_sub(node.accounted_bytes(), Ordering::AcqRel);
        writer.retired.push_back((self.epoch.current(), target));
        writer.deletes += 1;
        self.collect(&mut writer);
        Ok(())
    }

    /// Release unlinked nodes no reader can still reach.
    ///
    /// Runs after every mutation; call it directly to release nodes held back
    /// by readers that have since finished. Returns the number released.
    pub fn reclaim(&self) -> usize {
        let mut writer = self.writer.lock();
        self.collect(&mut writer)
    }

    fn collect(&self, writer: &mut WriterState) -> usize {
        if writer.retired.is_empty() {
            return 0;
        }
        for _ in 0..2 {
            if !self.epoch.try_advance() {
                break;
            }
        }
        let mut released = 0;
        while let Some(&(retired_at, slot)) = writer.retired.front() {
            if !self.epoch.is_reclaimable(retired_at) {
                break;
            }
            writer.retired.pop_front();
            // SAFETY: unlinked at `retired_at` and every reader that could
            // have reached it has unpinned.
            drop(unsafe { self.arena.take(slot) });
            writer.free_slots.push(slot);
            released += 1;
        }
        if released > 0 {
            log_debug!(
                component = "skiplist",
                event = "nodes_reclaimed",
                released,
                pending = writer.retired.len(),
            );
        }
        released
    }
}

impl<K, V, C, M: MemoryOwner> Drop for SkipList<K, V, C, M> {
    fn drop(&mut self) {
        let mut current = *self.head[0].get_mut();
        while current != NIL {
            // SAFETY: exclusive access; every node on level 0 is live.
            let node = unsafe { self.arena.take(current) };
            current = node.tower()[0].load(Ordering::Relaxed);
        }
        let writer = self.writer.get_mut();
        for (_, slot) in writer.retired.drain(..) {
            // SAFETY: retired nodes are off every level and still initialized.
            drop(unsafe { self.arena.take(slot) });
        }
    }
}

impl<K, V, C, M> fmt::Debug for SkipList<K, V, C, M>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Comparator<K>,
    M: MemoryOwner,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        let mut iter = self.iter();
        iter.seek_to_first();
        while iter.valid() {
            map.entry(iter.key(), iter.value());
            iter.next();
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::{diagnostics::NoopSink, memory::BoundedMemory};

    impl<K, V, C: Comparator<K>, M: MemoryOwner> SkipList<K, V, C, M> {
        fn insert_with_height(&self, key: K, value: V, height: usize) -> Result<(), SkipListError>
        where
            K: ByteSize,
            V: ByteSize,
        {
            let mut writer = self.writer.lock();
            self.insert_locked(&mut writer, key, value, height)
        }

        /// Walk every level and check ordering, tower membership and count.
        fn assert_well_formed(&self) {
            let _guard = self.epoch.pin();
            let mut below: Vec<u32> = Vec::new();
            for level in 0..MAX_HEIGHT {
                let mut chain = Vec::new();
                let mut current = self.next(HEAD, level);
                while current != NIL {
                    chain.push(current);
                    current = self.next(current, level);
                }
                for pair in chain.windows(2) {
                    assert_eq!(
                        self.compare_at(pair[0], unsafe { &self.arena.node(pair[1]).key }),
                        CmpOrdering::Less,
                        "level {level} out of order"
                    );
                }
                if level == 0 {
                    assert_eq!(chain.len(), self.len());
                } else {
                    assert!(chain.iter().all(|idx| below.contains(idx)));
                }
                if level >= self.height() {
                    assert!(chain.is_empty(), "level {level} above height is populated");
                }
                below = chain;
            }
        }
    }

    fn quiet<K: Ord, V>() -> SkipList<K, V> {
        SkipList::with_options(
            OrdComparator,
            SystemMemory,
            SkipListOptions::default().diagnostic_sink(Arc::new(NoopSink)),
        )
    }

    #[test]
    fn random_height_stays_within_ceiling() {
        let mut writer = WriterState::new(42);
        let mut histogram = [0usize; MAX_HEIGHT + 1];
        for _ in 0..100_000 {
            let height = writer.random_height();
            assert!((1..=MAX_HEIGHT).contains(&height));
            histogram[height] += 1;
        }
        // P(height >= 2) is 1/4.
        let tall: usize = histogram[2..].iter().sum();
        assert!((20_000..30_000).contains(&tall), "tall towers: {tall}");
        assert!(histogram[1] > histogram[2]);
    }

    #[test]
    fn taller_node_links_directly_from_head() {
        let list = quiet::<u32, u32>();
        list.insert_with_height(50, 0, 2).unwrap();
        assert_eq!(list.height(), 2);

        // Levels 2..7 have no predecessor yet; head must point at the new node.
        list.insert_with_height(30, 0, 7).unwrap();
        assert_eq!(list.height(), 7);
        for level in 2..7 {
            let first = list.next(HEAD, level);
            assert_eq!(unsafe { list.arena.node(first).key }, 30);
        }

        // A shorter-than-max node inserted later must not clobber level 5 and 6.
        list.insert_with_height(40, 0, 5).unwrap();
        for level in 5..7 {
            let first = list.next(HEAD, level);
            assert_eq!(unsafe { list.arena.node(first).key }, 30);
            let second = list.next(first, level);
            assert_eq!(second, NIL);
        }
        // And 40 follows 30 on levels 2..5.
        for level in 2..5 {
            let first = list.next(HEAD, level);
            let second = list.next(first, level);
            assert_eq!(unsafe { list.arena.node(second).key }, 40);
        }

        // A node below everything at full height becomes first on every level.
        list.insert_with_height(10, 0, MAX_HEIGHT).unwrap();
        assert_eq!(list.height(), MAX_HEIGHT);
        for level in 0..MAX_HEIGHT {
            assert_eq!(unsafe { list.arena.node(list.next(HEAD, level)).key }, 10);
        }
        list.assert_well_formed();
    }

    #[test]
    fn delete_unlinks_every_level() {
        let list = quiet::<u32, u32>();
        list.insert_with_height(1, 0, 1).unwrap();
        list.insert_with_height(2, 0, 4).unwrap();
        list.insert_with_height(3, 0, 3).unwrap();
        list.insert_with_height(4, 0, 4).unwrap();

        list.delete(&2).unwrap();
        list.assert_well_formed();
        for level in 0..3 {
            let first = list.next(HEAD, level);
            let key = unsafe { list.arena.node(first).key };
            assert_ne!(key, 2);
        }
        assert_eq!(list.stats().retired_pending, 0);

        list.delete(&4).unwrap();
        list.delete(&1).unwrap();
        list.delete(&3).unwrap();
        assert!(list.is_empty());
        for level in 0..MAX_HEIGHT {
            assert_eq!(list.next(HEAD, level), NIL);
        }
        list.assert_well_formed();
    }

    #[test]
    fn duplicate_and_missing_are_reported_to_sink() {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let captured = seen.clone();
        let sink = move |level: Level, message: &str| {
            captured.lock().unwrap().push((level, message.to_string()));
        };
        let list: SkipList<u64, String> = SkipList::with_options(
            OrdComparator,
            SystemMemory,
            SkipListOptions::default().diagnostic_sink(Arc::new(sink)),
        );

        list.insert(1, "a".into()).unwrap();
        assert_eq!(list.insert(1, "b".into()), Err(SkipListError::DuplicateKey));
        assert_eq!(list.delete(&9), Err(SkipListError::KeyNotFound));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|(level, _)| *level == Level::Warn));

        let stats = list.stats();
        assert_eq!(stats.duplicate_rejections, 1);
        assert_eq!(stats.missing_deletes, 1);
        assert_eq!(stats.inserts, 1);
    }

    #[test]
    fn allocation_failure_leaves_list_untouched() {
        // One slot per segment: the second insert needs a fresh segment.
        let first_segment = std::alloc::Layout::array::<
            std::cell::UnsafeCell<std::mem::MaybeUninit<Node<u64, u64>>>,
        >(1)
        .unwrap()
        .size();
        let list: SkipList<u64, u64, _, _> = SkipList::with_options(
            OrdComparator,
            BoundedMemory::new(first_segment),
            SkipListOptions::default()
                .segment_shift(0)
                .diagnostic_sink(Arc::new(NoopSink)),
        );

        list.insert(1, 10).unwrap();
        let before = list.stats();
        let err = list.insert(2, 20).unwrap_err();
        assert!(matches!(
            err,
            SkipListError::Allocation(AllocError::Exhausted { .. })
        ));
        assert_eq!(list.stats(), before);
        assert!(!list.contains(&2));
        assert_eq!(list.get(&1), Some(10));
        list.assert_well_formed();

        // A freed slot is reused without going back to the owner.
        list.delete(&1).unwrap();
        list.insert(2, 20).unwrap();
        assert_eq!(list.get(&2), Some(20));
        assert_eq!(list.memory().used(), first_segment);
    }

    #[test]
    fn pinned_reader_defers_reclamation() {
        let list = quiet::<u32, String>();
        for key in 0..8 {
            list.insert(key, format!("v{key}")).unwrap();
        }

        let mut reader = list.iter();
        reader.seek(&3);
        assert_eq!(*reader.key(), 3);

        list.delete(&3).unwrap();
        list.delete(&4).unwrap();
        assert_eq!(list.stats().retired_pending, 2);

        // The unlinked node still leads the reader onwards.
        assert_eq!(reader.value(), "v3");
        reader.next();
        assert_eq!(*reader.key(), 4);
        reader.next();
        assert_eq!(*reader.key(), 5);
        drop(reader);

        assert_eq!(list.reclaim(), 2);
        let stats = list.stats();
        assert_eq!(stats.retired_pending, 0);
        assert_eq!(stats.slots_in_use, 6);
    }

    #[test]
    fn debug_lists_entries_in_order() {
        let list = quiet::<u32, &'static str>();
        list.insert(2, "world").unwrap();
        list.insert(1, "hello").unwrap();
        assert_eq!(format!("{list:?}"), r#"{1: "hello", 2: "world"}"#);
    }
}
