use super::{epoch::ReadGuard, node::NIL, SkipList};
use crate::{comparator::Comparator, memory::MemoryOwner};

/// Forward cursor over a [`SkipList`] in ascending key order.
///
/// Walks level-0 links. A fresh cursor is invalid until positioned with
/// [`seek_to_first`](Self::seek_to_first) or [`seek`](Self::seek); moving
/// past the last entry invalidates it again. Reading [`key`](Self::key) or
/// [`value`](Self::value) from an invalid cursor panics.
///
/// The cursor pins the list's reclamation epoch for its whole life, so
/// entries deleted while it is open stay readable through it.
pub struct Iter<'a, K, V, C, M: MemoryOwner> {
    list: &'a SkipList<K, V, C, M>,
    _guard: ReadGuard<'a>,
    node: u32,
}

impl<'a, K, V, C, M> Iter<'a, K, V, C, M>
where
    C: Comparator<K>,
    M: MemoryOwner,
{
    pub(super) fn new(list: &'a SkipList<K, V, C, M>) -> Self {
        Self {
            list,
            _guard: list.epoch.pin(),
            node: NIL,
        }
    }

    /// Whether the cursor points at an entry.
    #[inline]
    pub fn valid(&self) -> bool {
        self.node != NIL
    }

    /// Position at the smallest key.
    pub fn seek_to_first(&mut self) {
        self.node = self.list.next(super::node::HEAD, 0);
    }

    /// Position at the smallest key not less than `target`.
    pub fn seek(&mut self, target: &K) {
        self.node = self.list.lower_bound(target);
    }

    /// Step to the next entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not valid.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        assert!(self.valid(), "next on an invalid skip list cursor");
        // SAFETY: pinned for the cursor's lifetime.
        let node = unsafe { self.list.arena.node(self.node) };
        self.node = node.next(0);
    }

    /// Key at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not valid.
    pub fn key(&self) -> &K {
        assert!(self.valid(), "key on an invalid skip list cursor");
        // SAFETY: pinned for the cursor's lifetime.
        unsafe { &self.list.arena.node(self.node).key }
    }

    /// Value at the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not valid.
    pub fn value(&self) -> &V {
        assert!(self.valid(), "value on an invalid skip list cursor");
        // SAFETY: pinned for the cursor's lifetime.
        unsafe { &self.list.arena.node(self.node).value }
    }

    /// Turn the cursor into an [`Iterator`] of owned pairs, starting at the
    /// current position.
    pub fn entries(self) -> Entries<'a, K, V, C, M>
    where
        K: Clone,
        V: Clone,
    {
        Entries { cursor: self }
    }
}

/// Owned `(key, value)` pairs produced from an [`Iter`].
pub struct Entries<'a, K, V, C, M: MemoryOwner> {
    cursor: Iter<'a, K, V, C, M>,
}

impl<K, V, C, M> Iterator for Entries<'_, K, V, C, M>
where
    K: Clone,
    V: Clone,
    C: Comparator<K>,
    M: MemoryOwner,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.valid() {
            return None;
        }
        let item = (self.cursor.key().clone(), self.cursor.value().clone());
        self.cursor.next();
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use crate::SkipList;

    #[test]
    fn cursor_walks_in_order() {
        let list = SkipList::new();
        for key in [5u32, 1, 9, 3, 7] {
            list.insert(key, key * 10).unwrap();
        }

        let mut iter = list.iter();
        assert!(!iter.valid());
        iter.seek_to_first();
        let mut keys = Vec::new();
        while iter.valid() {
            assert_eq!(*iter.value(), *iter.key() * 10);
            keys.push(*iter.key());
            iter.next();
        }
        assert_eq!(keys, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn seek_lands_on_lower_bound() {
        let list = SkipList::new();
        for key in [10u32, 20, 30] {
            list.insert(key, ()).unwrap();
        }
        let mut iter = list.iter();
        iter.seek(&15);
        assert_eq!(*iter.key(), 20);
        iter.seek(&30);
        assert_eq!(*iter.key(), 30);
        iter.seek(&31);
        assert!(!iter.valid());
        iter.seek(&0);
        assert_eq!(iter.entries().map(|(k, _)| k).collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    #[should_panic(expected = "invalid skip list cursor")]
    fn reading_invalid_cursor_panics() {
        let list: SkipList<u32, u32> = SkipList::new();
        let mut iter = list.iter();
        iter.seek_to_first();
        let _ = iter.key();
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list: SkipList<u32, String> = SkipList::new();
        assert_eq!(list.entries().count(), 0);
    }
}
