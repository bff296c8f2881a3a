//! Key ordering used by the skip list.
//!
//! A comparator must be a strict total order and must keep answering the same
//! way for the same pair of keys for as long as the list is alive.

use std::cmp::Ordering;

/// Three-way comparison over keys of type `K`.
pub trait Comparator<K: ?Sized>: Send + Sync {
    /// Compare `a` against `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrdComparator;

impl<K: Ord + ?Sized> Comparator<K> for OrdComparator {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by their raw bytes, lexicographically.
#[derive(Clone, Copy, Debug, Default)]
pub struct BytewiseComparator;

impl<K: AsRef<[u8]> + ?Sized> Comparator<K> for BytewiseComparator {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.as_ref().cmp(b.as_ref())
    }
}

/// Inverts the order of the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseComparator<C>(
    /// Comparator whose order is inverted.
    pub C,
);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for ReverseComparator<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_comparators() {
        assert_eq!(OrdComparator.compare(&1u64, &2u64), Ordering::Less);
        assert_eq!(OrdComparator.compare("b", "a"), Ordering::Greater);
        assert_eq!(
            BytewiseComparator.compare(&b"abc".to_vec(), &b"abd".to_vec()),
            Ordering::Less
        );
        assert_eq!(
            ReverseComparator(OrdComparator).compare(&1i32, &2i32),
            Ordering::Greater
        );
    }

    #[test]
    fn closure_comparator() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert_eq!(
            by_len.compare(&"aaa".to_string(), &"b".to_string()),
            Ordering::Greater
        );
        assert_eq!(by_len.compare(&"ab".to_string(), &"cd".to_string()), Ordering::Equal);
    }
}
