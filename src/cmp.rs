use std::cmp::Ordering;

/// Total order used to arrange values in a [`SkipList`](crate::SkipList).
///
/// Implementations must be a strict total order over every value stored in the
/// same list; the list never checks this.
pub trait Comparator<K> {
    fn cmp(&self, a: &K, b: &K) -> Ordering;
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultComparator;

impl<K: Ord> Comparator<K> for DefaultComparator {
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders values by the reverse of their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseComparator;

impl<K: Ord> Comparator<K> for ReverseComparator {
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod tests {
    use crate::cmp::{Comparator, DefaultComparator, ReverseComparator};
    use std::cmp::Ordering;

    #[test]
    fn test_default_and_reverse() {
        assert_eq!(DefaultComparator.cmp(&1, &2), Ordering::Less);
        assert_eq!(ReverseComparator.cmp(&1, &2), Ordering::Greater);
        assert_eq!(ReverseComparator.cmp(&"abc", &"abc"), Ordering::Equal);
    }
}
