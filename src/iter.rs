use crate::arena::{NodeArena, NodeId, HEAD, TAIL};
use crate::cmp::Comparator;
use crate::skiplist::SkipList;
use std::iter::FusedIterator;

/// A stored value as seen from outside the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a, K> {
    pub value: &'a K,
    /// Number of insertions of `value` not yet deleted, at least 1.
    pub multiplicity: usize,
    /// Number of levels the value's node sits on.
    pub height: usize,
}

/// Ascending walk over level 0.
///
/// Created by [`SkipList::iter`]. Each call starts a fresh pass.
pub struct Iter<'a, K> {
    arena: &'a NodeArena<K>,
    node: NodeId,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(arena: &'a NodeArena<K>, len: usize) -> Self {
        Self {
            arena,
            node: arena.get(HEAD).next(0),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = Entry<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = arena.get(self.node);
        // only the tail sentinel has no levels
        if node.height() == 0 {
            return None;
        }
        let value = node.key.as_ref()?;
        self.node = node.next(0);
        self.remaining = self.remaining.saturating_sub(1);
        Some(Entry {
            value,
            multiplicity: node.multiplicity,
            height: node.height(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// A seekable position over the values of a list.
pub trait Cursor {
    type Key;
    type Item;
    fn valid(&self) -> bool;
    fn prev(&mut self);
    fn next(&mut self);
    fn current(&self) -> Option<Self::Item>;
    /// Moves to the first value not below `target`.
    fn seek(&mut self, target: &Self::Key);
    fn seek_to_first(&mut self);
    fn seek_to_last(&mut self);
}

/// [`Cursor`] over a [`SkipList`].
///
/// A fresh cursor sits before the first value; [`Cursor::next`] moves onto it.
/// Stepping past either end leaves the cursor invalid, and stepping back in
/// from past the end lands on the last value.
pub struct ListCursor<'a, K, C, H> {
    list: &'a SkipList<K, C, H>,
    node: NodeId,
}

impl<'a, K, C, H> ListCursor<'a, K, C, H> {
    pub(crate) fn new(list: &'a SkipList<K, C, H>) -> Self {
        Self { list, node: HEAD }
    }
}

impl<'a, K, C, H> Cursor for ListCursor<'a, K, C, H>
where
    C: Comparator<K>,
{
    type Key = K;
    type Item = Entry<'a, K>;

    fn valid(&self) -> bool {
        self.node != HEAD && self.node != TAIL
    }

    fn prev(&mut self) {
        let list = self.list;
        self.node = match list.entry(self.node) {
            Some(entry) => list.find_less_than(entry.value),
            None if self.node == TAIL => list.find_last(),
            None => HEAD,
        };
    }

    fn next(&mut self) {
        if self.node != TAIL {
            self.node = self.list.next_of(self.node);
        }
    }

    fn current(&self) -> Option<Self::Item> {
        self.list.entry(self.node)
    }

    fn seek(&mut self, target: &K) {
        self.node = self.list.find_greater_or_equal(target);
    }

    fn seek_to_first(&mut self) {
        self.node = self.list.next_of(HEAD);
    }

    fn seek_to_last(&mut self) {
        self.node = self.list.find_last();
    }
}

#[cfg(test)]
mod tests {
    use crate::iter::Cursor;
    use crate::test_utils::make_skiplist;
    use pretty_assertions::assert_eq;

    fn make_words() -> crate::SkipList<&'static str, crate::DefaultComparator, crate::Fixed> {
        let keys = vec![
            "aba", "abb", "abc", "abd", "abe", "abf", "abg", "abh", "abi", "abj", "abk", "abl",
            "abm", "abn", "abo", "abp", "abq", "abr", "abs", "abt", "abu", "abv", "abw", "abx",
            "aby", "abz",
        ];
        let mut list = crate::SkipList::with_height_source(
            crate::DefaultComparator,
            crate::Fixed::new(vec![1, 3, 1, 2, 1, 1, 4, 2]),
        );
        list.extend(keys);
        list
    }

    #[test]
    fn test_iter_ascending() {
        let list = make_skiplist(&[2, 1, 3, 1], &[40, 10, 30, 20, 10]);
        let got: Vec<_> = list.iter().map(|e| (*e.value, e.multiplicity)).collect();
        assert_eq!(got, vec![(10, 2), (20, 1), (30, 1), (40, 1)]);
        assert_eq!(list.iter().len(), 4);

        // restartable
        assert_eq!(list.iter().count(), 4);
        let mut iter = list.iter();
        iter.by_ref().for_each(drop);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_into_iter() {
        let list = make_skiplist(&[1, 2], &[3, 1, 2]);
        let mut got = Vec::new();
        for entry in &list {
            got.push(*entry.value);
        }
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn test_cursor_walk() {
        let list = make_words();
        let mut cursor = list.cursor();
        assert!(!cursor.valid());
        cursor.next();
        assert!(cursor.valid());
        assert_eq!(cursor.current().map(|e| *e.value), Some("aba"));

        cursor.seek(&"abz");
        assert_eq!(cursor.current().map(|e| *e.value), Some("abz"));
        cursor.seek(&"abcc");
        assert_eq!(cursor.current().map(|e| *e.value), Some("abd"));
        cursor.prev();
        assert_eq!(cursor.current().map(|e| *e.value), Some("abc"));

        cursor.seek(&"");
        assert_eq!(cursor.current().map(|e| *e.value), Some("aba"));
        cursor.prev();
        assert!(!cursor.valid());
        assert_eq!(cursor.current(), None);
        cursor.prev();
        assert!(!cursor.valid());

        cursor.seek(&"ab{");
        assert!(!cursor.valid());
        cursor.next();
        assert!(!cursor.valid());
        cursor.prev();
        assert_eq!(cursor.current().map(|e| *e.value), Some("abz"));
    }

    #[test]
    fn test_cursor_ends() {
        let list = make_words();
        let mut cursor = list.cursor();
        cursor.seek_to_last();
        assert_eq!(cursor.current().map(|e| *e.value), Some("abz"));
        cursor.seek_to_first();
        assert_eq!(cursor.current().map(|e| *e.value), Some("aba"));

        let mut count = 0;
        while cursor.valid() {
            count += 1;
            cursor.next();
        }
        assert_eq!(count, 26);
    }

    #[test]
    fn test_cursor_on_empty() {
        let list = make_skiplist(&[1], &[]);
        let mut cursor = list.cursor();
        cursor.seek_to_first();
        assert!(!cursor.valid());
        cursor.seek_to_last();
        assert!(!cursor.valid());
        cursor.seek(&5);
        assert!(!cursor.valid());
    }
}
