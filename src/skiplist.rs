use crate::arena::{Node, NodeArena, NodeId, HEAD, TAIL};
use crate::cmp::{Comparator, DefaultComparator};
use crate::ensure;
use crate::error::Error;
use crate::height::{CoinFlip, HeightSource};
use crate::iter::{Entry, Iter, ListCursor};
use crate::options::SkipListOptions;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

/// Ordered multiset of `K`.
///
/// Each distinct value is stored once together with its multiplicity, so
/// [`len`](SkipList::len) counts distinct values while
/// [`total_len`](SkipList::total_len) counts every insertion.
pub struct SkipList<K, C = DefaultComparator, H = CoinFlip> {
    cmp: C,
    arena: NodeArena<K>,
    heights: H,
    len: usize,
    total: usize,
}

impl<K: Ord> SkipList<K> {
    pub fn new() -> Self {
        Self::with_options(SkipListOptions::default())
    }

    pub fn with_options(options: SkipListOptions) -> Self {
        let heights = match options.seed {
            Some(seed) => CoinFlip::seeded(seed),
            None => CoinFlip::from_entropy(),
        };
        let mut list = Self::with_height_source(DefaultComparator, heights);
        list.arena = NodeArena::with_capacity(options.capacity);
        list
    }
}

impl<K: Ord> Default for SkipList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C, H> SkipList<K, C, H> {
    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of insertions still accounted for, duplicates included.
    pub fn total_len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently maintained, never below 1.
    pub fn height(&self) -> usize {
        self.arena.get(HEAD).height()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.len = 0;
        self.total = 0;
    }

    pub fn first(&self) -> Option<Entry<'_, K>> {
        self.entry(self.arena.get(HEAD).next(0))
    }

    pub fn last(&self) -> Option<Entry<'_, K>> {
        self.entry(self.find_last())
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.len)
    }

    /// Distinct values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|entry| entry.value)
    }

    /// Every stored value in ascending order, each repeated by its multiplicity.
    pub fn values_with_duplicates(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter()
            .flat_map(|entry| std::iter::repeat(entry.value).take(entry.multiplicity))
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<Entry<'_, K>> {
        let node = self.arena.get(id);
        node.key.as_ref().map(|value| Entry {
            value,
            multiplicity: node.multiplicity,
            height: node.height(),
        })
    }

    pub(crate) fn next_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).next(0)
    }

    /// Rightmost node, found by running along each level from the top down.
    /// Returns `HEAD` when the list is empty.
    pub(crate) fn find_last(&self) -> NodeId {
        let mut current = HEAD;
        let mut level = self.height() - 1;
        loop {
            let next = self.arena.get(current).next(level);
            if next != TAIL {
                current = next;
                continue;
            }
            if level == 0 {
                break;
            }
            level -= 1;
        }
        current
    }
}

impl<K, C, H> SkipList<K, C, H>
where
    C: Comparator<K>,
{
    fn is_before(&self, id: NodeId, key: &K) -> bool {
        match &self.arena.get(id).key {
            Some(k) => self.cmp.cmp(k, key) == Ordering::Less,
            None => false,
        }
    }

    fn holds(&self, id: NodeId, key: &K) -> bool {
        match &self.arena.get(id).key {
            Some(k) => self.cmp.cmp(k, key) == Ordering::Equal,
            None => false,
        }
    }

    /// For every level `h`, the last node on that level whose value is below
    /// `key` (`HEAD` when there is none). The walk starts at the top level and
    /// carries its position down from one level to the next.
    pub(crate) fn search_path(&self, key: &K) -> Vec<NodeId> {
        let height = self.height();
        let mut path = vec![HEAD; height];
        let mut current = HEAD;
        let mut level = height - 1;
        loop {
            let next = self.arena.get(current).next(level);
            if self.is_before(next, key) {
                current = next;
                continue;
            }
            path[level] = current;
            if level == 0 {
                break;
            }
            level -= 1;
        }
        path
    }

    /// The node holding `key`, if any.
    fn find(&self, key: &K) -> Option<NodeId> {
        let path = self.search_path(key);
        let target = self.arena.get(path[0]).next(0);
        self.holds(target, key).then_some(target)
    }

    /// Last node below `key`, `HEAD` if none.
    pub(crate) fn find_less_than(&self, key: &K) -> NodeId {
        self.search_path(key)[0]
    }

    /// First node at or above `key`, `TAIL` if none.
    pub(crate) fn find_greater_or_equal(&self, key: &K) -> NodeId {
        let path = self.search_path(key);
        self.arena.get(path[0]).next(0)
    }

    pub fn search(&self, key: &K) -> Option<Entry<'_, K>> {
        self.find(key).and_then(|id| self.entry(id))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// How many times `key` is currently stored, 0 if absent.
    pub fn multiplicity(&self, key: &K) -> usize {
        self.search(key).map_or(0, |entry| entry.multiplicity)
    }

    pub fn cursor(&self) -> ListCursor<'_, K, C, H> {
        ListCursor::new(self)
    }

    /// Walks every level and verifies the structural invariants: each level
    /// strictly ascends, a node sits on exactly the levels below its height,
    /// the global height covers every node and has a non-empty top level
    /// (unless it is 1), and the counters match what is stored.
    pub fn check(&self) -> crate::Result<()> {
        let height = self.height();
        let mut expected = vec![0_usize; height];
        let mut distinct = 0;
        let mut total = 0;

        for level in 0..height {
            let mut found = 0;
            let mut prev: Option<&K> = None;
            let mut current = self.arena.get(HEAD).next(level);
            while current != TAIL {
                let node = self
                    .arena
                    .try_get(current)
                    .filter(|node| node.is_live() && node.height() > level)
                    .ok_or(Error::DanglingLink { level })?;
                if let (Some(prev), Some(key)) = (prev, node.key.as_ref()) {
                    ensure!(
                        self.cmp.cmp(prev, key) == Ordering::Less,
                        Error::Unordered { level }
                    );
                }
                if level == 0 {
                    ensure!(
                        node.height() <= height,
                        Error::TooShort {
                            height,
                            element: node.height(),
                        }
                    );
                    for count in expected.iter_mut().take(node.height()) {
                        *count += 1;
                    }
                    distinct += 1;
                    total += node.multiplicity;
                }
                prev = node.key.as_ref();
                current = node.next(level);
                found += 1;
            }
            ensure!(
                found == expected[level],
                Error::LevelCount {
                    level,
                    expected: expected[level],
                    found,
                }
            );
        }

        ensure!(
            height == 1 || self.arena.get(HEAD).next(height - 1) != TAIL,
            Error::EmptyTopLevel { height }
        );
        ensure!(
            distinct == self.len && distinct == self.arena.live(),
            Error::CountMismatch {
                expected: self.len,
                found: distinct,
            }
        );
        ensure!(
            total == self.total,
            Error::TotalMismatch {
                expected: self.total,
                found: total,
            }
        );
        Ok(())
    }
}

impl<K, C, H> SkipList<K, C, H>
where
    C: Comparator<K>,
    H: HeightSource,
{
    pub fn with_height_source(cmp: C, heights: H) -> Self {
        Self {
            cmp,
            arena: NodeArena::with_capacity(0),
            heights,
            len: 0,
            total: 0,
        }
    }

    /// Adds one occurrence of `key`. Returns `true` if `key` was not present
    /// before.
    pub fn insert(&mut self, key: K) -> bool {
        let mut path = self.search_path(&key);
        let target = self.arena.get(path[0]).next(0);
        self.total += 1;

        if self.holds(target, &key) {
            self.arena.get_mut(target).multiplicity += 1;
            return false;
        }

        let height = self.heights.next_height().max(1);
        self.grow(&mut path, height);

        let node = self.arena.alloc(Node::new(key, height));
        for (level, &prev) in path.iter().enumerate().take(height) {
            let next = self.arena.get(prev).next(level);
            self.arena.get_mut(node).set_next(level, next);
            self.arena.get_mut(prev).set_next(level, node);
        }

        self.len += 1;
        true
    }

    /// Removes one occurrence of `key`. Returns `false` if `key` was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let path = self.search_path(key);
        let target = self.arena.get(path[0]).next(0);
        if !self.holds(target, key) {
            return false;
        }

        self.total -= 1;
        let node = self.arena.get_mut(target);
        if node.multiplicity > 1 {
            node.multiplicity -= 1;
            return true;
        }
        self.unlink(&path, target);
        true
    }

    /// Removes every occurrence of `key` and returns how many there were.
    pub fn remove_all(&mut self, key: &K) -> usize {
        let path = self.search_path(key);
        let target = self.arena.get(path[0]).next(0);
        if !self.holds(target, key) {
            return 0;
        }

        let removed = self.arena.get(target).multiplicity;
        self.total -= removed;
        self.unlink(&path, target);
        removed
    }

    /// Adds levels on top of the list until it is `height` tall. Nothing sits
    /// on a new level yet, so `HEAD` is its predecessor in `path`.
    fn grow(&mut self, path: &mut Vec<NodeId>, height: usize) {
        let head = self.arena.get_mut(HEAD);
        while head.height() < height {
            head.forward.push(TAIL);
            path.push(HEAD);
        }
    }

    /// Drops every level from `level` upward, keeping at least one.
    fn shrink(&mut self, level: usize) {
        self.arena.get_mut(HEAD).forward.truncate(level.max(1));
    }

    /// Splices `target` out of every level it sits on and frees it.
    ///
    /// The first level where `HEAD` ends up pointing straight at `TAIL` is the
    /// new top of the list: a node on any higher level would also sit on this
    /// one.
    fn unlink(&mut self, path: &[NodeId], target: NodeId) {
        let height = self.arena.get(target).height();
        for (level, &prev) in path.iter().enumerate().take(height) {
            let next = self.arena.get(target).next(level);
            self.arena.get_mut(prev).set_next(level, next);
            if prev == HEAD && next == TAIL {
                self.shrink(level);
                break;
            }
        }
        self.arena.free(target);
        self.len -= 1;
    }
}

impl<K, C, H> Extend<K> for SkipList<K, C, H>
where
    C: Comparator<K>,
    H: HeightSource,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for SkipList<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<'a, K, C, H> IntoIterator for &'a SkipList<K, C, H> {
    type Item = Entry<'a, K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Debug, C, H> Debug for SkipList<K, C, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for entry in self.iter() {
            map.entry(entry.value, &entry.multiplicity);
        }
        map.finish()
    }
}
