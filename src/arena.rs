//! Slot storage for skip list nodes.
//!
//! Links between nodes are [`NodeId`]s into the arena rather than pointers, so
//! several predecessors can refer to the same successor and unlinking a node
//! never leaves a dangling reference behind. The arena owns every node; ids
//! are plain non-owning handles. Freed slots are recycled through a free list.

/// Handle of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The low sentinel. Its `forward` has one slot per level of the list.
pub(crate) const HEAD: NodeId = NodeId(0);
/// The high sentinel. Its `forward` is always empty.
pub(crate) const TAIL: NodeId = NodeId(1);

#[derive(Debug)]
pub(crate) struct Node<K> {
    /// `None` for the sentinels and for vacant slots.
    pub(crate) key: Option<K>,
    pub(crate) multiplicity: usize,
    pub(crate) forward: Vec<NodeId>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, height: usize) -> Self {
        Self {
            key: Some(key),
            multiplicity: 1,
            forward: vec![TAIL; height],
        }
    }

    fn sentinel(height: usize) -> Self {
        Self {
            key: None,
            multiplicity: 0,
            forward: vec![TAIL; height],
        }
    }

    pub(crate) fn next(&self, level: usize) -> NodeId {
        self.forward[level]
    }

    pub(crate) fn set_next(&mut self, level: usize, node: NodeId) {
        self.forward[level] = node
    }

    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }

    /// A slot holding a stored value, as opposed to a sentinel or a freed slot.
    pub(crate) fn is_live(&self) -> bool {
        self.key.is_some()
    }
}

#[derive(Debug)]
pub(crate) struct NodeArena<K> {
    nodes: Vec<Node<K>>,
    free_list: Vec<NodeId>,
}

impl<K> NodeArena<K> {
    /// Creates an arena holding only the two sentinels, `HEAD` linked to `TAIL`
    /// on a single level.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 2);
        nodes.push(Node::sentinel(1));
        nodes.push(Node::sentinel(0));
        Self {
            nodes,
            free_list: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self.nodes[id.0] = node;
            id
        } else {
            let id = NodeId(self.nodes.len());
            self.nodes.push(node);
            id
        }
    }

    /// Vacates the slot and hands back the node that lived there.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<K> {
        debug_assert!(id != HEAD && id != TAIL, "sentinels are never freed");
        let node = std::mem::replace(&mut self.nodes[id.0], Node::sentinel(0));
        self.free_list.push(id);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.0]
    }

    /// Looks up an id that may be stale or out of range.
    pub(crate) fn try_get(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id.0)
    }

    /// Drops every stored node and returns to the two-sentinel state.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(2);
        self.nodes[HEAD.0] = Node::sentinel(1);
        self.free_list.clear();
    }

    /// Number of slots currently holding a stored value.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - 2 - self.free_list.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{Node, NodeArena, HEAD, TAIL};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sentinels() {
        let arena: NodeArena<u32> = NodeArena::with_capacity(4);
        assert_eq!(arena.get(HEAD).forward, vec![TAIL]);
        assert!(arena.get(TAIL).forward.is_empty());
        assert!(!arena.get(HEAD).is_live());
        assert_eq!(arena.live(), 0);
    }

    #[test]
    fn test_free_slots_are_recycled() {
        let mut arena = NodeArena::with_capacity(0);
        let a = arena.alloc(Node::new("a", 2));
        let b = arena.alloc(Node::new("b", 1));
        assert_eq!(arena.live(), 2);

        let freed = arena.free(a);
        assert_eq!(freed.key, Some("a"));
        assert!(!arena.get(a).is_live());
        assert_eq!(arena.live(), 1);

        let c = arena.alloc(Node::new("c", 3));
        assert_eq!(c, a);
        assert_eq!(arena.get(c).height(), 3);
        assert_eq!(arena.get(b).key, Some("b"));

        arena.clear();
        assert_eq!(arena.live(), 0);
        assert!(arena.try_get(b).is_none());
    }
}
