//! ListArena: arena storage for singly linked lists with handle-based links.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Handle to a list node. Equality is node identity, not value equality;
/// two handles compare equal only when they name the same live slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeRef(pub(crate) DefaultKey);

impl NodeRef {
    /// Value stored at this node, or `None` if the node has been released.
    pub fn value(&self, arena: &ListArena) -> Option<i64> {
        arena.nodes.get(self.0).map(|n| n.value)
    }

    /// Successor of this node, or `None` at the end of a list (and for a
    /// released node).
    pub fn next(&self, arena: &ListArena) -> Option<NodeRef> {
        arena.nodes.get(self.0).and_then(|n| n.next)
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) next: Option<NodeRef>,
}

/// Node storage shared by any number of singly linked lists.
///
/// A list is identified by its head `Option<NodeRef>`; `None` is the empty
/// list. Lists in one arena may deliberately share tails or contain cycles
/// (see `set_next`); the algorithms that accept those shapes say so, all
/// others require well-formed acyclic inputs.
pub struct ListArena {
    pub(crate) nodes: SlotMap<DefaultKey, Node>,
}

impl ListArena {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of live nodes across all lists in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn alloc(&mut self, value: i64) -> NodeRef {
        NodeRef(self.nodes.insert(Node { value, next: None }))
    }

    pub(crate) fn value_of(&self, node: NodeRef) -> i64 {
        self.nodes[node.0].value
    }

    /// Insert a fresh node holding `value` immediately after `node`,
    /// preserving `node`'s old successor. With no node given, the fresh
    /// node is a standalone single-element list. Returns the fresh node.
    pub fn push_back(&mut self, node: Option<NodeRef>, value: i64) -> NodeRef {
        let fresh = self.alloc(value);
        if let Some(n) = node {
            let old_next = self.nodes[n.0].next;
            self.nodes[n.0].next = Some(fresh);
            self.nodes[fresh.0].next = old_next;
        }
        fresh
    }

    /// Build a list from a value sequence by repeated append, returning the
    /// head (`None` for an empty sequence).
    pub fn from_values(&mut self, values: &[i64]) -> Option<NodeRef> {
        let mut head = None;
        let mut tail = None;
        for &value in values {
            let fresh = self.push_back(tail, value);
            if head.is_none() {
                head = Some(fresh);
            }
            tail = Some(fresh);
        }
        head
    }

    /// Rewire `node`'s successor. This is the escape hatch for building the
    /// shared-tail and cyclic shapes `intersection_node` and `detect_cycle`
    /// operate on; it can make a list ill-formed for everything else.
    pub fn set_next(&mut self, node: NodeRef, next: Option<NodeRef>) {
        self.nodes[node.0].next = next;
    }

    /// Release every node reachable from `head`. No-op on the empty list.
    /// Terminates on cyclic lists: a slot released on the first visit ends
    /// the walk when reached again.
    pub fn clear(&mut self, head: Option<NodeRef>) {
        let mut cur = head;
        while let Some(n) = cur {
            cur = self.nodes.remove(n.0).and_then(|node| node.next);
        }
    }

    /// Node count of the list at `head`. Requires an acyclic list.
    pub fn len_of(&self, head: Option<NodeRef>) -> usize {
        let mut count = 0;
        let mut cur = head;
        while let Some(n) = cur {
            count += 1;
            cur = self.nodes[n.0].next;
        }
        count
    }

    /// Values of the list at `head`, front to back. Requires an acyclic
    /// list.
    pub fn values(&self, head: Option<NodeRef>) -> Vec<i64> {
        let mut out = Vec::new();
        let mut cur = head;
        while let Some(n) = cur {
            out.push(self.nodes[n.0].value);
            cur = self.nodes[n.0].next;
        }
        out
    }

    /// Diagnostic print adapter: space-separated values terminated by a
    /// newline.
    pub fn display(&self, head: Option<NodeRef>) -> ListDisplay<'_> {
        ListDisplay { arena: self, head }
    }
}

impl Default for ListArena {
    fn default() -> Self {
        Self::new()
    }
}

/// See [`ListArena::display`].
pub struct ListDisplay<'a> {
    arena: &'a ListArena,
    head: Option<NodeRef>,
}

impl fmt::Display for ListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cur = self.head;
        let mut first = true;
        while let Some(n) = cur {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", self.arena.value_of(n))?;
            first = false;
            cur = n.next(self.arena);
        }
        writeln!(f)
    }
}
