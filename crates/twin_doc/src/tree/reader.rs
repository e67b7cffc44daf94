use alloc::vec;
use alloc::vec::Vec;

use crate::{Key, Node, ReadCursor, Scalar};

/// What a read scope points at.
#[derive(Debug, Clone, Copy)]
enum Slot<'a> {
    Missing,
    /// The child exists but is not of the requested shape.
    Mismatched,
    Node(&'a Node),
}

/// A [`ReadCursor`] over a borrowed [`Node`] tree.
///
/// The cursor starts on the root node, which is expected to be an object.
///
/// # Examples
///
/// ```
/// use twin_doc::{Key, Node, ReadCursor, TreeReader};
///
/// let root = Node::object([("items", Node::Array(vec![Node::Null, Node::from(2_u32)]))]);
/// let mut reader = TreeReader::new(&root);
///
/// assert!(reader.begin_read_array(Key::Name("items")));
/// assert_eq!(reader.child_count(), 2);
///
/// assert!(reader.begin_read_object(Key::Index(0)));
/// assert!(reader.is_null());
/// reader.end_object();
///
/// // A scalar is not an object.
/// assert!(!reader.begin_read_object(Key::Index(1)));
/// reader.end_object();
///
/// reader.end_array();
/// assert_eq!(reader.depth(), 0);
/// ```
#[derive(Debug)]
pub struct TreeReader<'a> {
    stack: Vec<Slot<'a>>,
}

impl<'a> TreeReader<'a> {
    /// Creates a reader positioned on `root`.
    pub fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![Slot::Node(root)],
        }
    }

    /// Number of scopes currently open, the root excluded.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    #[inline]
    fn current(&self) -> Slot<'a> {
        self.stack.last().copied().unwrap_or(Slot::Missing)
    }

    fn begin(&mut self, key: Key<'_>, accepts: fn(&Node) -> bool) -> bool {
        let child = match self.current() {
            Slot::Node(parent) => parent.get(key),
            Slot::Missing | Slot::Mismatched => None,
        };

        let (slot, entered) = match child {
            None => (Slot::Missing, true),
            Some(node) if node.is_null() || accepts(node) => (Slot::Node(node), true),
            Some(_) => (Slot::Mismatched, false),
        };

        self.stack.push(slot);
        entered
    }

    fn end(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            log::warn!("TreeReader: scope closed at the document root");
        }
    }
}

impl ReadCursor for TreeReader<'_> {
    #[inline]
    fn begin_read_object(&mut self, key: Key<'_>) -> bool {
        self.begin(key, |node| matches!(node, Node::Object(_)))
    }

    #[inline]
    fn begin_read_array(&mut self, key: Key<'_>) -> bool {
        self.begin(key, |node| matches!(node, Node::Array(_)))
    }

    #[inline]
    fn begin_read_value(&mut self, key: Key<'_>) -> bool {
        self.begin(key, |node| matches!(node, Node::Value(_)))
    }

    #[inline]
    fn end_object(&mut self) {
        self.end();
    }

    #[inline]
    fn end_array(&mut self) {
        self.end();
    }

    #[inline]
    fn end_value(&mut self) {
        self.end();
    }

    #[inline]
    fn is_missing(&self) -> bool {
        matches!(self.current(), Slot::Missing)
    }

    #[inline]
    fn is_null(&self) -> bool {
        matches!(self.current(), Slot::Node(Node::Null))
    }

    fn child_count(&self) -> usize {
        match self.current() {
            Slot::Node(node) => node.len(),
            Slot::Missing | Slot::Mismatched => 0,
        }
    }

    fn scalar(&self) -> Option<&Scalar> {
        match self.current() {
            Slot::Node(node) => node.as_scalar(),
            Slot::Missing | Slot::Mismatched => None,
        }
    }
}
