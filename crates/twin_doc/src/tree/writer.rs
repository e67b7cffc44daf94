use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{FieldOptions, Node, Scalar, WriteCursor};

/// A node under construction, with the key it will be attached under.
#[derive(Debug)]
struct Pending {
    key: Option<String>,
    node: Node,
}

/// A [`WriteCursor`] building an owned [`Node`] tree.
///
/// The root is an object. Call [`finish`](Self::finish) to take the tree.
///
/// # Examples
///
/// ```
/// use twin_doc::{FieldOptions, Node, TreeWriter, WriteCursor};
///
/// let mut writer = TreeWriter::new();
/// writer.begin_write_array(Some("items"));
/// writer.declare_child_count(2);
/// writer.write_scalar(None, 1_u32.into(), FieldOptions::NONE);
/// writer.write_null(None);
/// writer.end_array();
///
/// let root = writer.finish();
/// assert_eq!(
///     root,
///     Node::object([("items", Node::Array(vec![Node::from(1_u32), Node::Null]))]),
/// );
/// ```
#[derive(Debug)]
pub struct TreeWriter {
    stack: Vec<Pending>,
    explicit_null: bool,
}

impl TreeWriter {
    /// Creates a writer for an empty root object.
    pub fn new() -> Self {
        Self {
            stack: vec![Pending {
                key: None,
                node: Node::Object(Vec::new()),
            }],
            explicit_null: false,
        }
    }

    /// Makes [`requires_explicit_null`](WriteCursor::requires_explicit_null)
    /// return `true`, so optional fields equal to their default are written
    /// as null instead of being omitted.
    pub fn with_explicit_nulls(mut self) -> Self {
        self.explicit_null = true;
        self
    }

    /// Number of scopes currently open, the root excluded.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Closes any scope left open and returns the root node.
    pub fn finish(mut self) -> Node {
        if self.depth() > 0 {
            log::warn!("TreeWriter: {} scope(s) left open, closing them", self.depth());
        }
        while self.depth() > 0 {
            self.close();
        }
        self.stack.pop().map(|root| root.node).unwrap_or_default()
    }

    fn open(&mut self, key: Option<&str>, node: Node) {
        self.stack.push(Pending {
            key: key.map(String::from),
            node,
        });
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            log::warn!("TreeWriter: scope closed at the document root");
            return;
        }
        if let Some(Pending { key, node }) = self.stack.pop() {
            self.attach(key, node);
        }
    }

    fn attach(&mut self, key: Option<String>, node: Node) {
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        match &mut parent.node {
            Node::Object(fields) => fields.push((key.unwrap_or_default(), node)),
            Node::Array(items) => items.push(node),
            Node::Null | Node::Value(_) => {
                log::warn!("TreeWriter: dropped a node written into a scalar");
            }
        }
    }
}

impl Default for TreeWriter {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl WriteCursor for TreeWriter {
    #[inline]
    fn begin_write_object(&mut self, key: Option<&str>) {
        self.open(key, Node::Object(Vec::new()));
    }

    #[inline]
    fn begin_write_array(&mut self, key: Option<&str>) {
        self.open(key, Node::Array(Vec::new()));
    }

    #[inline]
    fn end_object(&mut self) {
        self.close();
    }

    #[inline]
    fn end_array(&mut self) {
        self.close();
    }

    fn declare_child_count(&mut self, count: usize) {
        if let Some(Pending {
            node: Node::Array(items),
            ..
        }) = self.stack.last_mut()
        {
            items.reserve(count);
        }
    }

    #[inline]
    fn write_scalar(&mut self, key: Option<&str>, value: Scalar, _options: FieldOptions) {
        self.attach(key.map(String::from), Node::Value(value));
    }

    #[inline]
    fn write_null(&mut self, key: Option<&str>) {
        self.attach(key.map(String::from), Node::Null);
    }

    #[inline]
    fn requires_explicit_null(&self) -> bool {
        self.explicit_null
    }
}
