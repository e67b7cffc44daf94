use alloc::string::String;
use alloc::vec::Vec;

use crate::{Key, Scalar};

/// A node of the in-memory document tree.
///
/// Objects keep their fields in insertion order. Lookups return the first
/// field with a matching name.
///
/// # Examples
///
/// ```
/// use twin_doc::{Key, Node, Scalar};
///
/// let node = Node::object([
///     ("name", Node::from("probe")),
///     ("tags", Node::Array(vec![Node::from(1_i32), Node::Null])),
/// ]);
///
/// assert_eq!(node.get(Key::Name("name")).and_then(Node::as_scalar), Some(&Scalar::from("probe")));
/// assert_eq!(node.get(Key::Name("tags")).map(Node::len), Some(2));
/// assert!(node.get(Key::Name("other")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Value(Scalar),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl Node {
    /// Builds an object from `(name, node)` pairs.
    pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, Node)>) -> Self {
        Node::Object(
            fields
                .into_iter()
                .map(|(name, node)| (String::from(name), node))
                .collect(),
        )
    }

    /// Returns the child at `key`.
    ///
    /// Names only address object fields and indices only address array
    /// elements.
    pub fn get(&self, key: Key<'_>) -> Option<&Node> {
        match (self, key) {
            (Node::Object(fields), Key::Name(name)) => fields
                .iter()
                .find_map(|(field, node)| (field == name).then_some(node)),
            (Node::Array(items), Key::Index(index)) => items.get(index),
            _ => None,
        }
    }

    /// Number of children, zero for scalars and null.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Node::Array(items) => items.len(),
            Node::Object(fields) => fields.len(),
            Node::Null | Node::Value(_) => 0,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Value(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<Scalar> for Node {
    #[inline]
    fn from(value: Scalar) -> Self {
        Node::Value(value)
    }
}

macro_rules! impl_from_for_node {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                #[inline]
                fn from(value: $ty) -> Self {
                    Node::Value(Scalar::from(value))
                }
            }
        )+
    };
}

impl_from_for_node!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, &str);
