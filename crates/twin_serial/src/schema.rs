use crate::Serializer;

/// Plain function form of a per-element callback.
///
/// Useful to pick a layout at runtime, e.g. to keep reading an older
/// document version.
///
/// # Examples
///
/// ```
/// use twin_doc::{FieldOptions, Key, Node, TreeReader};
/// use twin_serial::{Serializer, TypeSerializer};
///
/// fn current(value: &mut u32, s: &mut Serializer<'_>) {
///     s.value("id", value, FieldOptions::NONE);
/// }
///
/// fn legacy(value: &mut u32, s: &mut Serializer<'_>) {
///     s.value("uid", value, FieldOptions::NONE);
/// }
///
/// let root = Node::object([("item", Node::object([("uid", Node::from(4_u32))]))]);
/// let is_legacy = root
///     .get(Key::Name("item"))
///     .and_then(|item| item.get(Key::Name("uid")))
///     .is_some();
/// let layout: TypeSerializer<u32> = if is_legacy { legacy } else { current };
///
/// let mut reader = TreeReader::new(&root);
/// let mut serializer = Serializer::reader(&mut reader);
/// let mut item = 0;
/// assert!(serializer.struct_field("item", &mut item, FieldOptions::NONE, layout).is_ok());
/// assert_eq!(item, 4);
/// ```
pub type TypeSerializer<T> = fn(&mut T, &mut Serializer<'_>);

/// A value type whose fields are described once for both directions.
///
/// `serialize` runs against a [`Serializer`] that is either reading or
/// writing; every field call reads into or writes from `self`.
///
/// # Examples
///
/// ```
/// use twin_doc::FieldOptions;
/// use twin_serial::{Schema, Serializer};
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Schema for Point {
///     fn serialize(&mut self, s: &mut Serializer<'_>) {
///         s.value("x", &mut self.x, FieldOptions::NONE);
///         s.value_or("y", &mut self.y, &0, FieldOptions::OPTIONAL);
///     }
/// }
///
/// let mut point = Point { x: 4, y: 0 };
/// let node = twin_serial::to_node(&mut point).unwrap();
/// let back: Point = twin_serial::from_node(&node).unwrap();
/// assert_eq!(back, point);
/// ```
pub trait Schema {
    fn serialize(&mut self, serializer: &mut Serializer<'_>);
}
