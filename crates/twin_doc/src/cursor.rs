use crate::{FieldOptions, Key, Presence, Scalar};

// -----------------------------------------------------------------------------
// ReadCursor

/// Navigation protocol of a document being read.
///
/// A cursor points at one node. `begin_read_*` moves it to a child and
/// always pushes a scope, even when the child is missing or has the wrong
/// shape, so every `begin_read_*` must be paired with the matching `end_*`.
///
/// The `begin_read_*` methods return `false` when the child exists but is
/// not of the requested shape. A missing or null child is not a mismatch,
/// it is reported through [`is_missing`](Self::is_missing) and
/// [`is_null`](Self::is_null).
pub trait ReadCursor {
    /// Enters the child at `key`, expecting an object.
    fn begin_read_object(&mut self, key: Key<'_>) -> bool;

    /// Enters the child at `key`, expecting an array.
    fn begin_read_array(&mut self, key: Key<'_>) -> bool;

    /// Enters the child at `key`, expecting a scalar.
    fn begin_read_value(&mut self, key: Key<'_>) -> bool;

    fn end_object(&mut self);

    fn end_array(&mut self);

    fn end_value(&mut self);

    /// Returns `true` if the current node does not exist.
    fn is_missing(&self) -> bool;

    /// Returns `true` if the current node exists and is null.
    fn is_null(&self) -> bool;

    /// Number of children of the current node.
    fn child_count(&self) -> usize;

    /// The scalar held by the current node, if any.
    fn scalar(&self) -> Option<&Scalar>;

    /// Classifies the current node.
    #[inline]
    fn presence(&self) -> Presence {
        if self.is_missing() {
            Presence::Missing
        } else if self.is_null() {
            Presence::Null
        } else {
            Presence::Present
        }
    }
}

// -----------------------------------------------------------------------------
// WriteCursor

/// Navigation protocol of a document being written.
///
/// A `key` of `None` appends to the current array, `Some(name)` inserts
/// into the current object.
pub trait WriteCursor {
    fn begin_write_object(&mut self, key: Option<&str>);

    fn begin_write_array(&mut self, key: Option<&str>);

    fn end_object(&mut self);

    fn end_array(&mut self);

    /// Announces the number of elements of the array just opened.
    ///
    /// Streaming backends use it to preallocate or to emit a length prefix.
    fn declare_child_count(&mut self, count: usize);

    fn write_scalar(&mut self, key: Option<&str>, value: Scalar, options: FieldOptions);

    fn write_null(&mut self, key: Option<&str>);

    /// Returns `true` if the backend cannot represent an omitted field and
    /// must always write an explicit null instead.
    fn requires_explicit_null(&self) -> bool;
}
