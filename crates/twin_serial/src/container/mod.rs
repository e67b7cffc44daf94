//! Container adapters for the collection composer.
//!
//! One traversal drives every collection shape. A shape only has to say how
//! to get an empty destination of the right size, how to put a decoded
//! element into it, and how to iterate it for writing.
//!
//! ## Implemented Menu
//!
//! - list: `Vec<T>`
//! - fixed-size array: `Box<[T]>`, resized to the element count on read
//! - set: `BTreeSet<T>`, `hashbrown::HashSet<T, S>`,
//!   `std::collections::HashSet<T, S>` ("std" feature)
//! - map: `BTreeMap<K, V>`, `hashbrown::HashMap<K, V, S>`,
//!   `std::collections::HashMap<K, V, S>` ("std" feature)

// -----------------------------------------------------------------------------
// Modules

mod alloc;
mod hash;

crate::cfg::std! { mod std; }

// -----------------------------------------------------------------------------
// Traits

/// Shared part of every container shape.
pub trait Container: Sized {
    /// Number of elements or entries.
    fn len(&self) -> usize;

    /// Turns `slot` into an empty container ready for `count` elements.
    ///
    /// An existing container is cleared and reused where the shape allows
    /// it, otherwise a new one is allocated.
    fn prepare(slot: &mut Option<Self>, count: usize) -> &mut Self;
}

/// A container of value-type elements: list, array or set.
pub trait Sequence: Container {
    type Item;

    /// Stores the element read at `index`.
    ///
    /// Sets collapse duplicates here.
    fn place(&mut self, index: usize, item: Self::Item);

    /// Iterates elements in write order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

/// A container of unique keys mapped to value-type elements.
pub trait KeyedContainer: Container {
    type Key;
    type Value;

    /// Inserts an entry whose key is not present yet.
    ///
    /// If the key is already present the container is left untouched and the
    /// rejected key is handed back.
    fn insert_unique(&mut self, key: Self::Key, value: Self::Value) -> Result<(), Self::Key>;

    /// Iterates entries in write order.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}
