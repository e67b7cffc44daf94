//! Symmetric serialization composition.
//!
//! A value type describes its fields once, in a [`Schema`], by calling
//! field operations on a [`Serializer`]. The same calls read a document into
//! the value or write the value out, depending on the direction of the
//! serializer.
//!
//! ## Field operations
//!
//! - [`Serializer::struct_field`], [`Serializer::struct_field_or`]: nested
//!   value types.
//! - [`Serializer::value`], [`Serializer::value_or`]: scalars, through
//!   [`ScalarCodec`].
//! - [`Serializer::collection`]: lists, arrays and sets (see [`container`]).
//! - [`Serializer::map`]: maps keyed by a [`MapKey`], stored as arrays of
//!   `{ key, value }` entry objects.
//!
//! ## Failures
//!
//! Reading never aborts. Each failed field is reset to its zero value, a
//! [`Diagnostic`] is logged and the pass goes on, so one pass reports every
//! problem of the document. Each operation returns an [`Outcome`] for
//! schemas that want to react locally.
//!
//! ## Default elision
//!
//! A field written with a declared default is not encoded when it equals
//! that default (see [`Elision`]).
//!
//! ## Features
//!
//! - `std` (default): adapters for `std::collections` containers.
//! - `debug` (default): every diagnostic carries the [`FieldPath`] of the
//!   failed field. Only effective with `debug_assertions`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    twin_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! { extern crate std; }

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod container;

mod codec;
mod compose;
mod diagnostic;
mod document;
mod elision;
mod outcome;
mod schema;
mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use codec::{MapKey, ScalarCodec};
pub use diagnostic::{Diagnostic, DiagnosticKind, FieldPath, Report};
pub use document::{from_node, read_document, to_node, write_document};
pub use elision::Elision;
pub use outcome::Outcome;
pub use schema::{Schema, TypeSerializer};
pub use serializer::{Mode, Serializer};

/// Name of the key field of a serialized map entry.
pub const MAP_KEY: &str = "key";

/// Name of the value field of a serialized map entry.
pub const MAP_VALUE: &str = "value";
