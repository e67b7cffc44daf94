//! Document model shared by every serializer pass.
//!
//! - [`ReadCursor`] / [`WriteCursor`]: the navigation protocol a document
//!   backend implements. Scopes are opened by [`Key`] and must be closed on
//!   every path.
//! - [`Presence`]: the missing / null / present classification of a node.
//! - [`FieldOptions`]: per-field flags, shared with the backend as hints.
//! - [`Scalar`]: leaf values exchanged with the backend.
//! - [`Node`], [`TreeReader`], [`TreeWriter`]: an in-memory document tree and
//!   the cursors walking it. [`Node`] implements `serde` traits, so any serde
//!   format can store a document.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    twin_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! { extern crate std; }

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cursor;
mod key;
mod node;
mod options;
mod presence;
mod scalar;
mod serde;
mod tree;

// -----------------------------------------------------------------------------
// Exports

pub use cursor::{ReadCursor, WriteCursor};
pub use key::{Key, KeyBuf};
pub use node::Node;
pub use options::FieldOptions;
pub use presence::Presence;
pub use scalar::Scalar;
pub use tree::{TreeReader, TreeWriter};
