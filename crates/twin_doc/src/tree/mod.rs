//! Cursors over the in-memory [`Node`](crate::Node) tree.

mod reader;
mod writer;

pub use reader::TreeReader;
pub use writer::TreeWriter;
