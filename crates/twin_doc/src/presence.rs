/// Classification of the node under the cursor.
///
/// This, not the field's type, selects the branch every composer takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The node does not exist at all.
    Missing,
    /// The node exists and is explicitly empty.
    Null,
    /// The node exists and carries a value.
    Present,
}

impl Presence {
    #[inline]
    pub const fn is_missing(self) -> bool {
        matches!(self, Presence::Missing)
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        matches!(self, Presence::Null)
    }

    #[inline]
    pub const fn is_present(self) -> bool {
        matches!(self, Presence::Present)
    }
}
