use bitflags::bitflags;

bitflags! {
    /// Per-field behavior, composed with `|`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_doc::FieldOptions;
    ///
    /// let options = FieldOptions::OPTIONAL | FieldOptions::PREFER_ATTRIBUTE;
    /// assert!(options.is_optional());
    /// assert!(!FieldOptions::NONE.is_optional());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldOptions: u8 {
        /// A missing node is not an error, it decodes to the default.
        const OPTIONAL         = 1 << 0;
        /// Hint for the backend to store the value inline (e.g. as an attribute).
        const PREFER_ATTRIBUTE = 1 << 1;
    }
}

impl FieldOptions {
    /// No special handling.
    pub const NONE: Self = Self::empty();

    #[inline]
    pub const fn is_optional(self) -> bool {
        self.contains(Self::OPTIONAL)
    }

    #[inline]
    pub const fn prefers_attribute(self) -> bool {
        self.contains(Self::PREFER_ATTRIBUTE)
    }
}
