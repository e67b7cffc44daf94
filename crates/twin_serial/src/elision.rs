use twin_doc::FieldOptions;

/// How a field is physically written.
///
/// A value equal to its declared default is not encoded: it becomes a null
/// node, or disappears entirely when the field is optional and the backend
/// can represent an absent field. Reading the null (or missing optional)
/// node back with the same default yields the default again.
///
/// # Examples
///
/// ```
/// use twin_doc::FieldOptions;
/// use twin_serial::Elision;
///
/// assert_eq!(Elision::for_value(&3, Some(&0), true, FieldOptions::NONE, false), Elision::Encode);
/// assert_eq!(Elision::for_value(&0, Some(&0), true, FieldOptions::NONE, false), Elision::Null);
/// assert_eq!(Elision::for_value(&0, Some(&0), true, FieldOptions::OPTIONAL, false), Elision::Omit);
/// assert_eq!(Elision::for_value(&0, Some(&0), true, FieldOptions::OPTIONAL, true), Elision::Null);
/// assert_eq!(Elision::for_value(&0, None, true, FieldOptions::OPTIONAL, false), Elision::Encode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Elision {
    /// Write the full value.
    Encode,
    /// Write an explicit null marker.
    Null,
    /// Write nothing.
    Omit,
}

impl Elision {
    /// Decides how to write `value` given its declared `default`.
    ///
    /// `keyed` is `false` for array elements, which cannot be omitted
    /// without shifting their siblings.
    pub fn for_value<T: PartialEq + ?Sized>(
        value: &T,
        default: Option<&T>,
        keyed: bool,
        options: FieldOptions,
        explicit_null: bool,
    ) -> Self {
        match default {
            Some(default) if value == default => {
                if keyed {
                    Self::for_absent(options, explicit_null)
                } else {
                    Self::Null
                }
            }
            _ => Self::Encode,
        }
    }

    /// Decides how to write a field that has no value, such as a `None`
    /// collection.
    #[inline]
    pub const fn for_absent(options: FieldOptions, explicit_null: bool) -> Self {
        if options.is_optional() && !explicit_null {
            Self::Omit
        } else {
            Self::Null
        }
    }
}
