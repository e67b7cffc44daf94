use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Key

/// Address of a child node inside the current scope.
///
/// Objects are addressed by [`Key::Name`], arrays by [`Key::Index`].
///
/// # Examples
///
/// ```
/// use twin_doc::Key;
///
/// assert_eq!(Key::from("pos"), Key::Name("pos"));
/// assert_eq!(Key::from(3_usize), Key::Index(3));
/// assert_eq!(Key::Index(3).name(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Name(&'a str),
    Index(usize),
}

impl<'a> Key<'a> {
    /// Returns the field name, or `None` for an index.
    ///
    /// Writers use this to distinguish "insert into the current object"
    /// from "append to the current array".
    #[inline]
    pub const fn name(self) -> Option<&'a str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// Creates an owned copy of the key.
    #[inline]
    pub fn into_owned(self) -> KeyBuf {
        match self {
            Key::Name(name) => KeyBuf::Name(String::from(name)),
            Key::Index(index) => KeyBuf::Index(index),
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    #[inline]
    fn from(name: &'a String) -> Self {
        Key::Name(name.as_str())
    }
}

impl From<usize> for Key<'_> {
    #[inline]
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}

// -----------------------------------------------------------------------------
// KeyBuf

/// Owned form of [`Key`], kept by diagnostics after the pass moved on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyBuf {
    Name(String),
    Index(usize),
}

impl KeyBuf {
    /// Borrows the key.
    #[inline]
    pub fn as_key(&self) -> Key<'_> {
        match self {
            KeyBuf::Name(name) => Key::Name(name),
            KeyBuf::Index(index) => Key::Index(*index),
        }
    }
}

impl From<Key<'_>> for KeyBuf {
    #[inline]
    fn from(key: Key<'_>) -> Self {
        key.into_owned()
    }
}

impl From<&str> for KeyBuf {
    #[inline]
    fn from(name: &str) -> Self {
        KeyBuf::Name(String::from(name))
    }
}

impl fmt::Display for KeyBuf {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_key(), f)
    }
}
