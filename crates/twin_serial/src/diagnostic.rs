use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;
use twin_doc::{Key, KeyBuf};

// -----------------------------------------------------------------------------
// DiagnosticKind

/// What went wrong while reading a field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiagnosticKind {
    #[error("Unable to read struct '{0}'")]
    UnreadableStruct(KeyBuf),

    #[error("Unable to read array '{0}'")]
    UnreadableArray(KeyBuf),

    #[error("Unable to read value '{0}'")]
    UnreadableValue(KeyBuf),

    #[error("Duplicate key {key} in map '{field}'")]
    DuplicateKey { field: KeyBuf, key: String },

    #[error("{0}")]
    Custom(String),
}

// -----------------------------------------------------------------------------
// FieldPath

/// Keys from the document root down to the field being processed.
///
/// Only filled when the `debug` configuration is active.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldPath {
    keys: Vec<KeyBuf>,
}

impl FieldPath {
    /// Creates a new empty [`FieldPath`].
    #[inline]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, key: Key<'_>) {
        self.keys.push(key.into_owned());
    }

    #[inline]
    pub fn pop(&mut self) {
        self.keys.pop();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn keys(&self) -> &[KeyBuf] {
        &self.keys
    }
}

impl fmt::Display for FieldPath {
    /// Formats as `items[2].pos`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, key) in self.keys.iter().enumerate() {
            match key {
                KeyBuf::Index(index) => write!(f, "[{index}]")?,
                KeyBuf::Name(name) if depth == 0 => f.write_str(name)?,
                KeyBuf::Name(name) => write!(f, ".{name}")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Diagnostic

/// One entry of a serializer's diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    path: FieldPath,
}

impl Diagnostic {
    #[inline]
    pub const fn new(kind: DiagnosticKind, path: FieldPath) -> Self {
        Self { kind, path }
    }

    #[inline]
    pub const fn kind(&self) -> &DiagnosticKind {
        &self.kind
    }

    /// Where the problem was found. Empty unless the `debug`
    /// configuration is active.
    #[inline]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} (at `{}`)", self.kind, self.path)
        }
    }
}

impl core::error::Error for Diagnostic {}

// -----------------------------------------------------------------------------
// Report

/// Every diagnostic collected by a failed pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} problem(s) in document:{}", .diagnostics.len(), Listing(.diagnostics))]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    #[inline]
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Formats diagnostics one per line.
struct Listing<'a>(&'a [Diagnostic]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in self.0 {
            write!(f, "\n  - {diagnostic}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::{Diagnostic, DiagnosticKind, FieldPath, Report};
    use twin_doc::Key;

    #[test]
    fn messages() {
        let kind = DiagnosticKind::UnreadableStruct("pos".into());
        assert_eq!(kind.to_string(), "Unable to read struct 'pos'");

        let kind = DiagnosticKind::UnreadableArray(Key::Index(4).into());
        assert_eq!(kind.to_string(), "Unable to read array '4'");
    }

    #[test]
    fn path_display() {
        let mut path = FieldPath::new();
        path.push(Key::Name("items"));
        path.push(Key::Index(2));
        path.push(Key::Name("pos"));
        assert_eq!(path.to_string(), "items[2].pos");

        let diagnostic = Diagnostic::new(DiagnosticKind::UnreadableValue("x".into()), path);
        assert_eq!(
            diagnostic.to_string(),
            "Unable to read value 'x' (at `items[2].pos`)"
        );
    }

    #[test]
    fn report_lists_everything() {
        let report = Report::new(vec![
            Diagnostic::new(DiagnosticKind::UnreadableStruct("a".into()), FieldPath::new()),
            Diagnostic::new(DiagnosticKind::Custom("bad".into()), FieldPath::new()),
        ]);
        assert_eq!(
            report.to_string(),
            "2 problem(s) in document:\n  - Unable to read struct 'a'\n  - bad"
        );
    }
}
