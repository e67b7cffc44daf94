use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use twin_doc::{Key, ReadCursor, WriteCursor};

use crate::{Diagnostic, DiagnosticKind, FieldPath, Outcome, Report};

// -----------------------------------------------------------------------------
// Mode

/// Direction of a serializer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Read,
    Write,
}

/// The cursor of the pass, which also fixes its direction.
enum Pass<'a> {
    Read(&'a mut dyn ReadCursor),
    Write(&'a mut dyn WriteCursor),
}

// -----------------------------------------------------------------------------
// Serializer

/// One pass over one document, in one direction.
///
/// The same field calls read into a value when the serializer was created
/// with [`reader`](Self::reader) and write it out when created with
/// [`writer`](Self::writer), so a type describes its layout once (see
/// [`Schema`](crate::Schema)).
///
/// Reading never stops at the first problem. Every failure is appended to
/// the diagnostic log and the pass continues with the next field, so one
/// pass reports every problem. [`finish`](Self::finish) turns the log into
/// a `Result`.
///
/// # Examples
///
/// ```
/// use twin_doc::{FieldOptions, Node, TreeReader};
/// use twin_serial::Serializer;
///
/// let root = Node::object([("id", Node::from(12_u32))]);
/// let mut cursor = TreeReader::new(&root);
/// let mut serializer = Serializer::reader(&mut cursor);
///
/// let mut id = 0_u32;
/// let mut name = String::new();
/// assert!(serializer.value("id", &mut id, FieldOptions::NONE).is_ok());
/// assert!(!serializer.value("name", &mut name, FieldOptions::NONE).is_ok());
///
/// assert_eq!(id, 12);
/// let report = serializer.finish().unwrap_err();
/// assert_eq!(report.diagnostics().len(), 1);
/// ```
pub struct Serializer<'a> {
    pass: Pass<'a>,
    diagnostics: Vec<Diagnostic>,
    path: FieldPath,
}

impl<'a> Serializer<'a> {
    /// Creates a serializer reading from `cursor`.
    pub fn reader(cursor: &'a mut dyn ReadCursor) -> Self {
        log::trace!("serializer: read pass started");
        Self {
            pass: Pass::Read(cursor),
            diagnostics: Vec::new(),
            path: FieldPath::new(),
        }
    }

    /// Creates a serializer writing into `cursor`.
    pub fn writer(cursor: &'a mut dyn WriteCursor) -> Self {
        log::trace!("serializer: write pass started");
        Self {
            pass: Pass::Write(cursor),
            diagnostics: Vec::new(),
            path: FieldPath::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        match self.pass {
            Pass::Read(_) => Mode::Read,
            Pass::Write(_) => Mode::Write,
        }
    }

    #[inline]
    pub fn is_reading(&self) -> bool {
        matches!(self.pass, Pass::Read(_))
    }

    #[inline]
    pub fn is_writing(&self) -> bool {
        matches!(self.pass, Pass::Write(_))
    }

    /// Diagnostics recorded so far.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if no diagnostic has been recorded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Records a custom diagnostic without interrupting the pass.
    ///
    /// Schemas use this to report semantic problems, e.g. a value out of
    /// range, next to the structural ones found by the serializer.
    pub fn add_error(&mut self, message: impl Display) -> Outcome {
        self.record(DiagnosticKind::Custom(message.to_string()));
        Outcome::new(false, 1)
    }

    /// Ends the pass.
    ///
    /// Returns every recorded diagnostic if there is at least one.
    pub fn finish(self) -> Result<(), Report> {
        log::trace!(
            "serializer: {:?} pass finished with {} diagnostic(s)",
            self.mode(),
            self.diagnostics.len()
        );
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(Report::new(self.diagnostics))
        }
    }

    // -------------------------------------------------------------------------
    // Internal

    /// The read cursor. Only called from read paths.
    pub(crate) fn read_cursor(&mut self) -> &mut (dyn ReadCursor + 'a) {
        match &mut self.pass {
            Pass::Read(cursor) => &mut **cursor,
            Pass::Write(_) => unreachable!("read operation during a write pass"),
        }
    }

    /// The write cursor. Only called from write paths.
    pub(crate) fn write_cursor(&mut self) -> &mut (dyn WriteCursor + 'a) {
        match &mut self.pass {
            Pass::Write(cursor) => &mut **cursor,
            Pass::Read(_) => unreachable!("write operation during a read pass"),
        }
    }

    /// Position in the diagnostic log, used to count what an operation added.
    #[inline]
    pub(crate) fn checkpoint(&self) -> usize {
        self.diagnostics.len()
    }

    /// Builds the outcome of an operation started at `checkpoint`.
    #[inline]
    pub(crate) fn outcome_since(&self, checkpoint: usize, ok: bool) -> Outcome {
        Outcome::new(ok, self.diagnostics.len() - checkpoint)
    }

    pub(crate) fn record(&mut self, kind: DiagnosticKind) {
        log::debug!("serializer: {kind}");

        let path = crate::cfg::debug! {
            if { self.path.clone() } else { FieldPath::new() }
        };
        self.diagnostics.push(Diagnostic::new(kind, path));
    }

    #[inline]
    #[cfg_attr(
        not(all(debug_assertions, feature = "debug")),
        allow(unused_variables, reason = "the path is only tracked in debug")
    )]
    pub(crate) fn enter(&mut self, key: Key<'_>) {
        crate::cfg::debug! { self.path.push(key); }
    }

    #[inline]
    pub(crate) fn leave(&mut self) {
        crate::cfg::debug! { self.path.pop(); }
    }
}

impl fmt::Debug for Serializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("mode", &self.mode())
            .field("diagnostics", &self.diagnostics)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
