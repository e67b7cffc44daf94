use twin_doc::{Node, ReadCursor, TreeReader, TreeWriter, WriteCursor};

use crate::{Report, Schema, Serializer};

/// Reads a whole document into a new `T`.
///
/// The cursor must be positioned on the root object. All problems found
/// in the document are returned together.
pub fn read_document<T: Schema + Default>(cursor: &mut dyn ReadCursor) -> Result<T, Report> {
    let mut value = T::default();
    let mut serializer = Serializer::reader(cursor);
    value.serialize(&mut serializer);
    serializer.finish().map(|()| value)
}

/// Writes `value` as the root object of `cursor`.
///
/// `value` is only borrowed mutably because schemas share their code with
/// the read direction, it is left unchanged.
///
/// The composers never fail while writing, but a schema may report its own
/// problems through [`Serializer::add_error`]; those are returned here. The
/// document is fully written either way.
pub fn write_document<T: Schema + ?Sized>(
    value: &mut T,
    cursor: &mut dyn WriteCursor,
) -> Result<(), Report> {
    let mut serializer = Serializer::writer(cursor);
    value.serialize(&mut serializer);
    serializer.finish()
}

/// Writes `value` into a new in-memory [`Node`] tree.
///
/// Fails with the problems reported by the schema, see [`write_document`].
pub fn to_node<T: Schema + ?Sized>(value: &mut T) -> Result<Node, Report> {
    let mut writer = TreeWriter::new();
    let written = write_document(value, &mut writer);
    let node = writer.finish();
    written.map(|()| node)
}

/// Reads a `T` from an in-memory [`Node`] tree.
///
/// # Examples
///
/// ```
/// use twin_doc::{FieldOptions, Node};
/// use twin_serial::{Schema, Serializer};
///
/// #[derive(Debug, Default)]
/// struct Config {
///     level: u8,
/// }
///
/// impl Schema for Config {
///     fn serialize(&mut self, s: &mut Serializer<'_>) {
///         s.value("level", &mut self.level, FieldOptions::NONE);
///     }
/// }
///
/// let node = Node::object([("level", Node::from("high"))]);
/// let report = twin_serial::from_node::<Config>(&node).unwrap_err();
/// assert_eq!(report.diagnostics()[0].kind().to_string(), "Unable to read value 'level'");
/// ```
pub fn from_node<T: Schema + Default>(node: &Node) -> Result<T, Report> {
    let mut reader = TreeReader::new(node);
    read_document(&mut reader)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use twin_doc::{FieldOptions, Node, TreeWriter};

    use crate::{Schema, Serializer};

    #[derive(Debug, Default, PartialEq)]
    struct Version {
        major: u16,
        minor: u16,
    }

    impl Schema for Version {
        fn serialize(&mut self, s: &mut Serializer<'_>) {
            s.value("major", &mut self.major, FieldOptions::NONE);
            s.value_or("minor", &mut self.minor, &0, FieldOptions::OPTIONAL);
        }
    }

    #[test]
    fn node_round_trip() {
        let mut version = Version { major: 2, minor: 0 };
        let node = super::to_node(&mut version).unwrap();

        assert_eq!(node, Node::object([("major", Node::from(2_u16))]));
        assert_eq!(super::from_node::<Version>(&node).unwrap(), version);
    }

    #[test]
    fn all_problems_reported() {
        let node = Node::object([("minor", Node::from("x"))]);
        let report = super::from_node::<Version>(&node).unwrap_err();

        assert_eq!(report.diagnostics().len(), 2);
    }

    #[derive(Debug, Default)]
    struct Volume {
        level: u8,
    }

    impl Schema for Volume {
        fn serialize(&mut self, s: &mut Serializer<'_>) {
            s.value("level", &mut self.level, FieldOptions::NONE);
            if self.level > 3 {
                s.add_error("level out of range");
            }
        }
    }

    #[test]
    fn schema_errors_reported_on_write() {
        let report = super::to_node(&mut Volume { level: 9 }).unwrap_err();
        assert_eq!(report.diagnostics().len(), 1);
        assert_eq!(report.diagnostics()[0].to_string(), "level out of range");

        let mut writer = TreeWriter::new();
        assert!(super::write_document(&mut Volume { level: 9 }, &mut writer).is_err());
        assert_eq!(writer.finish(), Node::object([("level", Node::from(9_u8))]));

        assert!(super::to_node(&mut Volume { level: 2 }).is_ok());
    }
}
