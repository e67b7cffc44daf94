//! Field composers.
//!
//! Each public operation dispatches on the pass direction and walks exactly
//! one field: it opens one scope on the cursor, classifies the node as
//! missing, null or present, and closes the scope on every path.
//!
//! - [`structs`]: value-type fields addressed by key or index.
//! - [`scalars`]: leaf fields through [`ScalarCodec`](crate::ScalarCodec).
//! - [`collections`]: lists, arrays, sets and maps of value-type elements.

mod collections;
mod scalars;
mod structs;

// Test fixtures shared by the composer tests.
#[cfg(test)]
mod fixtures {
    use alloc::borrow::ToOwned;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use twin_doc::{FieldOptions, Scalar, WriteCursor};

    use crate::{Schema, Serializer};

    #[derive(Debug, Default, Clone, PartialEq)]
    pub(crate) struct Point {
        pub x: i32,
        pub y: i32,
    }

    impl Schema for Point {
        fn serialize(&mut self, s: &mut Serializer<'_>) {
            s.value("x", &mut self.x, FieldOptions::NONE);
            s.value_or("y", &mut self.y, &0, FieldOptions::OPTIONAL);
        }
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub(crate) struct Record {
        pub id: u32,
        pub name: String,
    }

    impl Record {
        pub(crate) fn new(id: u32, name: &str) -> Self {
            Self {
                id,
                name: name.to_owned(),
            }
        }
    }

    impl Schema for Record {
        fn serialize(&mut self, s: &mut Serializer<'_>) {
            s.value("id", &mut self.id, FieldOptions::NONE);
            s.value("name", &mut self.name, FieldOptions::NONE);
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Event {
        BeginObject(Option<String>),
        BeginArray(Option<String>),
        EndObject,
        EndArray,
        Count(usize),
        Scalar(Option<String>, Scalar, FieldOptions),
        Null(Option<String>),
    }

    /// A [`WriteCursor`] that only records the calls it receives.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingCursor {
        pub events: Vec<Event>,
        pub explicit_null: bool,
    }

    impl WriteCursor for RecordingCursor {
        fn begin_write_object(&mut self, key: Option<&str>) {
            self.events.push(Event::BeginObject(key.map(String::from)));
        }

        fn begin_write_array(&mut self, key: Option<&str>) {
            self.events.push(Event::BeginArray(key.map(String::from)));
        }

        fn end_object(&mut self) {
            self.events.push(Event::EndObject);
        }

        fn end_array(&mut self) {
            self.events.push(Event::EndArray);
        }

        fn declare_child_count(&mut self, count: usize) {
            self.events.push(Event::Count(count));
        }

        fn write_scalar(&mut self, key: Option<&str>, value: Scalar, options: FieldOptions) {
            self.events.push(Event::Scalar(key.map(String::from), value, options));
        }

        fn write_null(&mut self, key: Option<&str>) {
            self.events.push(Event::Null(key.map(String::from)));
        }

        fn requires_explicit_null(&self) -> bool {
            self.explicit_null
        }
    }

    pub(crate) fn name(key: &str) -> Option<String> {
        Some(key.to_string())
    }
}
