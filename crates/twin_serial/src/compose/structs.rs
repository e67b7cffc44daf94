use twin_doc::{FieldOptions, Key, Presence};

use crate::{DiagnosticKind, Elision, Outcome, Serializer};

impl<'a> Serializer<'a> {
    /// Reads or writes a value-type field.
    ///
    /// `serializer` describes the fields of `T`; it runs inside a nested
    /// object scope in both directions.
    ///
    /// Reading:
    /// - missing: fails unless `options` is [`OPTIONAL`](FieldOptions::OPTIONAL),
    ///   `value` becomes `T::default()` either way;
    /// - null: `value` becomes `T::default()`;
    /// - present: `value` is rebuilt from `T::default()`, and reset to it if
    ///   any nested field failed.
    ///
    /// A failed read logs `Unable to read struct '<key>'`.
    ///
    /// Writing always materializes the object.
    pub fn struct_field<'k, T, F>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: &mut T,
        options: FieldOptions,
        mut serializer: F,
    ) -> Outcome
    where
        T: Default,
        F: FnMut(&mut T, &mut Self),
    {
        let key = key.into();
        if self.is_reading() {
            let checkpoint = self.checkpoint();
            let ok = self.read_struct(key, value, T::default, options, &mut serializer);
            if !ok {
                self.record(DiagnosticKind::UnreadableStruct(key.into_owned()));
            }
            self.outcome_since(checkpoint, ok)
        } else {
            self.write_struct(key, value, &mut serializer);
            Outcome::SUCCESS
        }
    }

    /// Reads or writes a value-type field that has a declared default.
    ///
    /// Reading a missing optional field or a null node yields a clone of
    /// `default`. Writing a value equal to `default` produces a null node,
    /// or nothing at all when the field is optional and the backend can
    /// represent an absent field. Array elements (`Key::Index`) are never
    /// omitted.
    pub fn struct_field_or<'k, T, F>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: &mut T,
        default: &T,
        options: FieldOptions,
        mut serializer: F,
    ) -> Outcome
    where
        T: Default + Clone + PartialEq,
        F: FnMut(&mut T, &mut Self),
    {
        let key = key.into();
        if self.is_reading() {
            let checkpoint = self.checkpoint();
            let ok = self.read_struct(key, value, || default.clone(), options, &mut serializer);
            if !ok {
                self.record(DiagnosticKind::UnreadableStruct(key.into_owned()));
            }
            self.outcome_since(checkpoint, ok)
        } else {
            self.write_struct_or(key, value, default, options, &mut serializer);
            Outcome::SUCCESS
        }
    }

    // -------------------------------------------------------------------------
    // Read / Write

    /// Reads one object node without logging its own failure.
    pub(crate) fn read_struct<T, F>(
        &mut self,
        key: Key<'_>,
        value: &mut T,
        fallback: impl FnOnce() -> T,
        options: FieldOptions,
        serializer: &mut F,
    ) -> bool
    where
        T: Default,
        F: FnMut(&mut T, &mut Self),
    {
        let entered = self.read_cursor().begin_read_object(key);
        self.enter(key);

        let ok = match self.read_cursor().presence() {
            Presence::Missing if options.is_optional() => {
                *value = fallback();
                true
            }
            Presence::Null => {
                *value = fallback();
                true
            }
            Presence::Present if entered => self.read_struct_body(value, serializer),
            Presence::Missing | Presence::Present => {
                *value = T::default();
                false
            }
        };

        self.leave();
        self.read_cursor().end_object();
        ok
    }

    /// Runs `serializer` on a fresh value inside the current object scope.
    ///
    /// Succeeds iff the callback recorded no diagnostic.
    fn read_struct_body<T, F>(&mut self, value: &mut T, serializer: &mut F) -> bool
    where
        T: Default,
        F: FnMut(&mut T, &mut Self),
    {
        let checkpoint = self.checkpoint();
        *value = T::default();
        serializer(value, self);

        let ok = self.checkpoint() == checkpoint;
        if !ok {
            *value = T::default();
        }
        ok
    }

    /// Writes one object node.
    pub(crate) fn write_struct<T, F>(&mut self, key: Key<'_>, value: &mut T, serializer: &mut F)
    where
        F: FnMut(&mut T, &mut Self),
    {
        self.write_cursor().begin_write_object(key.name());
        serializer(value, self);
        self.write_cursor().end_object();
    }

    /// Writes one object node, or its elided form when it equals `default`.
    pub(crate) fn write_struct_or<T, F>(
        &mut self,
        key: Key<'_>,
        value: &mut T,
        default: &T,
        options: FieldOptions,
        serializer: &mut F,
    ) where
        T: PartialEq,
        F: FnMut(&mut T, &mut Self),
    {
        let name = key.name();
        let explicit_null = self.write_cursor().requires_explicit_null();

        match Elision::for_value(&*value, Some(default), name.is_some(), options, explicit_null) {
            Elision::Encode => self.write_struct(key, value, serializer),
            Elision::Null => self.write_cursor().write_null(name),
            Elision::Omit => {}
        }
    }
}
