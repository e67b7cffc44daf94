use twin_doc::{FieldOptions, Key, Presence};

use crate::{DiagnosticKind, Elision, Outcome, ScalarCodec, Serializer};

impl<'a> Serializer<'a> {
    /// Reads or writes a scalar field.
    ///
    /// Follows the same missing / null / present rules as
    /// [`struct_field`](Self::struct_field). A present node holding a
    /// scalar that does not decode as `S` fails, and the field becomes
    /// `S::default()`. A failed read logs `Unable to read value '<key>'`.
    pub fn value<'k, S>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: &mut S,
        options: FieldOptions,
    ) -> Outcome
    where
        S: ScalarCodec + Default,
    {
        let key = key.into();
        if self.is_reading() {
            let checkpoint = self.checkpoint();
            let ok = self.read_scalar(key, value, S::default, options);
            if !ok {
                self.record(DiagnosticKind::UnreadableValue(key.into_owned()));
            }
            self.outcome_since(checkpoint, ok)
        } else {
            self.write_scalar(key, value, options);
            Outcome::SUCCESS
        }
    }

    /// Reads or writes a scalar field with a declared default.
    ///
    /// See [`struct_field_or`](Self::struct_field_or) for the default rules.
    pub fn value_or<'k, S>(
        &mut self,
        key: impl Into<Key<'k>>,
        value: &mut S,
        default: &S,
        options: FieldOptions,
    ) -> Outcome
    where
        S: ScalarCodec + Default + Clone + PartialEq,
    {
        let key = key.into();
        if self.is_reading() {
            let checkpoint = self.checkpoint();
            let ok = self.read_scalar(key, value, || default.clone(), options);
            if !ok {
                self.record(DiagnosticKind::UnreadableValue(key.into_owned()));
            }
            self.outcome_since(checkpoint, ok)
        } else {
            let name = key.name();
            let explicit_null = self.write_cursor().requires_explicit_null();
            match Elision::for_value(&*value, Some(default), name.is_some(), options, explicit_null) {
                Elision::Encode => self.write_scalar(key, value, options),
                Elision::Null => self.write_cursor().write_null(name),
                Elision::Omit => {}
            }
            Outcome::SUCCESS
        }
    }

    // -------------------------------------------------------------------------
    // Read / Write

    /// Reads one scalar node without logging its own failure.
    pub(crate) fn read_scalar<S>(
        &mut self,
        key: Key<'_>,
        value: &mut S,
        fallback: impl FnOnce() -> S,
        options: FieldOptions,
    ) -> bool
    where
        S: ScalarCodec + Default,
    {
        let entered = self.read_cursor().begin_read_value(key);

        let ok = match self.read_cursor().presence() {
            Presence::Missing if options.is_optional() => {
                *value = fallback();
                true
            }
            Presence::Null => {
                *value = fallback();
                true
            }
            Presence::Present if entered => {
                match self.read_cursor().scalar().and_then(S::decode) {
                    Some(decoded) => {
                        *value = decoded;
                        true
                    }
                    None => {
                        *value = S::default();
                        false
                    }
                }
            }
            Presence::Missing | Presence::Present => {
                *value = S::default();
                false
            }
        };

        self.read_cursor().end_value();
        ok
    }

    #[inline]
    pub(crate) fn write_scalar<S: ScalarCodec>(&mut self, key: Key<'_>, value: &S, options: FieldOptions) {
        let scalar = value.encode();
        self.write_cursor().write_scalar(key.name(), scalar, options);
    }
}
