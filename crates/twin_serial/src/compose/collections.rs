use twin_doc::{FieldOptions, Key, Presence};

use crate::container::{Container, KeyedContainer, Sequence};
use crate::{DiagnosticKind, Elision, MAP_KEY, MAP_VALUE, MapKey, Outcome, Serializer};

impl<'a> Serializer<'a> {
    /// Reads or writes a list, array or set of value-type elements.
    ///
    /// The collection is stored as an array node at `key`; `None` is the
    /// null / absent state.
    ///
    /// Reading:
    /// - missing: `slot` becomes `None`, fails unless `options` is
    ///   [`OPTIONAL`](FieldOptions::OPTIONAL);
    /// - null: `slot` becomes `None`;
    /// - present: the container is cleared (or allocated) and one element is
    ///   read per child. An element that fails is stored as
    ///   `T::default()`, the others are unaffected, and the whole read fails.
    ///
    /// A failed read logs `Unable to read array '<key>'` once, after any
    /// diagnostic of its elements.
    ///
    /// Writing `None` produces a null node, or nothing when the field is
    /// optional and the backend can represent an absent field.
    ///
    /// # Examples
    ///
    /// ```
    /// use twin_doc::FieldOptions;
    /// use twin_serial::{Schema, Serializer};
    ///
    /// #[derive(Debug, Default, Clone, PartialEq)]
    /// struct Tag {
    ///     id: u32,
    /// }
    ///
    /// impl Schema for Tag {
    ///     fn serialize(&mut self, s: &mut Serializer<'_>) {
    ///         s.value("id", &mut self.id, FieldOptions::NONE);
    ///     }
    /// }
    ///
    /// #[derive(Debug, Default, PartialEq)]
    /// struct Bag {
    ///     tags: Option<Vec<Tag>>,
    /// }
    ///
    /// impl Schema for Bag {
    ///     fn serialize(&mut self, s: &mut Serializer<'_>) {
    ///         s.collection("tags", &mut self.tags, FieldOptions::OPTIONAL, Tag::serialize);
    ///     }
    /// }
    ///
    /// let mut bag = Bag { tags: Some(vec![Tag { id: 1 }, Tag { id: 2 }]) };
    /// let node = twin_serial::to_node(&mut bag).unwrap();
    /// assert_eq!(twin_serial::from_node::<Bag>(&node).unwrap(), bag);
    /// ```
    pub fn collection<C, F>(
        &mut self,
        key: &str,
        slot: &mut Option<C>,
        options: FieldOptions,
        mut serializer: F,
    ) -> Outcome
    where
        C: Sequence,
        C::Item: Default + Clone,
        F: FnMut(&mut C::Item, &mut Self),
    {
        if self.is_reading() {
            self.read_collection(key, slot, options, |this, index, sequence: &mut C| {
                let mut item = C::Item::default();
                let ok = this.read_struct(
                    Key::Index(index),
                    &mut item,
                    C::Item::default,
                    FieldOptions::NONE,
                    &mut serializer,
                );
                sequence.place(index, item);
                ok
            })
        } else {
            self.write_collection(key, slot, options, |this, sequence: &C| {
                for (index, item) in sequence.items().enumerate() {
                    let mut item = item.clone();
                    this.write_struct(Key::Index(index), &mut item, &mut serializer);
                }
            });
            Outcome::SUCCESS
        }
    }

    /// Reads or writes a map from scalar keys to value-type elements.
    ///
    /// The map is stored as an array of entry objects, each holding the key
    /// in [`MAP_KEY`] and the element in [`MAP_VALUE`]. Presence rules are
    /// those of [`collection`](Self::collection).
    ///
    /// When reading, a key that appears twice keeps its first entry; the
    /// later entry is dropped, logged as a duplicate, and the read fails.
    /// An entry whose value fails is kept with `V::default()`, an entry
    /// whose key fails is dropped.
    /// Entry order is not preserved for unordered maps.
    pub fn map<C, F>(
        &mut self,
        key: &str,
        slot: &mut Option<C>,
        options: FieldOptions,
        mut serializer: F,
    ) -> Outcome
    where
        C: KeyedContainer,
        C::Key: MapKey,
        C::Value: Default + Clone,
        F: FnMut(&mut C::Value, &mut Self),
    {
        if self.is_reading() {
            self.read_collection(key, slot, options, |this, index, map: &mut C| {
                let entered = this.read_cursor().begin_read_object(Key::Index(index));
                this.enter(Key::Index(index));

                let mut entry_key = C::Key::default();
                let has_key = entered
                    && this.read_scalar(
                        Key::Name(MAP_KEY),
                        &mut entry_key,
                        C::Key::default,
                        FieldOptions::NONE,
                    );
                if entered && !has_key {
                    this.record(DiagnosticKind::UnreadableValue(MAP_KEY.into()));
                }

                let mut value = C::Value::default();
                let mut ok = has_key
                    && this.read_struct(
                        Key::Name(MAP_VALUE),
                        &mut value,
                        C::Value::default,
                        FieldOptions::NONE,
                        &mut serializer,
                    );

                // An entry without a usable key has nowhere to go.
                if has_key && let Err(duplicate) = map.insert_unique(entry_key, value) {
                    this.record(DiagnosticKind::DuplicateKey {
                        field: key.into(),
                        key: alloc::format!("'{duplicate}'"),
                    });
                    ok = false;
                }

                this.leave();
                this.read_cursor().end_object();
                ok
            })
        } else {
            self.write_collection(key, slot, options, |this, map: &C| {
                for (entry_key, value) in map.entries() {
                    this.write_cursor().begin_write_object(None);
                    this.write_scalar(Key::Name(MAP_KEY), entry_key, FieldOptions::PREFER_ATTRIBUTE);
                    let mut value = value.clone();
                    this.write_struct(Key::Name(MAP_VALUE), &mut value, &mut serializer);
                    this.write_cursor().end_object();
                }
            });
            Outcome::SUCCESS
        }
    }

    // -------------------------------------------------------------------------
    // Traversal

    /// Shared read traversal of every collection shape.
    ///
    /// `read_entry` reads child `index` into the prepared container and
    /// returns whether it succeeded.
    fn read_collection<C, E>(
        &mut self,
        key: &str,
        slot: &mut Option<C>,
        options: FieldOptions,
        mut read_entry: E,
    ) -> Outcome
    where
        C: Container,
        E: FnMut(&mut Self, usize, &mut C) -> bool,
    {
        let checkpoint = self.checkpoint();
        let entered = self.read_cursor().begin_read_array(Key::Name(key));
        self.enter(Key::Name(key));

        let ok = match self.read_cursor().presence() {
            Presence::Missing => {
                *slot = None;
                options.is_optional()
            }
            Presence::Null => {
                *slot = None;
                true
            }
            Presence::Present if !entered => {
                *slot = None;
                false
            }
            Presence::Present => {
                let count = self.read_cursor().child_count();
                let container = C::prepare(slot, count);

                let mut ok = true;
                for index in 0..count {
                    ok &= read_entry(self, index, container);
                }
                ok
            }
        };

        self.leave();
        self.read_cursor().end_array();

        if !ok {
            self.record(DiagnosticKind::UnreadableArray(key.into()));
        }
        self.outcome_since(checkpoint, ok)
    }

    /// Shared write traversal of every collection shape.
    fn write_collection<C, E>(
        &mut self,
        key: &str,
        slot: &Option<C>,
        options: FieldOptions,
        write_entries: E,
    ) where
        C: Container,
        E: FnOnce(&mut Self, &C),
    {
        match slot {
            Some(container) => {
                self.write_cursor().begin_write_array(Some(key));
                self.write_cursor().declare_child_count(container.len());
                write_entries(self, container);
                self.write_cursor().end_array();
            }
            None => {
                let explicit_null = self.write_cursor().requires_explicit_null();
                match Elision::for_absent(options, explicit_null) {
                    Elision::Omit => {}
                    Elision::Null | Elision::Encode => self.write_cursor().write_null(Some(key)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use twin_doc::{FieldOptions, Key, Node, Scalar, TreeReader, TreeWriter};
    use twin_utils::hash::{HashMap, HashSet};

    use crate::compose::fixtures::{Event, Point, Record, RecordingCursor, name};
    use crate::{DiagnosticKind, Outcome, Schema, Serializer, TypeSerializer};

    // -----------------------------------------------------------------------------
    // Fixtures

    #[derive(Debug, Default, PartialEq)]
    struct Inventory {
        records: Option<Vec<Record>>,
        path: Option<Box<[Point]>>,
        tags: Option<BTreeSet<Record>>,
        by_name: Option<BTreeMap<String, Point>>,
        by_id: Option<HashMap<i32, Point>>,
    }

    impl Schema for Inventory {
        fn serialize(&mut self, s: &mut Serializer<'_>) {
            let optional = FieldOptions::OPTIONAL;
            s.collection("records", &mut self.records, optional, Record::serialize);
            s.collection("path", &mut self.path, optional, Point::serialize);
            s.collection("tags", &mut self.tags, optional, Record::serialize);
            s.map("by_name", &mut self.by_name, optional, Point::serialize);
            s.map("by_id", &mut self.by_id, optional, Point::serialize);
        }
    }

    fn sample_inventory() -> Inventory {
        Inventory {
            records: Some(vec![Record::new(1, "a"), Record::new(2, "b"), Record::new(3, "c")]),
            path: Some(vec![Point { x: 1, y: 2 }, Point { x: 3, y: 0 }].into_boxed_slice()),
            tags: Some([Record::new(9, "z"), Record::new(8, "y")].into_iter().collect()),
            by_name: Some(
                [
                    ("a".to_string(), Point { x: 1, y: 1 }),
                    ("b".to_string(), Point { x: 2, y: 2 }),
                ]
                .into_iter()
                .collect(),
            ),
            by_id: Some([(-4, Point { x: 4, y: 0 }), (7, Point::default())].into_iter().collect()),
        }
    }

    /// Reads the list stored at `items` in `root`.
    fn read_records(root: &Node, options: FieldOptions) -> (Option<Vec<Record>>, Outcome, Vec<DiagnosticKind>) {
        let mut reader = TreeReader::new(root);
        let mut records = Some(vec![Record::new(100, "stale")]);

        let mut serializer = Serializer::reader(&mut reader);
        let outcome = serializer.collection("items", &mut records, options, Record::serialize);
        let kinds = serializer.diagnostics().iter().map(|d| d.kind().clone()).collect();
        let _ = serializer.finish();

        assert_eq!(reader.depth(), 0);
        (records, outcome, kinds)
    }

    fn record_node(id: impl Into<Node>, name: &str) -> Node {
        Node::object([("id", id.into()), ("name", Node::from(name))])
    }

    fn entry_node(key: impl Into<Node>, x: i32) -> Node {
        Node::object([("key", key.into()), ("value", Node::object([("x", Node::from(x))]))])
    }

    // -----------------------------------------------------------------------------
    // Round trips

    #[test]
    fn every_shape_round_trips() {
        let mut inventory = sample_inventory();
        let node = crate::to_node(&mut inventory).unwrap();

        let records = node.get(Key::Name("records")).and_then(Node::as_array).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], record_node(2_u32, "b"));

        let back: Inventory = crate::from_node(&node).unwrap();
        assert_eq!(back, inventory);
    }

    #[test]
    fn empty_and_absent_collections_round_trip() {
        let mut inventory = Inventory {
            records: Some(Vec::new()),
            by_name: Some(BTreeMap::new()),
            ..Inventory::default()
        };
        let node = crate::to_node(&mut inventory).unwrap();

        assert_eq!(node.get(Key::Name("records")), Some(&Node::Array(Vec::new())));
        // Optional and absent: omitted.
        assert_eq!(node.get(Key::Name("path")), None);

        let back: Inventory = crate::from_node(&node).unwrap();
        assert_eq!(back, inventory);
    }

    #[test]
    fn hash_containers_round_trip() {
        #[derive(Debug, Default, PartialEq)]
        struct Lookup {
            seen: Option<HashSet<Record>>,
            ports: Option<HashMap<u32, Point>>,
            names: Option<BTreeMap<i64, Record>>,
        }

        impl Schema for Lookup {
            fn serialize(&mut self, s: &mut Serializer<'_>) {
                s.collection("seen", &mut self.seen, FieldOptions::NONE, Record::serialize);
                s.map("ports", &mut self.ports, FieldOptions::NONE, Point::serialize);
                s.map("names", &mut self.names, FieldOptions::NONE, Record::serialize);
            }
        }

        let mut lookup = Lookup {
            seen: Some([Record::new(1, "x"), Record::new(2, "y")].into_iter().collect()),
            ports: Some([(80, Point { x: 8, y: 0 }), (443, Point { x: 4, y: 3 })].into_iter().collect()),
            names: Some([(-1, Record::new(5, "neg"))].into_iter().collect()),
        };
        let node = crate::to_node(&mut lookup).unwrap();
        let back: Lookup = crate::from_node(&node).unwrap();
        assert_eq!(back, lookup);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_containers_round_trip() {
        use std::collections::{HashMap, HashSet};

        let mut seen: Option<HashSet<Record>> = Some([Record::new(3, "s")].into_iter().collect());
        let mut ports: Option<HashMap<u32, Point>> = Some([(22, Point { x: 2, y: 2 })].into_iter().collect());

        let mut writer = TreeWriter::new();
        let mut serializer = Serializer::writer(&mut writer);
        serializer.collection("seen", &mut seen, FieldOptions::NONE, Record::serialize);
        serializer.map("ports", &mut ports, FieldOptions::NONE, Point::serialize);
        drop(serializer);
        let node = writer.finish();

        let mut reader = TreeReader::new(&node);
        let mut serializer = Serializer::reader(&mut reader);
        let mut seen_back: Option<HashSet<Record>> = None;
        let mut ports_back: Option<HashMap<u32, Point>> = None;
        let outcome = serializer.collection("seen", &mut seen_back, FieldOptions::NONE, Record::serialize)
            & serializer.map("ports", &mut ports_back, FieldOptions::NONE, Point::serialize);

        assert!(outcome.is_ok());
        assert_eq!(seen_back, seen);
        assert_eq!(ports_back, ports);
    }

    #[test]
    fn map_entries_use_key_and_value_fields() {
        #[derive(Debug, Default, PartialEq)]
        struct Named {
            items: Option<BTreeMap<String, Point>>,
        }

        impl Schema for Named {
            fn serialize(&mut self, s: &mut Serializer<'_>) {
                s.map("items", &mut self.items, FieldOptions::NONE, Point::serialize);
            }
        }

        let mut named = Named {
            items: Some(
                [
                    ("a".to_string(), Point { x: 1, y: 0 }),
                    ("b".to_string(), Point { x: 2, y: 0 }),
                ]
                .into_iter()
                .collect(),
            ),
        };
        let node = crate::to_node(&mut named).unwrap();

        let expected = Node::object([("items", Node::Array(vec![entry_node("a", 1), entry_node("b", 2)]))]);
        assert_eq!(node, expected);
        assert_eq!(crate::from_node::<Named>(&node).unwrap(), named);
    }

    #[test]
    fn map_read_ignores_entry_order() {
        let root = Node::object([("items", Node::Array(vec![entry_node("b", 2), entry_node("a", 1)]))]);
        let mut reader = TreeReader::new(&root);
        let mut items: Option<BTreeMap<String, Point>> = None;

        let mut serializer = Serializer::reader(&mut reader);
        assert!(serializer.map("items", &mut items, FieldOptions::NONE, Point::serialize).is_ok());

        let expected: BTreeMap<String, Point> = [
            ("a".to_string(), Point { x: 1, y: 0 }),
            ("b".to_string(), Point { x: 2, y: 0 }),
        ]
        .into_iter()
        .collect();
        assert_eq!(items, Some(expected));
    }

    #[test]
    fn element_layout_as_function_pointer() {
        fn packed(point: &mut Point, s: &mut Serializer<'_>) {
            s.value("p", &mut point.x, FieldOptions::NONE);
        }

        let layout: TypeSerializer<Point> = packed;
        let mut path = Some(vec![Point { x: 7, y: 0 }, Point { x: 8, y: 0 }]);

        let mut writer = TreeWriter::new();
        let mut serializer = Serializer::writer(&mut writer);
        serializer.collection("path", &mut path, FieldOptions::NONE, layout);
        drop(serializer);
        let node = writer.finish();

        let expected = Node::Array(vec![
            Node::object([("p", Node::from(7_i32))]),
            Node::object([("p", Node::from(8_i32))]),
        ]);
        assert_eq!(node.get(Key::Name("path")), Some(&expected));

        let mut reader = TreeReader::new(&node);
        let mut back: Option<Vec<Point>> = None;
        let mut serializer = Serializer::reader(&mut reader);
        assert!(serializer.collection("path", &mut back, FieldOptions::NONE, layout).is_ok());
        assert_eq!(back, path);
    }

    #[test]
    fn json_round_trip() {
        let mut inventory = sample_inventory();
        let json = serde_json::to_string(&crate::to_node(&mut inventory).unwrap()).unwrap();

        let node: Node = serde_json::from_str(&json).unwrap();
        let back: Inventory = crate::from_node(&node).unwrap();
        assert_eq!(back, inventory);
    }

    // -----------------------------------------------------------------------------
    // Presence

    #[test]
    fn optional_missing_collection() {
        let root = Node::object([]);
        let (records, outcome, kinds) = read_records(&root, FieldOptions::OPTIONAL);

        assert_eq!(records, None);
        assert!(outcome.is_ok());
        assert!(kinds.is_empty());
    }

    #[test]
    fn required_missing_collection() {
        let root = Node::object([]);
        let (records, outcome, kinds) = read_records(&root, FieldOptions::NONE);

        assert_eq!(records, None);
        assert!(!outcome.is_ok());
        assert_eq!(outcome.diagnostics(), 1);
        assert_eq!(kinds, vec![DiagnosticKind::UnreadableArray("items".into())]);
        assert_eq!(kinds[0].to_string(), "Unable to read array 'items'");
    }

    #[test]
    fn null_collection() {
        let root = Node::object([("items", Node::Null)]);
        let (records, outcome, kinds) = read_records(&root, FieldOptions::NONE);

        assert_eq!(records, None);
        assert!(outcome.is_ok());
        assert!(kinds.is_empty());
    }

    #[test]
    fn absent_collection_is_written_as_null_or_omitted() {
        fn write(options: FieldOptions, explicit_null: bool) -> Vec<Event> {
            let mut cursor = RecordingCursor {
                explicit_null,
                ..RecordingCursor::default()
            };
            let mut records: Option<Vec<Record>> = None;
            let mut serializer = Serializer::writer(&mut cursor);
            assert!(serializer.collection("items", &mut records, options, Record::serialize).is_ok());
            drop(serializer);
            cursor.events
        }

        assert_eq!(write(FieldOptions::NONE, false), vec![Event::Null(name("items"))]);
        assert_eq!(write(FieldOptions::OPTIONAL, false), vec![]);
        assert_eq!(write(FieldOptions::OPTIONAL, true), vec![Event::Null(name("items"))]);
    }

    #[test]
    fn null_collection_round_trips_through_tree() {
        #[derive(Debug, Default, PartialEq)]
        struct Holder {
            items: Option<Vec<Point>>,
        }

        impl Schema for Holder {
            fn serialize(&mut self, s: &mut Serializer<'_>) {
                s.collection("items", &mut self.items, FieldOptions::NONE, Point::serialize);
            }
        }

        let mut holder = Holder { items: None };
        let node = crate::to_node(&mut holder).unwrap();
        assert_eq!(node, Node::object([("items", Node::Null)]));
        assert_eq!(crate::from_node::<Holder>(&node).unwrap(), holder);
    }

    // -----------------------------------------------------------------------------
    // Failures

    #[test]
    fn failed_element_is_isolated() {
        let root = Node::object([(
            "items",
            Node::Array(vec![
                record_node(1_u32, "a"),
                record_node("two", "b"),
                record_node(3_u32, "c"),
            ]),
        )]);
        let (records, outcome, kinds) = read_records(&root, FieldOptions::NONE);

        assert_eq!(
            records,
            Some(vec![Record::new(1, "a"), Record::default(), Record::new(3, "c")])
        );
        assert!(!outcome.is_ok());
        assert_eq!(outcome.diagnostics(), 2);
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::UnreadableValue("id".into()),
                DiagnosticKind::UnreadableArray("items".into()),
            ]
        );
    }

    #[test]
    fn diagnostics_carry_field_path() {
        let root = Node::object([(
            "items",
            Node::Array(vec![record_node(1_u32, "a"), Node::object([("id", Node::from(2_u32))])]),
        )]);
        let mut reader = TreeReader::new(&root);
        let mut records: Option<Vec<Record>> = None;

        let mut serializer = Serializer::reader(&mut reader);
        serializer.collection("items", &mut records, FieldOptions::NONE, Record::serialize);
        let report = serializer.finish().unwrap_err();

        let diagnostic = &report.diagnostics()[0];
        assert_eq!(diagnostic.kind(), &DiagnosticKind::UnreadableValue("name".into()));
        crate::cfg::debug! {
            if {
                assert_eq!(diagnostic.path().to_string(), "items[1]");
                assert_eq!(
                    diagnostic.to_string(),
                    "Unable to read value 'name' (at `items[1]`)"
                );
            } else {
                assert!(diagnostic.path().is_empty());
            }
        }
    }

    #[test]
    fn element_of_wrong_shape_becomes_placeholder() {
        let root = Node::object([("items", Node::Array(vec![Node::from(5_i32), record_node(2_u32, "b")]))]);
        let (records, outcome, kinds) = read_records(&root, FieldOptions::NONE);

        assert_eq!(records, Some(vec![Record::default(), Record::new(2, "b")]));
        assert!(!outcome.is_ok());
        assert_eq!(kinds, vec![DiagnosticKind::UnreadableArray("items".into())]);
    }

    #[test]
    fn collection_of_wrong_shape() {
        let root = Node::object([("items", Node::from("not a list"))]);
        let (records, outcome, kinds) = read_records(&root, FieldOptions::OPTIONAL);

        assert_eq!(records, None);
        assert!(!outcome.is_ok());
        assert_eq!(kinds.len(), 1);
    }

    #[test]
    fn read_clears_previous_content() {
        let root = Node::object([("items", Node::Array(vec![record_node(4_u32, "d")]))]);
        let (records, outcome, _) = read_records(&root, FieldOptions::NONE);

        assert!(outcome.is_ok());
        assert_eq!(records, Some(vec![Record::new(4, "d")]));
    }

    #[test]
    fn array_is_resized_to_element_count() {
        let root = Node::object([(
            "items",
            Node::Array(vec![
                Node::object([("x", Node::from(1_i32))]),
                Node::object([("x", Node::from(2_i32)), ("y", Node::from(5_i32))]),
            ]),
        )]);
        let mut reader = TreeReader::new(&root);
        let mut path: Option<Box<[Point]>> = Some(vec![Point::default(); 5].into_boxed_slice());

        let mut serializer = Serializer::reader(&mut reader);
        assert!(serializer.collection("items", &mut path, FieldOptions::NONE, Point::serialize).is_ok());

        let expected = vec![Point { x: 1, y: 0 }, Point { x: 2, y: 5 }];
        assert_eq!(path.as_deref(), Some(expected.as_slice()));
    }

    #[test]
    fn duplicate_map_key_keeps_first_entry() {
        let root = Node::object([("items", Node::Array(vec![entry_node("a", 1), entry_node("a", 2)]))]);
        let mut reader = TreeReader::new(&root);
        let mut items: Option<BTreeMap<String, Point>> = None;

        let mut serializer = Serializer::reader(&mut reader);
        let outcome = serializer.map("items", &mut items, FieldOptions::NONE, Point::serialize);
        assert!(!outcome.is_ok());

        let report = serializer.finish().unwrap_err();
        let kinds: Vec<_> = report.diagnostics().iter().map(|d| d.kind().to_string()).collect();
        assert_eq!(kinds, vec!["Duplicate key 'a' in map 'items'", "Unable to read array 'items'"]);

        let items = items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items["a"], Point { x: 1, y: 0 });
        assert_eq!(reader.depth(), 0);
    }

    #[test]
    fn map_entry_without_key_is_dropped() {
        let root = Node::object([(
            "items",
            Node::Array(vec![
                Node::object([("value", Node::object([("x", Node::from(1_i32))]))]),
                entry_node(2_i32, 2),
            ]),
        )]);
        let mut reader = TreeReader::new(&root);
        let mut items: Option<HashMap<i32, Point>> = None;

        let mut serializer = Serializer::reader(&mut reader);
        let outcome = serializer.map("items", &mut items, FieldOptions::NONE, Point::serialize);

        assert!(!outcome.is_ok());
        assert_eq!(outcome.diagnostics(), 2);
        let items = items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[&2], Point { x: 2, y: 0 });
    }

    #[test]
    fn map_value_failure_keeps_placeholder() {
        let root = Node::object([(
            "items",
            Node::Array(vec![Node::object([("key", Node::from(3_i32)), ("value", Node::from(true))])]),
        )]);
        let mut reader = TreeReader::new(&root);
        let mut items: Option<HashMap<i32, Point>> = None;

        let mut serializer = Serializer::reader(&mut reader);
        assert!(!serializer.map("items", &mut items, FieldOptions::NONE, Point::serialize).is_ok());
        assert_eq!(items.unwrap()[&3], Point::default());
    }

    #[test]
    fn reading_continues_after_failed_collection() {
        let root = Node::object([
            ("records", Node::from(1_u8)),
            ("by_name", Node::Array(vec![entry_node("k", 6)])),
        ]);
        let inventory = crate::from_node::<Inventory>(&root);

        let report = inventory.unwrap_err();
        assert_eq!(report.diagnostics().len(), 1);

        let mut reader = TreeReader::new(&root);
        let mut inventory = Inventory::default();
        let mut serializer = Serializer::reader(&mut reader);
        inventory.serialize(&mut serializer);
        drop(serializer);

        assert_eq!(inventory.records, None);
        assert_eq!(inventory.by_name.unwrap()["k"], Point { x: 6, y: 0 });
        assert_eq!(reader.depth(), 0);
    }

    // -----------------------------------------------------------------------------
    // Write protocol

    #[test]
    fn list_write_declares_child_count() {
        let mut records = Some(vec![Record::new(1, "a"), Record::new(2, "b"), Record::new(3, "c")]);
        let mut cursor = RecordingCursor::default();

        let mut serializer = Serializer::writer(&mut cursor);
        serializer.collection("items", &mut records, FieldOptions::NONE, Record::serialize);
        drop(serializer);

        let mut expected = vec![Event::BeginArray(name("items")), Event::Count(3)];
        for (id, label) in [(1_u64, "a"), (2, "b"), (3, "c")] {
            expected.extend([
                Event::BeginObject(None),
                Event::Scalar(name("id"), Scalar::UInt(id), FieldOptions::NONE),
                Event::Scalar(name("name"), Scalar::Str(label.to_string()), FieldOptions::NONE),
                Event::EndObject,
            ]);
        }
        expected.push(Event::EndArray);

        assert_eq!(cursor.events, expected);
    }

    #[test]
    fn map_write_hints_key_as_attribute() {
        let mut items: Option<BTreeMap<String, Point>> = Some([("a".to_string(), Point { x: 1, y: 0 })].into_iter().collect());
        let mut cursor = RecordingCursor::default();

        let mut serializer = Serializer::writer(&mut cursor);
        serializer.map("items", &mut items, FieldOptions::NONE, Point::serialize);
        drop(serializer);

        assert_eq!(
            cursor.events,
            vec![
                Event::BeginArray(name("items")),
                Event::Count(1),
                Event::BeginObject(None),
                Event::Scalar(name("key"), Scalar::Str("a".to_string()), FieldOptions::PREFER_ATTRIBUTE),
                Event::BeginObject(name("value")),
                Event::Scalar(name("x"), Scalar::Int(1), FieldOptions::NONE),
                Event::EndObject,
                Event::EndObject,
                Event::EndArray,
            ]
        );
    }

    #[test]
    fn element_defaults_are_elided() {
        let mut path = Some(vec![Point { x: 1, y: 0 }, Point { x: 2, y: 3 }]);
        let mut cursor = RecordingCursor::default();

        let mut serializer = Serializer::writer(&mut cursor);
        serializer.collection("path", &mut path, FieldOptions::NONE, Point::serialize);
        drop(serializer);

        let y_events = cursor
            .events
            .iter()
            .filter(|event| matches!(event, Event::Scalar(Some(key), ..) | Event::Null(Some(key)) if key == "y"))
            .count();
        assert_eq!(y_events, 1);
    }

    #[test]
    fn explicit_nulls_replace_omitted_fields() {
        let mut path = Some(vec![Point { x: 1, y: 0 }]);
        let mut writer = TreeWriter::new().with_explicit_nulls();

        let mut serializer = Serializer::writer(&mut writer);
        serializer.collection("path", &mut path, FieldOptions::NONE, Point::serialize);
        drop(serializer);

        let expected = Node::object([(
            "path",
            Node::Array(vec![Node::object([("x", Node::from(1_i32)), ("y", Node::Null)])]),
        )]);
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.finish(), expected);
    }

    #[test]
    fn write_pass_records_nothing() {
        let mut inventory = Inventory::default();
        let mut writer = TreeWriter::new();
        let mut serializer = Serializer::writer(&mut writer);

        inventory.serialize(&mut serializer);
        assert!(serializer.is_ok());
        assert!(serializer.finish().is_ok());
    }
}
