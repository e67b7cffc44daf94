use super::hash::{impl_keyed_for_hash_map, impl_sequence_for_hash_set};

impl_sequence_for_hash_set!(::std::collections::HashSet<T, S>);
impl_keyed_for_hash_map!(::std::collections::HashMap<K, V, S>);
