//! Adapters for hashed sets and maps.
//!
//! Both `hashbrown` and `std` containers share the same shape, so the
//! implementations are generated by the macros below.

macro_rules! impl_sequence_for_hash_set {
    ($ty:path) => {
        impl<T, S> $crate::container::Container for $ty
        where
            T: ::core::cmp::Eq + ::core::hash::Hash,
            S: ::core::hash::BuildHasher + ::core::default::Default,
        {
            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn prepare(slot: &mut Option<Self>, count: usize) -> &mut Self {
                let set = slot.get_or_insert_with(|| {
                    Self::with_capacity_and_hasher(count, S::default())
                });
                set.clear();
                set.reserve(count);
                set
            }
        }

        impl<T, S> $crate::container::Sequence for $ty
        where
            T: ::core::cmp::Eq + ::core::hash::Hash,
            S: ::core::hash::BuildHasher + ::core::default::Default,
        {
            type Item = T;

            #[inline]
            fn place(&mut self, _index: usize, item: T) {
                self.insert(item);
            }

            #[inline]
            fn items(&self) -> impl Iterator<Item = &T> {
                self.iter()
            }
        }
    };
}

macro_rules! impl_keyed_for_hash_map {
    ($ty:path) => {
        impl<K, V, S> $crate::container::Container for $ty
        where
            K: ::core::cmp::Eq + ::core::hash::Hash,
            S: ::core::hash::BuildHasher + ::core::default::Default,
        {
            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn prepare(slot: &mut Option<Self>, count: usize) -> &mut Self {
                let map = slot.get_or_insert_with(|| {
                    Self::with_capacity_and_hasher(count, S::default())
                });
                map.clear();
                map.reserve(count);
                map
            }
        }

        impl<K, V, S> $crate::container::KeyedContainer for $ty
        where
            K: ::core::cmp::Eq + ::core::hash::Hash,
            S: ::core::hash::BuildHasher + ::core::default::Default,
        {
            type Key = K;
            type Value = V;

            fn insert_unique(&mut self, key: K, value: V) -> Result<(), K> {
                if self.contains_key(&key) {
                    return Err(key);
                }
                self.insert(key, value);
                Ok(())
            }

            #[inline]
            fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
                self.iter()
            }
        }
    };
}

crate::cfg::std! {
    pub(super) use impl_keyed_for_hash_map;
    pub(super) use impl_sequence_for_hash_set;
}

impl_sequence_for_hash_set!(::twin_utils::hash::hashbrown::HashSet<T, S>);
impl_keyed_for_hash_map!(::twin_utils::hash::hashbrown::HashMap<K, V, S>);
