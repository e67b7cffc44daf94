use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::iter;

use super::{Container, KeyedContainer, Sequence};

// -----------------------------------------------------------------------------
// Vec

impl<T> Container for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn prepare(slot: &mut Option<Self>, count: usize) -> &mut Self {
        let list = slot.get_or_insert_with(|| Vec::with_capacity(count));
        list.clear();
        list.reserve(count);
        list
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn place(&mut self, _index: usize, item: T) {
        self.push(item);
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// Box<[T]>

impl<T: Default> Container for Box<[T]> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn prepare(slot: &mut Option<Self>, count: usize) -> &mut Self {
        if !matches!(slot, Some(array) if array.len() == count) {
            *slot = Some(iter::repeat_with(T::default).take(count).collect());
        }
        slot.get_or_insert_with(Box::default)
    }
}

impl<T: Default> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn place(&mut self, index: usize, item: T) {
        if let Some(slot) = self.get_mut(index) {
            *slot = item;
        }
    }

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// BTreeSet

impl<T: Ord> Container for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn prepare(slot: &mut Option<Self>, _count: usize) -> &mut Self {
        let set = slot.get_or_insert_with(BTreeSet::new);
        set.clear();
        set
    }
}

impl<T: Ord> Sequence for BTreeSet<T> {
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

// -----------------------------------------------------------------------------
// BTreeMap

impl<K: Ord, V> Container for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn prepare(slot: &mut Option<Self>, _count: usize) -> &mut Self {
        let map = slot.get_or_insert_with(BTreeMap::new);
        map.clear();
        map
    }
}

impl<K: Ord, V> KeyedContainer for BTreeMap<K, V> {
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
