//! The heap's pluggable membership index (C6's `MembershipMap`).
//!
//! §4.6/§6 specify a six-function ABI (`init`, `align`, `insert`,
//! `search`, `remove`, `free`) plus a context block. Per REDESIGN FLAGS
//! this collapses to one trait: `init`/`align` become ordinary
//! construction (`Default`/`new`), and `free` is `Drop`, which every
//! implementor already gets for nothing.

use core::hash::Hash;

use crate::ht_chained::HtChained;
use crate::ht_open::HtOpen;

/// The heap's element-to-position index, pluggable per the base spec's
/// §4.6: a dense array, the division-chained table (C3), or the
/// multiplication open-addressing table (C4) all satisfy this.
pub trait MembershipMap<K, V> {
    /// Upsert `key -> val`.
    fn insert(&mut self, key: K, val: V);

    /// Look up `key`'s current value.
    fn search(&self, key: &K) -> Option<&V>;

    /// Remove `key`, returning its value if present.
    fn remove(&mut self, key: &K) -> Option<V>;
}

impl<K: Hash + PartialEq, V> MembershipMap<K, V> for HtChained<K, V> {
    #[inline]
    fn insert(&mut self, key: K, val: V) {
        HtChained::insert(self, key, val)
    }

    #[inline]
    fn search(&self, key: &K) -> Option<&V> {
        HtChained::search(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HtChained::remove(self, key)
    }
}

impl<K: Hash + PartialEq, V> MembershipMap<K, V> for HtOpen<K, V> {
    #[inline]
    fn insert(&mut self, key: K, val: V) {
        HtOpen::insert(self, key, val)
    }

    #[inline]
    fn search(&self, key: &K) -> Option<&V> {
        HtOpen::search(self, key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HtOpen::remove(self, key)
    }
}

/// The base spec's default `MembershipMap`: a dense array indexed
/// directly by vertex value, with an in-band sentinel (`None`) standing
/// in for "absent" (§6).
pub struct DenseIndexMap<V> {
    slots: alloc::vec::Vec<Option<V>>,
}

impl<V> DenseIndexMap<V> {
    /// Create a dense map over vertices `0..num_vts`.
    pub fn new(num_vts: usize) -> Self {
        let mut slots = alloc::vec::Vec::with_capacity(num_vts);
        slots.resize_with(num_vts, || None);
        Self { slots }
    }
}

impl<K: crate::block::VertexId, V> MembershipMap<K, V> for DenseIndexMap<V> {
    fn insert(&mut self, key: K, val: V) {
        self.slots[key.as_usize()] = Some(val);
    }

    fn search(&self, key: &K) -> Option<&V> {
        self.slots.get(key.as_usize()).and_then(|s| s.as_ref())
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.slots.get_mut(key.as_usize()).and_then(|s| s.take())
    }
}
