//! Division-chained hash table (C3): prime-modulus bucket index, one
//! [`DList`] chain per bucket.
//!
//! Growth steps `count` to the next entry in [`crate::primes`] whenever
//! `num_elts / count` exceeds the caller's load-factor bound and the
//! table hasn't already reached the largest built-in prime, exactly per
//! the base spec's §4.3.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::dlist::DList;
use crate::hashutil::reduce;
use crate::primes::{next_prime_after, PRIMES};

/// A division-chained hash table mapping `K` to `V`.
pub struct HtChained<K, V> {
    buckets: Vec<DList<K, V>>,
    num_elts: usize,
    /// Load-factor upper bound `num_elts / count`; unconstrained growth
    /// stops once `count == max_count()`, per §4.3.
    alpha: f64,
}

impl<K, V> HtChained<K, V> {
    /// Create a table with the smallest built-in prime bucket count and
    /// the given load-factor bound.
    pub fn new(alpha: f64) -> Self {
        Self::with_bucket_count(PRIMES[0], alpha)
    }

    fn with_bucket_count(count: usize, alpha: f64) -> Self {
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, DList::new);
        Self {
            buckets,
            num_elts: 0,
            alpha,
        }
    }

    /// Current bucket count (`count` in the base spec).
    #[inline]
    pub fn count(&self) -> usize {
        self.buckets.len()
    }

    /// Current number of live keys.
    #[inline]
    pub fn num_elts(&self) -> usize {
        self.num_elts
    }

    /// True if no keys are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_elts == 0
    }

    fn bucket_index(&self, key: &K) -> usize
    where
        K: Hash,
    {
        (reduce(key) % self.buckets.len() as u64) as usize
    }

    /// Iterate every `(key, element)` pair currently stored, bucket by
    /// bucket. Used by the TSP dynamic-programming table (C7) to sweep
    /// a DP level without needing a separate iteration ABI.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flat_map(|b| b.iter())
    }
}

impl<K: Hash + PartialEq, V> HtChained<K, V> {
    /// Insert `(key, elt)`. Replaces the existing element on an
    /// equal-key hit (dropping the old one) without changing `num_elts`;
    /// otherwise prepends a fresh chain node and may trigger growth.
    pub fn insert(&mut self, key: K, elt: V) {
        let idx = self.bucket_index(&key);
        if let Some(node) = self.buckets[idx].search_key(&key) {
            *self.buckets[idx].elt_mut(node) = elt;
            return;
        }
        self.buckets[idx].prepend_new(key, elt);
        self.num_elts += 1;
        self.maybe_grow();
    }

    /// Look up `key`, returning a reference to its element if present.
    pub fn search(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .search_key(key)
            .map(|node| self.buckets[idx].elt(node))
    }

    /// True if `key` is present.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Remove `key`, returning its element if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let node = self.buckets[idx].search_key(key)?;
        let (_k, v) = self.buckets[idx].remove(node);
        self.num_elts -= 1;
        Some(v)
    }

    /// Remove `key`, dropping its element (`delete`).
    #[inline]
    pub fn delete(&mut self, key: &K) {
        let _ = self.remove(key);
    }

    fn maybe_grow(&mut self)
    where
        K: Hash,
    {
        let load = self.num_elts as f64 / self.buckets.len() as f64;
        if load <= self.alpha {
            return;
        }
        let Some(new_count) = next_prime_after(self.buckets.len()) else {
            return; // at max_count(); §4.3 says keep chaining unbounded.
        };
        self.rehash_to(new_count);
    }

    fn rehash_to(&mut self, new_count: usize)
    where
        K: Hash,
    {
        #[cfg(feature = "log")]
        log::debug!(
            "ht_chained: growing {} -> {new_count} buckets ({} elements)",
            self.buckets.len(),
            self.num_elts
        );
        let mut old_buckets = Vec::with_capacity(new_count);
        old_buckets.resize_with(new_count, DList::new);
        core::mem::swap(&mut self.buckets, &mut old_buckets);

        for mut bucket in old_buckets {
            while let Some(head) = bucket.head() {
                // Hash the key while it's still attached, then `unlink`
                // (not `remove`) so the node's single allocation moves
                // straight into its new bucket via `prepend` rather than
                // being torn down and reallocated per §4.3's rehash.
                let idx = (reduce(bucket.key(head)) % self.buckets.len() as u64) as usize;
                let node = bucket.unlink(head);
                self.buckets[idx].prepend(node);
            }
        }
    }
}
