//! Multiplication open-addressing hash table (C4): power-of-two slot
//! count, double-hashed probe sequence, tombstone deletes.
//!
//! Implements §4.4 verbatim: `ix0`/`step` derived from the top bits of
//! two multiplicative hashes of the reduced key, grow-or-clean evaluated
//! before each insert while the load factor is over bound, and
//! `max_num_probes` tracking the worst successful-insert probe chain
//! ever observed so `search` knows when to give up.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::hashutil::reduce;
use crate::mul_table::{default_multipliers, hi_bits, make_odd};

/// Smallest slot-count exponent; `count = 2^L0`.
const MIN_L: u32 = 4;

enum Slot<K, V> {
    Empty,
    Live { key: K, h1: u64, h2: u64, elt: V },
    Tomb,
}

/// A multiplication open-addressing hash table mapping `K` to `V`.
pub struct HtOpen<K, V> {
    slots: Vec<Slot<K, V>>,
    l: u32,
    num_elts: usize,
    num_placeholders: usize,
    max_num_probes: usize,
    alpha: f64,
    p1: u64,
    p2: u64,
}

/// `W` in the base spec: the platform word width this table's growth
/// ceiling is expressed in. `2^(W-1)` is the largest slot count C4 will
/// ever grow to.
const WORD_BITS: u32 = usize::BITS;

impl<K, V> HtOpen<K, V> {
    /// Create a table with the smallest built-in slot count and the
    /// given load-factor bound, which must be strictly less than one
    /// (§3: "strictly less than one for HT-M").
    pub fn new(alpha: f64) -> Self {
        assert!((0.0..1.0).contains(&alpha), "HT-M load factor must be in [0, 1)");
        let (p1, p2) = default_multipliers();
        let l = MIN_L;
        Self {
            slots: Self::fresh_slots(l),
            l,
            num_elts: 0,
            num_placeholders: 0,
            max_num_probes: 0,
            alpha,
            p1,
            p2,
        }
    }

    fn fresh_slots(l: u32) -> Vec<Slot<K, V>> {
        let count = 1usize << l;
        // §7's "integer overflow in size computation" row: fail loudly
        // before asking the allocator for a byte count that wrapped,
        // rather than let `Vec` allocate a wrong, too-small buffer.
        let _ = crate::error::checked_mul(count, core::mem::size_of::<Slot<K, V>>());
        let mut v = Vec::with_capacity(count);
        v.resize_with(count, || Slot::Empty);
        v
    }

    /// Current slot count (`count`, a power of two).
    #[inline]
    pub fn count(&self) -> usize {
        1 << self.l
    }

    /// Current number of live keys.
    #[inline]
    pub fn num_elts(&self) -> usize {
        self.num_elts
    }

    /// Current number of tombstones.
    #[inline]
    pub fn num_placeholders(&self) -> usize {
        self.num_placeholders
    }

    /// Longest successful-insert probe chain ever observed.
    #[inline]
    pub fn max_num_probes(&self) -> usize {
        self.max_num_probes
    }

    fn probe_start(&self, h1: u64) -> usize {
        hi_bits(self.p1.wrapping_mul(h1), self.l)
    }

    fn probe_step(&self, h2: u64) -> usize {
        make_odd(hi_bits(self.p2.wrapping_mul(h2), self.l))
    }
}

impl<K: Hash + PartialEq, V> HtOpen<K, V> {
    fn hashes(key: &K) -> (u64, u64) {
        // Two independent reductions give independent-enough h1/h2 without
        // a second hasher type; both feed a different multiplier below.
        let h1 = reduce(key);
        let h2 = reduce(&(h1, 0xA5A5_A5A5_A5A5_A5A5u64));
        (h1, h2)
    }

    /// Insert `(key, elt)`. Replaces the element on an equal-key hit
    /// without changing `num_elts`; otherwise claims the first empty or
    /// tombstone slot on the probe sequence.
    pub fn insert(&mut self, key: K, elt: V) {
        self.maybe_grow_or_clean();

        let (h1, h2) = Self::hashes(&key);
        let step = self.probe_step(h2);
        let mut ix = self.probe_start(h1);
        let mut first_tomb: Option<usize> = None;
        let count = self.count();

        for probe in 0..count {
            match &self.slots[ix] {
                Slot::Live {
                    key: k,
                    h1: lh1,
                    h2: lh2,
                    ..
                } if *lh1 == h1 && *lh2 == h2 && k == &key => {
                    self.slots[ix] = Slot::Live { key, h1, h2, elt };
                    return;
                }
                Slot::Live { .. } => {}
                Slot::Tomb => {
                    if first_tomb.is_none() {
                        first_tomb = Some(ix);
                    }
                }
                Slot::Empty => {
                    let dest = first_tomb.unwrap_or(ix);
                    if first_tomb.is_some() {
                        self.num_placeholders -= 1;
                    }
                    self.slots[dest] = Slot::Live { key, h1, h2, elt };
                    self.num_elts += 1;
                    self.max_num_probes = self.max_num_probes.max(probe + 1);
                    return;
                }
            }
            ix = (ix + step) & (count - 1);
        }

        // Every slot visited and none empty: only possible if the table
        // is saturated with tombstones from a run of removes without an
        // intervening clean. Fall back to the first tombstone seen.
        if let Some(dest) = first_tomb {
            self.num_placeholders -= 1;
            self.slots[dest] = Slot::Live { key, h1, h2, elt };
            self.num_elts += 1;
            self.max_num_probes = self.max_num_probes.max(count);
        } else {
            crate::error::fatal("HT-M insert found no empty or tombstone slot");
        }
    }

    /// Look up `key`. Walks the probe sequence up to `max_num_probes`
    /// slots, per §4.4's invariant #4.
    pub fn search(&self, key: &K) -> Option<&V> {
        let (h1, h2) = Self::hashes(key);
        let step = self.probe_step(h2);
        let mut ix = self.probe_start(h1);
        let count = self.count();
        let limit = self.max_num_probes.min(count);

        for _ in 0..limit {
            match &self.slots[ix] {
                Slot::Live {
                    key: k,
                    h1: lh1,
                    h2: lh2,
                    elt,
                } if *lh1 == h1 && *lh2 == h2 && k == key => return Some(elt),
                Slot::Empty => return None,
                _ => {}
            }
            ix = (ix + step) & (count - 1);
        }
        None
    }

    /// True if `key` is present.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Remove `key`, converting its slot to a tombstone and returning
    /// the element if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let (h1, h2) = Self::hashes(key);
        let step = self.probe_step(h2);
        let mut ix = self.probe_start(h1);
        let count = self.count();
        let limit = self.max_num_probes.min(count);

        for _ in 0..limit {
            match &self.slots[ix] {
                Slot::Live {
                    key: k,
                    h1: lh1,
                    h2: lh2,
                    ..
                } if *lh1 == h1 && *lh2 == h2 && k == key => {
                    let old = core::mem::replace(&mut self.slots[ix], Slot::Tomb);
                    self.num_elts -= 1;
                    self.num_placeholders += 1;
                    if let Slot::Live { elt, .. } = old {
                        return Some(elt);
                    }
                    unreachable!()
                }
                Slot::Empty => return None,
                _ => {}
            }
            ix = (ix + step) & (count - 1);
        }
        None
    }

    /// Remove `key`, dropping its element (`delete`).
    #[inline]
    pub fn delete(&mut self, key: &K) {
        let _ = self.remove(key);
    }

    fn load(&self) -> f64 {
        (self.num_elts + self.num_placeholders) as f64 / self.count() as f64
    }

    fn maybe_grow_or_clean(&mut self) {
        while self.load() > self.alpha {
            if self.num_elts < self.num_placeholders {
                self.clean();
            } else if self.l < WORD_BITS - 1 {
                self.grow();
            } else {
                #[cfg(feature = "log")]
                log::warn!(
                    "ht_open: at max_count (2^{}); load factor no longer enforced",
                    WORD_BITS - 1
                );
                break;
            }
        }
    }

    /// Rebuild at the same size, dropping tombstones.
    fn clean(&mut self) {
        #[cfg(feature = "log")]
        log::debug!("ht_open: cleaning {} tombstones", self.num_placeholders);
        self.rebuild(self.l);
    }

    /// Double the slot count and rehash live entries.
    fn grow(&mut self) {
        #[cfg(feature = "log")]
        log::debug!("ht_open: growing 2^{} -> 2^{} slots", self.l, self.l + 1);
        self.rebuild(self.l + 1);
    }

    fn rebuild(&mut self, new_l: u32) {
        let mut old = Self::fresh_slots(new_l);
        core::mem::swap(&mut self.slots, &mut old);
        self.l = new_l;
        self.num_placeholders = 0;
        self.num_elts = 0;

        for slot in old {
            if let Slot::Live { key, h1, h2, elt } = slot {
                self.reinsert(key, h1, h2, elt);
            }
        }
    }

    /// Re-place a live entry during rehash without re-deriving `h1`/`h2`
    /// (they're cached on the slot precisely so grow/clean can skip the
    /// multiplier, per §4.4).
    fn reinsert(&mut self, key: K, h1: u64, h2: u64, elt: V) {
        let step = self.probe_step(h2);
        let mut ix = self.probe_start(h1);
        let count = self.count();
        for probe in 0..count {
            if matches!(self.slots[ix], Slot::Empty) {
                self.slots[ix] = Slot::Live { key, h1, h2, elt };
                self.num_elts += 1;
                self.max_num_probes = self.max_num_probes.max(probe + 1);
                return;
            }
            ix = (ix + step) & (count - 1);
        }
        crate::error::fatal("HT-M rehash found no empty slot");
    }
}
