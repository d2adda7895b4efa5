//! Shared key-reduction hasher for C3/C4.
//!
//! The base spec's `reduce(k)` is either "interpret the key block as a
//! word" (when it's small enough) or a caller-supplied reducer mapping an
//! arbitrary key block to one machine word. For a generic `K: Hash` the
//! natural Rust reducer is exactly `core::hash::Hash` run through some
//! `Hasher` down to a `u64` — this crate's default reducer is a small
//! multiplicative hasher in the same family as the teacher's own
//! `SimpleHasher` (`src/ht.rs`), rather than pulling in a third-party
//! hashing crate for what is, per the base spec, explicitly allowed to be
//! a caller-overridable, non-cryptographic function.

use core::hash::{Hash, Hasher};

/// A small multiplicative hasher, no-std, allocation-free. Not
/// cryptographically strong by design — the base spec explicitly rules
/// that out of scope (§1 Non-goals).
#[derive(Default)]
pub struct ReduceHasher {
    state: u64,
}

impl Hasher for ReduceHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(0x100000001b3).wrapping_add(byte as u64);
        }
    }
}

/// Reduce an arbitrary hashable key down to one `u64`, the base spec's
/// `reduce(k)`.
#[inline]
pub fn reduce<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = ReduceHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}
