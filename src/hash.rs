//! Key hashing shared by the comparison strategies.
//!
//! Backs [`KeyComparer::hash_key`](crate::KeyComparer::hash_key); the lexicon
//! itself hashes normalized keys through its map's own hasher.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Computes the 64-bit hash of a value using the standard hasher.
///
/// The hasher is unseeded, so the result is stable for the lifetime of the
/// process and identical across lexicons.
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
