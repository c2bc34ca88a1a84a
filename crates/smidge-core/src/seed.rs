//! Deterministic seed handling for reproducible masking runs.
//!
//! A run has a single root seed; each masked column derives its own child
//! seed from the root and the column name:
//!
//! ```text
//! Run seed
//! └── Column seed (per masked column)
//! ```
//!
//! Child seeds are derived deterministically via hashing, so a multi-column
//! plan is reproducible from one root seed while columns remain mutually
//! independent.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Derive a child seed from a parent seed and a string key.
///
/// Uses `DefaultHasher` (SipHash-1-3) for fast, deterministic mixing.
///
/// # Example
///
/// ```
/// use smidge_core::seed::derive_seed;
///
/// let a = derive_seed(42, "salary");
/// let b = derive_seed(42, "salary");
/// assert_eq!(a, b); // deterministic
/// assert_ne!(a, derive_seed(42, "bonus"));
/// ```
#[must_use]
pub fn derive_seed(parent: u64, key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    key.hash(&mut hasher);
    hasher.finish()
}

/// Create a `ChaCha8Rng` from an optional seed.
///
/// `Some` gives a fully deterministic generator; `None` initializes it from
/// OS entropy.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Create the generator for one column, derived from the run's root seed.
#[must_use]
pub fn column_rng(root: u64, column: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_seed(root, column))
}

/// Draw a fresh root seed from OS entropy.
///
/// Used when a plan carries no seed, so the chosen root can still be
/// reported and the run reproduced after the fact.
#[must_use]
pub fn entropy_seed() -> u64 {
    rand::rngs::OsRng.next_u64()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
