//! Memo table for tree generations.
//!
//! Entries map `(branch, n)` to the branches exactly `n` growth steps below
//! it. The table only ever grows: an entry is a pure function of its key, so
//! there is nothing to invalidate.
//!
//! ## Keys
//!
//! `f64` is not `Eq`/`Hash`, so the key stores the raw bit patterns. That is
//! only meaningful for finite values: NaN never equals itself as a number,
//! and a NaN branch is already the result of a domain error. Branches with a
//! non-finite parameter therefore have no key, and the caller computes them
//! without touching the cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::branch::{Branch, BranchColors};

/// Hashable identity of a branch: its parameters and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchKey {
    bits: [u64; 5],
    colors: BranchColors,
}

impl BranchKey {
    /// `None` when any numeric parameter is NaN or infinite.
    pub fn of(branch: &Branch) -> Option<Self> {
        let origin = branch.origin();
        let params = [
            origin.x,
            origin.y,
            branch.side(),
            branch.inclination(),
            branch.projection(),
        ];
        if !params.iter().all(|v| v.is_finite()) {
            return None;
        }
        // -0.0 and 0.0 are the same geometry; normalise before taking bits.
        let bits = params.map(|v| if v == 0.0 { 0u64 } else { v.to_bits() });
        Some(Self { bits, colors: branch.colors() })
    }
}

/// Thread-safe, append-only generation table.
///
/// The lock is held only for a lookup or an insert, never while growing.
/// Two threads missing on the same entry both compute it; the first insert
/// wins and both results are identical anyway.
#[derive(Debug, Default)]
pub struct GenerationCache {
    entries: Mutex<HashMap<(BranchKey, usize), Arc<[Branch]>>>,
}

impl GenerationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &BranchKey, n: usize) -> Option<Arc<[Branch]>> {
        self.lock().get(&(*key, n)).cloned()
    }

    /// Store a generation unless one is already there; returns the stored one.
    pub fn insert(&self, key: BranchKey, n: usize, generation: Arc<[Branch]>) -> Arc<[Branch]> {
        self.lock()
            .entry((key, n))
            .or_insert(generation)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(BranchKey, usize), Arc<[Branch]>>> {
        // Entries are written whole under the lock, so a panic elsewhere
        // cannot leave a half-written one behind.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
