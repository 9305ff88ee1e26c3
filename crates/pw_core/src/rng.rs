//! Seeded RNG for row construction.
//!
//! Grounded in `vm_core::rng::TieRng`: a newtype over `ChaCha20Rng` with a
//! rejection-sampling `choose`-style helper, built once by the caller and
//! threaded through every call instead of reseeding a process-global
//! generator from wall-clock time on every invocation (the anomaly the
//! specification's design notes flag in the original source).

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Newtype over `ChaCha20Rng` used throughout row construction.
pub struct RowRng(ChaCha20Rng);

impl RowRng {
    /// Build a generator from an explicit seed — the deterministic,
    /// reproducible path recommended by the specification.
    pub fn from_seed(seed: u64) -> Self {
        RowRng(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Build a generator seeded from wall-clock time, for the default
    /// (non-reproducible) CLI invocation. Seeded once at solver entry, not
    /// once per `generate_row` call, unlike the original source.
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::from_seed(nanos)
    }

    /// Choose a uniform index in `0..n` using rejection sampling to avoid
    /// modulo bias. Returns `None` for `n == 0`.
    pub fn gen_index(&mut self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        let n_u64 = n as u64;
        let zone = u64::MAX - (u64::MAX % n_u64);
        loop {
            let x = self.0.next_u64();
            if x < zone {
                return Some((x % n_u64) as usize);
            }
        }
    }

    /// Decide whether to draw the next pair from `remaining` (high
    /// probability) rather than `all` (low probability / fallback).
    ///
    /// Mirrors the source's `rand() % 100 > 1 / pairs.size()` exactly,
    /// integer division included: for `remaining_len > 1` the right-hand
    /// side is `0`, so this is true unless the draw lands on `0` (a ~99%
    /// bias toward `remaining`); for `remaining_len == 1` the right-hand
    /// side is `1`, biasing slightly harder toward the fallback. Returns
    /// `false` when `remaining_len == 0` (nothing left to draw from).
    pub fn prefer_remaining(&mut self, remaining_len: usize) -> bool {
        if remaining_len == 0 {
            return false;
        }
        let path = self.gen_index(100).unwrap_or(0) as u64;
        let threshold = 1 / (remaining_len as u64); // integer division, by design
        path > threshold
    }
}
