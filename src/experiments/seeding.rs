//! Per-trial seed derivation.
//!
//! Every `(κ index, trial)` cell of a sweep gets its own `u64` seed derived
//! from the sweep's base seed. The three inputs are packed into a ChaCha key
//! (`StdRng::from_seed`) and the first output word is the trial seed, so
//! neighbouring cells get unrelated streams and any single trial can be
//! reproduced from its record without replaying the sweep.
use rand::{RngCore, SeedableRng, rngs::StdRng};

/// Seed for trial `trial` of the `kappa_index`-th condition number.
pub fn trial_seed(base_seed: u64, kappa_index: usize, trial: usize) -> u64 {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&base_seed.to_le_bytes());
    key[8..16].copy_from_slice(&(kappa_index as u64).to_le_bytes());
    key[16..24].copy_from_slice(&(trial as u64).to_le_bytes());
    StdRng::from_seed(key).next_u64()
}

/// Fresh generator for one trial.
pub fn trial_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
