// lowline-core - Shuffle
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Random-order permutation.
//!
//! Driven by a small thread-local linear congruential generator, seeded
//! lazily from system time, so the library carries no RNG dependency.

use std::cell::Cell;

use lowline_value::Value;

use crate::error::Result;

use super::as_seq;

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

thread_local! {
    /// Persistent RNG state, seeded lazily from system time.
    static RNG_STATE: Cell<u64> = const { Cell::new(0) };
    static RNG_SEEDED: Cell<bool> = const { Cell::new(false) };
}

/// Get the next random u64, advancing the RNG state.
fn next_random_u64() -> u64 {
    RNG_STATE.with(|state| {
        RNG_SEEDED.with(|seeded| {
            if !seeded.get() {
                // Seed lazily from system time
                use std::time::{SystemTime, UNIX_EPOCH};
                let seed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap()
                    .as_nanos() as u64;
                state.set(seed);
                seeded.set(true);
            }
        });
        let current = state.get();
        let next = current
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        state.set(next);
        next
    })
}

/// A copy of the sequence with its elements in random order.
///
/// Fisher-Yates over the copy; the input is never mutated.
pub fn shuffle(seq: &Value) -> Result<Value> {
    let mut items: Vec<Value> = as_seq("shuffle", seq)?.iter().cloned().collect();

    for i in (1..items.len()).rev() {
        let j = (next_random_u64() % ((i + 1) as u64)) as usize;
        items.swap(i, j);
    }

    Ok(Value::seq(items))
}
