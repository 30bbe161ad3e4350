// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Deterministic fixtures shared by the benchmarks.

use calign_core::Curve;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

/// Irregularly spaced curve of `n` samples with roughly one sample in
/// `gap_every` replaced by a sentinel. `gap_every == 0` disables gaps.
pub fn irregular_curve(n: usize, seed: u64, gap_every: u64) -> Curve {
    let mut state = seed;
    let mut point = 0.0;
    let mut points = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);

    for idx in 0..n {
        let step = 1.0 + ((lcg_next(&mut state) >> 33) % 1000) as f64 / 250.0;
        point += step;
        points.push(point);

        let x = idx as f64;
        let missing = gap_every != 0 && (lcg_next(&mut state) >> 33) % gap_every == 0;
        values.push(if missing {
            f64::INFINITY
        } else {
            x.sin() + (0.01 * x).cos()
        });
    }

    Curve::new(values, points).expect("strictly increasing fixture points form a valid curve")
}
