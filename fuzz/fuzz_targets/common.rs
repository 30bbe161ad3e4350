// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

pub const MAX_VALUE_LEN: usize = 512;

pub struct ByteCursor<'a> {
    data: &'a [u8],
    idx: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, idx: 0 }
    }

    pub fn next_u8(&mut self) -> u8 {
        let value = self.data.get(self.idx).copied().unwrap_or(0);
        self.idx = self.idx.saturating_add(1);
        value
    }

    pub fn next_f64(&mut self) -> f64 {
        let mut raw = [0_u8; 8];
        for byte in &mut raw {
            *byte = self.next_u8();
        }
        f64::from_le_bytes(raw)
    }

    pub fn is_exhausted(&self) -> bool {
        self.idx >= self.data.len()
    }
}

/// Raw doubles straight from the input, sentinels and NaN payloads included.
pub fn take_values(cursor: &mut ByteCursor<'_>, len: usize) -> Vec<f64> {
    (0..len.min(MAX_VALUE_LEN))
        .map(|_| cursor.next_f64())
        .collect()
}

/// Non-decreasing finite points built from small byte-sized steps.
pub fn take_sorted_points(cursor: &mut ByteCursor<'_>, len: usize) -> Vec<f64> {
    let mut point = f64::from(cursor.next_u8()) - 128.0;
    (0..len.min(MAX_VALUE_LEN))
        .map(|_| {
            point += f64::from(cursor.next_u8() % 8) * 0.25;
            point
        })
        .collect()
}

pub fn bounded(seed: u8, min: usize, max_inclusive: usize) -> usize {
    if max_inclusive <= min {
        min
    } else {
        min + (usize::from(seed) % (max_inclusive - min + 1))
    }
}
