//! Fixed-base multiplication with precomputed window tables.
//!
//! A table for base `P` and window width `w` stores, for every window
//! position `i`, the multiples `j·2^(w·i)·P` for `j < 2^w`. A multiplication
//! then costs one table lookup and at most one addition per window and no
//! doublings at all.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

use crate::affine::Scratch;
use crate::{Affine, Curve};

/// Widest window accepted by [`Curve::precompute`].
pub const MAX_TABLE_WIDTH: u32 = 16;

/// Precomputed multiples of one base point.
///
/// Immutable after construction. It must only be used with the curve that
/// built it; nothing checks this at multiplication time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBaseTable {
    base: Affine,
    width: u32,
    covered_bits: u64,
    windows: Vec<Vec<Affine>>,
    /// `2^covered_bits · P`, for scalars longer than the table.
    tail: Affine,
}

impl FixedBaseTable {
    pub fn base(&self) -> &Affine {
        &self.base
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Scalars with at most this many bits are served from the table alone.
    pub fn covered_bits(&self) -> u64 {
        self.covered_bits
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.windows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Window width minimising table construction plus `expected_uses`
/// multiplications for scalars of `bits` bits.
///
/// Building costs about `2^w` additions per window and every use about one
/// addition per window, with `⌈bits / w⌉` windows.
pub fn optimal_width(bits: u64, expected_uses: u64) -> u32 {
    let bits = bits.max(1) as u128;
    let uses = expected_uses as u128;
    (1..=MAX_TABLE_WIDTH)
        .min_by_key(|&w| {
            let windows = bits.div_ceil(w as u128);
            windows * ((1u128 << w) + uses)
        })
        .unwrap_or(1)
}

impl Curve {
    /// Table for `base` covering scalars up to the bit length of the order.
    pub fn precompute(&self, base: &Affine, width: u32) -> FixedBaseTable {
        self.precompute_bits(base, width, self.order().bits())
    }

    /// Table whose width is chosen for roughly `expected_uses` multiplications.
    pub fn precompute_for(&self, base: &Affine, expected_uses: u64) -> FixedBaseTable {
        let bits = self.order().bits();
        self.precompute_bits(base, optimal_width(bits, expected_uses), bits)
    }

    /// Table with explicit width and bit coverage. `width` is clamped to
    /// `1..=MAX_TABLE_WIDTH`.
    pub fn precompute_bits(&self, base: &Affine, width: u32, max_bits: u64) -> FixedBaseTable {
        let width = width.clamp(1, MAX_TABLE_WIDTH);
        let count = (max_bits.max(1)).div_ceil(width as u64);
        let entries = 1usize << width;

        let mut s = Scratch::new();
        let mut windows = Vec::with_capacity(count as usize);
        // 2^(w·i)·P
        let mut step = base.clone();

        for _ in 0..count {
            let mut row = Vec::with_capacity(entries);
            row.push(Affine::Infinity);
            row.push(step.clone());
            for j in 2..entries {
                let next = if j % 2 == 0 {
                    self.double_with(&mut s, &row[j / 2])
                } else {
                    self.add_with(&mut s, &row[j - 1], &step)
                };
                row.push(next);
            }
            step = self.double_with(&mut s, &row[entries / 2]);
            windows.push(row);
        }

        let table = FixedBaseTable {
            base: base.clone(),
            width,
            covered_bits: count * width as u64,
            windows,
            tail: step,
        };
        log::debug!(
            "precomputed fixed-base table on {}: width {}, {} windows, {} points",
            self.name(),
            width,
            count,
            table.len()
        );
        table
    }

    /// `k·P` for the base `P` the table was built from.
    ///
    /// Agrees with [`Curve::mul`] for every integer `k`. Bits of `|k|` above
    /// the table's coverage are multiplied onto the stored tail point.
    pub fn fmul(&self, table: &FixedBaseTable, k: &BigInt) -> Affine {
        if k.is_zero() {
            return Affine::Infinity;
        }

        let e = k.magnitude();
        let width = table.width as u64;
        let mut s = Scratch::new();
        let mut result = Affine::Infinity;

        for (i, row) in table.windows.iter().enumerate() {
            let digit = window_digit(e, i as u64 * width, width);
            if digit != 0 {
                result = self.add_with(&mut s, &result, &row[digit]);
            }
        }

        if e.bits() > table.covered_bits {
            let high = e >> table.covered_bits;
            let extra = self.mul_magnitude(&mut s, &table.tail, &high);
            result = self.add_with(&mut s, &result, &extra);
        }

        if k.is_negative() {
            self.negate(&result)
        } else {
            result
        }
    }
}

/// Bits `[start, start + width)` of `e` as an integer.
fn window_digit(e: &BigUint, start: u64, width: u64) -> usize {
    (0..width)
        .rev()
        .fold(0usize, |acc, b| (acc << 1) | e.bit(start + b) as usize)
}
