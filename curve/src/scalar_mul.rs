//! Single-base scalar multiplication.
//!
//! Scalars are arbitrary signed integers and are never reduced modulo the
//! base point order: `k·P` is computed from the literal value of `k`.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

use crate::affine::Scratch;
use crate::{Affine, Curve};

/// Sliding-window width for a scalar of the given bit length.
fn window_width(bits: u64) -> usize {
    match bits {
        0..=24 => 2,
        25..=96 => 3,
        97..=288 => 4,
        _ => 5,
    }
}

impl Curve {
    /// `k·P` by sliding-window double-and-add over odd multiples of `P`.
    ///
    /// Multiplies by `|k|` and negates the result when `k < 0`; `k = 0` and
    /// `P = O` give the identity.
    pub fn mul(&self, point: &Affine, k: &BigInt) -> Affine {
        if k.is_zero() || point.is_infinity() {
            return Affine::Infinity;
        }

        let mut s = Scratch::new();
        let result = self.mul_magnitude(&mut s, point, k.magnitude());
        if k.is_negative() {
            self.negate(&result)
        } else {
            result
        }
    }

    /// `k·G` for the curve's base point.
    pub fn mul_generator(&self, k: &BigInt) -> Affine {
        self.mul(self.generator(), k)
    }

    /// Plain binary double-and-add, least significant bit first.
    pub fn mul_binary(&self, point: &Affine, k: &BigInt) -> Affine {
        let mut s = Scratch::new();
        let mut result = Affine::Infinity;
        let mut temp = point.clone();
        let bits = k.magnitude();

        for i in 0..bits.bits() {
            if bits.bit(i) {
                result = self.add_with(&mut s, &result, &temp);
            }
            temp = self.double_with(&mut s, &temp);
        }

        if k.is_negative() {
            self.negate(&result)
        } else {
            result
        }
    }

    pub(crate) fn mul_magnitude(&self, s: &mut Scratch, point: &Affine, e: &BigUint) -> Affine {
        let bits = e.bits();
        let width = window_width(bits);
        let table = self.odd_multiples(s, point, width);

        let mut result = Affine::Infinity;
        let mut i = bits;
        while i > 0 {
            let top = i - 1;
            if !e.bit(top) {
                result = self.double_with(s, &result);
                i -= 1;
                continue;
            }

            // Longest window [low, top] of at most `width` bits ending in a one
            let mut low = top.saturating_sub(width as u64 - 1);
            while !e.bit(low) {
                low += 1;
            }

            let mut window = 0usize;
            for b in (low..=top).rev() {
                window = (window << 1) | e.bit(b) as usize;
                result = self.double_with(s, &result);
            }
            result = self.add_with(s, &result, &table[window >> 1]);
            i = low;
        }

        result
    }

    /// `[P, 3P, 5P, ..., (2^width - 1)P]`.
    fn odd_multiples(&self, s: &mut Scratch, point: &Affine, width: usize) -> Vec<Affine> {
        let len = 1usize << (width - 1);
        let mut table = Vec::with_capacity(len);
        table.push(point.clone());
        if len > 1 {
            let twice = self.double_with(s, point);
            for i in 1..len {
                let next = self.add_with(s, &table[i - 1], &twice);
                table.push(next);
            }
        }
        table
    }
}
