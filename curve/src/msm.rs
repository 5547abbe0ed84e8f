//! Simultaneous multi-scalar multiplication.

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::affine::Scratch;
use crate::errors::CurveError;
use crate::{Affine, Curve};

/// Upper bound on the number of bases sharing one subset-sum table.
pub const MAX_BLOCK_WIDTH: usize = 8;

/// Block width picked from the number of bases and the longest scalar.
pub fn default_block_width(bases: usize, bits: u64) -> usize {
    let width = match bits {
        0..=31 => 2,
        32..=127 => 4,
        128..=511 => 5,
        _ => 6,
    };
    width.min(bases).max(1)
}

impl Curve {
    /// `Σ kᵢ·Pᵢ` computed in one interleaved pass.
    ///
    /// Returns `LengthMismatch` when the slices differ in length; an empty
    /// input yields the identity. Scalars are not reduced.
    pub fn smul(&self, bases: &[Affine], scalars: &[BigInt]) -> Result<Affine, CurveError> {
        let bits = scalars.iter().map(|k| k.bits()).max().unwrap_or(0);
        self.smul_with_width(bases, scalars, default_block_width(bases.len(), bits))
    }

    /// As [`Curve::smul`], grouping `block_width` bases per subset-sum table.
    ///
    /// The bases are split into blocks and every block gets a table of all
    /// `2^block_width` subset sums. The accumulator is doubled once per bit
    /// position and receives at most one addition per block per bit.
    pub fn smul_with_width(
        &self,
        bases: &[Affine],
        scalars: &[BigInt],
        block_width: usize,
    ) -> Result<Affine, CurveError> {
        if bases.len() != scalars.len() {
            return Err(CurveError::LengthMismatch {
                bases: bases.len(),
                scalars: scalars.len(),
            });
        }

        let width = block_width.clamp(1, MAX_BLOCK_WIDTH);
        let magnitudes: Vec<&BigUint> = scalars.iter().map(|k| k.magnitude()).collect();
        let bits = magnitudes.iter().map(|k| k.bits()).max().unwrap_or(0);
        if bits == 0 {
            return Ok(Affine::Infinity);
        }

        let mut s = Scratch::new();

        // Fold the sign of each scalar into its base
        let signed: Vec<Affine> = bases
            .iter()
            .zip(scalars)
            .map(|(base, k)| {
                if k.is_negative() {
                    self.negate(base)
                } else {
                    base.clone()
                }
            })
            .collect();

        let tables: Vec<Vec<Affine>> = signed
            .chunks(width)
            .map(|block| self.subset_sums(&mut s, block))
            .collect();
        log::trace!(
            "smul over {} bases: {} blocks of width {}, {} bits",
            bases.len(),
            tables.len(),
            width,
            bits
        );

        let mut result = Affine::Infinity;
        for i in (0..bits).rev() {
            result = self.double_with(&mut s, &result);
            for (table, block) in tables.iter().zip(magnitudes.chunks(width)) {
                let index = block
                    .iter()
                    .enumerate()
                    .fold(0usize, |acc, (j, k)| acc | ((k.bit(i) as usize) << j));
                if index != 0 {
                    result = self.add_with(&mut s, &result, &table[index]);
                }
            }
        }

        Ok(result)
    }

    /// `table[mask] = Σ_{j ∈ mask} bases[j]`.
    fn subset_sums(&self, s: &mut Scratch, bases: &[Affine]) -> Vec<Affine> {
        let mut table = vec![Affine::Infinity; 1 << bases.len()];
        for (j, base) in bases.iter().enumerate() {
            let step = 1usize << j;
            for i in 0..step {
                table[step + i] = self.add_with(s, &table[i], base);
            }
        }
        table
    }
}
