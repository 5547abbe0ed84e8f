use num_bigint::{BigInt, BigUint};
use rand::distr::{Distribution, StandardUniform};
use rand::{Rng, RngCore};

use crate::{Affine, Curve};

/// Uniform integer in `[0, bound)` by rejection sampling.
///
/// # Panics
///
/// If `bound` is zero.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: &BigUint) -> BigUint {
    assert!(bound.bits() > 0, "bound must be positive");

    let bits = bound.bits();
    let len = bits.div_ceil(8) as usize;
    let excess = len as u64 * 8 - bits;
    let mut buf = vec![0u8; len];
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;
        let v = BigUint::from_bytes_be(&buf);
        if &v < bound {
            return v;
        }
    }
}

/// Uniform scalar in `[0, n)`.
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R, n: &BigUint) -> BigInt {
    BigInt::from(random_below(rng, n))
}

/// Random finite point, found by decompressing random abscissas.
pub fn random_point<R: Rng + ?Sized>(curve: &Curve, rng: &mut R) -> Affine {
    loop {
        let x = random_below(rng, curve.modulus());
        if let Ok(point) = curve.decompress(x, StandardUniform.sample(rng)) {
            return point;
        }
    }
}
