//! Modular arithmetic over a prime modulus on `BigUint`.
//!
//! Every helper assumes its inputs are already reduced into `[0, p)` unless
//! stated otherwise, and returns reduced values.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

/// Add two reduced values mod p.
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let sum = a + b;
    if &sum >= p {
        sum - p
    } else {
        sum
    }
}

/// Subtract two reduced values mod p.
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// Negate a reduced value mod p.
#[inline]
pub fn neg_mod(a: &BigUint, p: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        p - a
    }
}

#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Modular inverse, `None` when `a ≡ 0 (mod p)`.
#[inline]
pub fn inv_mod(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    a.modinv(p)
}

/// Reduce a signed integer into `[0, p)`.
pub fn reduce_int(k: &BigInt, p: &BigUint) -> BigUint {
    let r = k.magnitude() % p;
    if k.is_negative() && !r.is_zero() {
        p - r
    } else {
        r
    }
}

/// Writes `a - b mod p` into `out` without allocating a fresh value.
#[inline]
pub(crate) fn sub_mod_into(out: &mut BigUint, a: &BigUint, b: &BigUint, p: &BigUint) {
    out.clone_from(a);
    if a < b {
        *out += p;
    }
    *out -= b;
}
