//! Square roots modulo an odd prime.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// Legendre symbol `(a | p)` by Euler's criterion: `1`, `-1`, or `0` when `p | a`.
pub fn legendre(a: &BigUint, p: &BigUint) -> i8 {
    let a = a % p;
    if a.is_zero() {
        return 0;
    }
    let exp = (p - 1u32) >> 1u32;
    if a.modpow(&exp, p).is_one() {
        1
    } else {
        -1
    }
}

/// Whether `a` has a square root modulo `p` (zero counts as a square).
pub fn is_quadratic_residue(a: &BigUint, p: &BigUint) -> bool {
    legendre(a, p) >= 0
}

/// Returns some `r` with `r² ≡ a (mod p)`.
///
/// `p` must be prime. Moduli with `p ≡ 3 (mod 4)` take the single
/// exponentiation `a^((p+1)/4)`; everything else goes through Tonelli–Shanks.
/// Which of the two roots `r` and `p - r` comes back depends on the path taken;
/// callers that need a canonical root pick it themselves.
///
/// A modulus below 2 is rejected with `InvalidParameters`; other composite
/// moduli are not detected.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    if p < &BigUint::from(2u32) {
        return Err(CurveError::InvalidParameters("modulus must be a prime"));
    }
    let a = a % p;
    if a.is_zero() || p == &BigUint::from(2u32) {
        return Ok(a);
    }

    if p.bit(1) {
        let exp = (p + 1u32) >> 2u32;
        let candidate = a.modpow(&exp, p);
        // a non-residue comes back as a root of -a
        if &candidate * &candidate % p == a {
            return Ok(candidate);
        }
        return Err(CurveError::NoSquareRoot);
    }

    if legendre(&a, p) != 1 {
        return Err(CurveError::NoSquareRoot);
    }
    tonelli_shanks(&a, p)
}

fn tonelli_shanks(a: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    // p - 1 = q * 2^s with q odd
    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    let mut z = BigUint::from(2u32);
    while legendre(&z, p) != -1 {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u32) >> 1u32), p);

    while !t.is_one() {
        // least i with t^(2^i) = 1
        let mut i = 0u64;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = &t2i * &t2i % p;
            i += 1;
            if i == m {
                return Err(CurveError::NoSquareRoot);
            }
        }

        let b = c.modpow(&(BigUint::one() << (m - i - 1)), p);
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * &b % p;
    }

    Ok(r)
}
