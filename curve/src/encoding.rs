//! Canonical byte encodings for values crossing a binding boundary.
//!
//! Integers use the minimal two's-complement big-endian form, the same form
//! `BigInt::to_signed_bytes_be` produces. Field elements are non-negative
//! integers below the modulus in that encoding. Points travel as a pair of
//! coordinates, with the identity sent as the pair `(-1, -1)`.

use num_bigint::{BigInt, BigUint};
use num_traits::Signed;

use crate::errors::CurveError;
use crate::Affine;

pub fn encode_int(k: &BigInt) -> Vec<u8> {
    k.to_signed_bytes_be()
}

/// The empty string decodes to zero.
pub fn decode_int(bytes: &[u8]) -> BigInt {
    BigInt::from_signed_bytes_be(bytes)
}

pub fn encode_field(v: &BigUint) -> Vec<u8> {
    let mut bytes = v.to_bytes_be();
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0);
    }
    bytes
}

/// Decodes a field element, rejecting negatives and values `>= p`.
pub fn decode_field(bytes: &[u8], p: &BigUint) -> Result<BigUint, CurveError> {
    let v = decode_int(bytes);
    if v.is_negative() || v.magnitude() >= p {
        return Err(CurveError::NonCanonicalEncoding);
    }
    Ok(v.magnitude().clone())
}

pub fn encode_point(point: &Affine) -> (Vec<u8>, Vec<u8>) {
    match point {
        Affine::Infinity => {
            let minus_one = encode_int(&BigInt::from(-1));
            (minus_one.clone(), minus_one)
        }
        Affine::Point { x, y } => (encode_field(x), encode_field(y)),
    }
}

pub fn decode_point(x: &[u8], y: &[u8], p: &BigUint) -> Result<Affine, CurveError> {
    let minus_one = BigInt::from(-1);
    if decode_int(x) == minus_one && decode_int(y) == minus_one {
        return Ok(Affine::Infinity);
    }
    Ok(Affine::new(decode_field(x, p)?, decode_field(y, p)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{random_below, random_point};
    use crate::registry;
    use num_traits::{One, Zero};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_field_round_trip_every_modulus() {
        let mut rng = StdRng::seed_from_u64(42);
        for name in registry::names() {
            let p = registry::resolve(name).unwrap().modulus().clone();
            let mut samples = vec![BigUint::zero(), BigUint::one(), &p - 1u32, &p >> 1u32];
            samples.extend((0..16).map(|_| random_below(&mut rng, &p)));
            for v in samples {
                let bytes = encode_field(&v);
                assert_eq!(decode_field(&bytes, &p).unwrap(), v, "{name}");
                assert_eq!(bytes, encode_int(&BigInt::from(v)), "{name}");
            }
        }
    }

    #[test]
    fn test_field_rejects_out_of_range() {
        let p = BigUint::from(251u32);
        assert_eq!(
            decode_field(&encode_field(&p), &p),
            Err(CurveError::NonCanonicalEncoding)
        );
        assert_eq!(
            decode_field(&encode_int(&BigInt::from(-5)), &p),
            Err(CurveError::NonCanonicalEncoding)
        );
    }

    #[test]
    fn test_sign_bit_padding() {
        assert_eq!(encode_field(&BigUint::from(0x80u32)), vec![0x00, 0x80]);
        assert_eq!(encode_field(&BigUint::from(0x7fu32)), vec![0x7f]);
        assert_eq!(encode_field(&BigUint::zero()), vec![0x00]);
        assert_eq!(encode_int(&BigInt::from(-1)), vec![0xff]);
        assert_eq!(decode_int(&[]), BigInt::zero());
    }

    #[test]
    fn test_point_encoding() {
        let curve = registry::resolve("P-256").unwrap();
        let p = curve.modulus();
        let mut rng = StdRng::seed_from_u64(42);
        let point = random_point(&curve, &mut rng);

        let (x, y) = encode_point(&point);
        assert_eq!(decode_point(&x, &y, p).unwrap(), point);

        let (x, y) = encode_point(&Affine::INFINITY);
        assert_eq!((x.as_slice(), y.as_slice()), (&[0xffu8][..], &[0xffu8][..]));
        assert_eq!(decode_point(&x, &y, p).unwrap(), Affine::INFINITY);
    }
}
