//! Curve parameters and point validation.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::errors::CurveError;
use crate::field::neg_mod;
use crate::sqrt::sqrt_mod;
use crate::Affine;

/// Domain parameters of a curve `y^2 = x^3 + a*x + b (mod p)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParameters {
    pub modulus: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub gx: BigUint,
    pub gy: BigUint,
    /// Order of the base point.
    pub n: BigUint,
}

/// A short Weierstrass curve over a prime field together with its base point.
///
/// Immutable once constructed; every arithmetic operation takes `&self`, so a
/// curve can be shared between threads for concurrent reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    name: String,
    modulus: BigUint,
    a: BigUint,
    b: BigUint,
    generator: Affine,
    order: BigUint,
}

impl Curve {
    /// Builds a curve from raw parameters.
    ///
    /// Checks that `p` is odd and greater than 3, that every parameter is
    /// reduced, that the curve is non-singular and that the base point lies on
    /// it. Primality of `p` and the order of the base point are taken on trust.
    pub fn new(
        name: impl Into<String>,
        modulus: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        order: BigUint,
    ) -> Result<Self, CurveError> {
        if modulus <= BigUint::from(3u32) || modulus.is_even() {
            return Err(CurveError::InvalidParameters("modulus must be an odd prime above 3"));
        }
        if a >= modulus || b >= modulus || gx >= modulus || gy >= modulus {
            return Err(CurveError::InvalidParameters("parameters must be reduced mod p"));
        }
        if order <= BigUint::one() {
            return Err(CurveError::InvalidParameters("base point order must exceed one"));
        }

        // 4a^3 + 27b^2 != 0
        let a3 = a.modpow(&BigUint::from(3u32), &modulus);
        let b2 = &b * &b % &modulus;
        let discriminant = (a3 * 4u32 + b2 * 27u32) % &modulus;
        if discriminant.is_zero() {
            return Err(CurveError::InvalidParameters("curve is singular"));
        }

        let curve = Curve {
            name: name.into(),
            modulus,
            a,
            b,
            generator: Affine::new(gx, gy),
            order,
        };
        if !curve.is_on_curve(&curve.generator) {
            return Err(CurveError::InvalidParameters("base point is not on the curve"));
        }
        Ok(curve)
    }

    pub fn from_parameters(
        name: impl Into<String>,
        params: CurveParameters,
    ) -> Result<Self, CurveError> {
        Self::new(
            name,
            params.modulus,
            params.a,
            params.b,
            params.gx,
            params.gy,
            params.n,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The published base point `G`.
    pub fn generator(&self) -> &Affine {
        &self.generator
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Snapshot of `(modulus, a, b, gx, gy, n)`.
    pub fn parameters(&self) -> CurveParameters {
        let (gx, gy) = match &self.generator {
            Affine::Point { x, y } => (x.clone(), y.clone()),
            // Curve::new only accepts finite base points
            Affine::Infinity => (BigUint::zero(), BigUint::zero()),
        };
        CurveParameters {
            modulus: self.modulus.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
            gx,
            gy,
            n: self.order.clone(),
        }
    }

    /// `x^3 + a*x + b mod p`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x2 = x * x % &self.modulus;
        let x3 = x2 * x;
        let ax = &self.a * x;
        (x3 + ax + &self.b) % &self.modulus
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, point: &Affine) -> bool {
        match point {
            Affine::Infinity => true,
            Affine::Point { x, y } => {
                if x >= &self.modulus || y >= &self.modulus {
                    return false;
                }
                y * y % &self.modulus == self.rhs(x)
            }
        }
    }

    /// Checked point constructor.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Affine, CurveError> {
        let point = Affine::new(x, y);
        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(CurveError::NotOnCurve)
        }
    }

    /// Recovers the point with abscissa `x` whose ordinate has the given parity.
    pub fn decompress(&self, x: BigUint, y_is_odd: bool) -> Result<Affine, CurveError> {
        if x >= self.modulus {
            return Err(CurveError::NonCanonicalEncoding);
        }
        let mut y = sqrt_mod(&self.rhs(&x), &self.modulus)?;
        if y.is_odd() != y_is_odd {
            if y.is_zero() {
                return Err(CurveError::NotOnCurve);
            }
            y = neg_mod(&y, &self.modulus);
        }
        Ok(Affine::new(x, y))
    }

    /// Abscissa and ordinate parity, `None` for the identity.
    pub fn compress(&self, point: &Affine) -> Option<(BigUint, bool)> {
        point.coordinates().map(|(x, y)| (x.clone(), y.is_odd()))
    }
}
