use core::mem;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::field::{inv_mod, neg_mod, sub_mod_into};
use crate::Curve;

/// Affine point on a short Weierstrass curve.
///
/// Coordinates are field elements in `[0, p)`. The identity has no `(x, y)`
/// representation and is its own variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affine {
    /// The point at infinity (identity element)
    Infinity,
    Point { x: BigUint, y: BigUint },
}

impl Affine {
    pub const INFINITY: Self = Affine::Infinity;

    /// Create a new affine point. The coordinates are not checked; see
    /// [`Curve::point`] for a validating constructor.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Affine::Point { x, y }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Affine::Infinity)
    }

    /// The `(x, y)` pair, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Affine::Infinity => None,
            Affine::Point { x, y } => Some((x, y)),
        }
    }

    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::Infinity
    }
}

/// Temporaries for affine addition and doubling.
///
/// A multiplication loop threads one `Scratch` through all of its additions so
/// the intermediate field elements keep their allocations. It lives for a
/// single call and is never shared between threads.
#[derive(Debug, Default)]
pub struct Scratch {
    t0: BigUint,
    t1: BigUint,
    lambda: BigUint,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Curve {
    /// Point addition `P1 + P2`.
    ///
    /// # Panics
    ///
    /// Only when the inputs violate the caller contract (coordinates not
    /// reduced mod p or not on this curve) in a way that makes a slope
    /// denominator vanish.
    pub fn add(&self, p1: &Affine, p2: &Affine) -> Affine {
        self.add_with(&mut Scratch::new(), p1, p2)
    }

    /// Point addition reusing caller-provided scratch space.
    pub fn add_with(&self, s: &mut Scratch, p1: &Affine, p2: &Affine) -> Affine {
        let (x1, y1, x2, y2) = match (p1, p2) {
            (Affine::Infinity, _) => return p2.clone(),
            (_, Affine::Infinity) => return p1.clone(),
            (Affine::Point { x: x1, y: y1 }, Affine::Point { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double_coords(s, x1, y1);
            }
            // Same abscissa, opposite ordinates
            return Affine::Infinity;
        }

        let p = self.modulus();

        // λ = (y2 - y1) / (x2 - x1)
        sub_mod_into(&mut s.t0, y2, y1, p);
        sub_mod_into(&mut s.t1, x2, x1, p);
        let inv = self.invert(&s.t1);
        s.lambda.clone_from(&s.t0);
        s.lambda *= &inv;
        s.lambda %= p;

        self.finish(s, x1, y1, x2)
    }

    /// Point doubling: 2*P.
    pub fn double(&self, point: &Affine) -> Affine {
        self.double_with(&mut Scratch::new(), point)
    }

    pub fn double_with(&self, s: &mut Scratch, point: &Affine) -> Affine {
        match point {
            Affine::Infinity => Affine::Infinity,
            Affine::Point { x, y } => self.double_coords(s, x, y),
        }
    }

    /// Negate a point: `-(x, y) = (x, p - y)`.
    pub fn negate(&self, point: &Affine) -> Affine {
        match point {
            Affine::Infinity => Affine::Infinity,
            Affine::Point { x, y } => Affine::new(x.clone(), neg_mod(y, self.modulus())),
        }
    }

    /// `P1 - P2`.
    pub fn sub(&self, p1: &Affine, p2: &Affine) -> Affine {
        self.add(p1, &self.negate(p2))
    }

    fn double_coords(&self, s: &mut Scratch, x: &BigUint, y: &BigUint) -> Affine {
        // If y = 0, then 2P = O
        if y.is_zero() {
            return Affine::Infinity;
        }

        let p = self.modulus();

        // λ = (3x^2 + a) / (2y)
        s.t0.clone_from(x);
        s.t0 *= x;
        s.t0 *= 3u32;
        s.t0 += self.a();
        s.t0 %= p;
        s.t1.clone_from(y);
        s.t1 += y;
        s.t1 %= p;
        let inv = self.invert(&s.t1);
        s.lambda.clone_from(&s.t0);
        s.lambda *= &inv;
        s.lambda %= p;

        self.finish(s, x, y, x)
    }

    /// Completes an addition once `s.lambda` holds the slope.
    fn finish(&self, s: &mut Scratch, x1: &BigUint, y1: &BigUint, x2: &BigUint) -> Affine {
        let p = self.modulus();

        // x_r = λ^2 - x1 - x2
        s.t0.clone_from(&s.lambda);
        s.t0 *= &s.lambda;
        s.t0 += p;
        s.t0 += p;
        s.t0 -= x1;
        s.t0 -= x2;
        s.t0 %= p;

        // y_r = λ(x1 - x_r) - y1
        sub_mod_into(&mut s.t1, x1, &s.t0, p);
        s.t1 *= &s.lambda;
        s.t1 += p;
        s.t1 -= y1;
        s.t1 %= p;

        Affine::Point {
            x: mem::take(&mut s.t0),
            y: mem::take(&mut s.t1),
        }
    }

    fn invert(&self, v: &BigUint) -> BigUint {
        match inv_mod(v, self.modulus()) {
            Some(inv) => inv,
            None => panic!(
                "zero slope denominator on {}: operands are not reduced points on the curve",
                self.name()
            ),
        }
    }
}
