//! Group arithmetic on short Weierstrass curves over prime fields.
//!
//! This crate provides a registry of named curves, affine point addition,
//! single-base, simultaneous multi-base and fixed-base scalar multiplication,
//! and the modular square root used for point decompression. Field elements
//! and scalars are `num-bigint` integers; scalars may be negative and are
//! never reduced modulo the group order.
//!
//! ```
//! use num_bigint::BigInt;
//! use wcurve::{registry, Affine};
//!
//! let curve = registry::resolve("P-256").unwrap();
//! let n = BigInt::from(curve.order().clone());
//! assert_eq!(curve.mul_generator(&n), Affine::INFINITY);
//! ```

mod affine;
mod curve;
pub mod encoding;
mod errors;
pub mod field;
mod fixed_base;
mod msm;
pub mod random;
pub mod registry;
mod scalar_mul;
mod sqrt;

pub use affine::{Affine, Scratch};
pub use curve::{Curve, CurveParameters};
pub use errors::CurveError;
pub use fixed_base::{optimal_width, FixedBaseTable, MAX_TABLE_WIDTH};
pub use msm::{default_block_width, MAX_BLOCK_WIDTH};
pub use sqrt::{is_quadratic_residue, legendre, sqrt_mod};
