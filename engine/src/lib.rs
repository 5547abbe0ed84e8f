//! Handle-based front end for the `wcurve` arithmetic core.
//!
//! A binding layer never holds curves or tables directly. It asks an
//! [`Engine`] to resolve a curve or build a table and gets back a small id,
//! passes that id into every later call, and finally releases it. Ids are
//! checked on every use, so a stale or forged id is an error rather than a
//! dangling reference.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use wcurve_engine::Engine;
//!
//! let mut engine = Engine::new();
//! let p256 = engine.resolve_curve("P-256").expect("built-in curve");
//! let g = engine.curve(p256).unwrap().generator().clone();
//!
//! let table = engine.precompute(p256, &g, Some(6)).unwrap();
//! let k = BigInt::from(123456789u64);
//! assert_eq!(
//!     engine.fmul(p256, table, &k).unwrap(),
//!     engine.mul(p256, &g, &k).unwrap()
//! );
//!
//! engine.release_table(table).unwrap();
//! engine.release_curve(p256).unwrap();
//! assert!(engine.curve(p256).is_err());
//! ```

mod config;
mod engine;
mod errors;

#[cfg(test)]
mod tests;

pub use config::{EngineConfig, DEFAULT_TABLE_WIDTH};
pub use engine::{CurveHandle, Engine, TableHandle};
pub use errors::EngineError;
