//! Id-indexed ownership of curves and fixed-base tables.

use std::collections::HashMap;

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};
use wcurve::{optimal_width, registry, Affine, Curve, CurveParameters, FixedBaseTable};

use crate::config::EngineConfig;
use crate::errors::EngineError;

/// Opaque reference to a curve owned by an [`Engine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveHandle(u64);

/// Opaque reference to a fixed-base table owned by an [`Engine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableHandle(u64);

impl CurveHandle {
    /// The id that crosses the binding boundary.
    pub fn id(self) -> u64 {
        self.0
    }

    /// Rebuilds a handle from an id received across the boundary. Whether
    /// the id is live is checked when the handle is used.
    pub fn from_id(id: u64) -> Self {
        CurveHandle(id)
    }
}

impl TableHandle {
    pub fn id(self) -> u64 {
        self.0
    }

    pub fn from_id(id: u64) -> Self {
        TableHandle(id)
    }
}

struct TableEntry {
    curve: CurveHandle,
    table: FixedBaseTable,
}

/// Owner of every curve and table handed out to a caller.
///
/// Resources live in maps keyed by small integer ids. Ids are never reused,
/// so a released handle stays invalid and fails with
/// [`EngineError::UnknownHandle`] instead of reaching freed state.
/// Creation and release take `&mut self` and arithmetic takes `&self`, which
/// gives one writer or many concurrent readers.
#[derive(Default)]
pub struct Engine {
    config: EngineConfig,
    next_id: u64,
    curves: HashMap<u64, Curve>,
    tables: HashMap<u64, TableEntry>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Names of the built-in curves, available without resolving any.
    pub fn curve_names(&self) -> &'static [&'static str] {
        registry::names()
    }

    fn issue_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert_curve(&mut self, curve: Curve) -> CurveHandle {
        let id = self.issue_id();
        log::debug!("curve {} -> handle {}", curve.name(), id);
        self.curves.insert(id, curve);
        CurveHandle(id)
    }

    /// Resolves a built-in curve and takes ownership of it.
    pub fn resolve_curve(&mut self, name: &str) -> Result<CurveHandle, EngineError> {
        let curve = registry::resolve(name)?;
        Ok(self.insert_curve(curve))
    }

    /// Registers a curve from explicit parameters.
    pub fn register_curve(
        &mut self,
        name: &str,
        params: CurveParameters,
    ) -> Result<CurveHandle, EngineError> {
        let curve = Curve::from_parameters(name, params)?;
        Ok(self.insert_curve(curve))
    }

    /// Releases a curve together with every table built on it.
    pub fn release_curve(&mut self, handle: CurveHandle) -> Result<(), EngineError> {
        let Some(curve) = self.curves.remove(&handle.0) else {
            log::warn!("release of unknown curve handle {}", handle.0);
            return Err(EngineError::UnknownHandle(handle.0));
        };

        let before = self.tables.len();
        self.tables.retain(|_, entry| entry.curve != handle);
        log::debug!(
            "released curve {} (handle {}) and {} dependent tables",
            curve.name(),
            handle.0,
            before - self.tables.len()
        );
        Ok(())
    }

    pub fn curve(&self, handle: CurveHandle) -> Result<&Curve, EngineError> {
        self.curves
            .get(&handle.0)
            .ok_or(EngineError::UnknownHandle(handle.0))
    }

    pub fn parameters(&self, handle: CurveHandle) -> Result<CurveParameters, EngineError> {
        Ok(self.curve(handle)?.parameters())
    }

    pub fn add(&self, handle: CurveHandle, p1: &Affine, p2: &Affine) -> Result<Affine, EngineError> {
        Ok(self.curve(handle)?.add(p1, p2))
    }

    pub fn mul(&self, handle: CurveHandle, point: &Affine, k: &BigInt) -> Result<Affine, EngineError> {
        Ok(self.curve(handle)?.mul(point, k))
    }

    /// Simultaneous multiplication using the configured block width.
    pub fn smul(
        &self,
        handle: CurveHandle,
        bases: &[Affine],
        scalars: &[BigInt],
    ) -> Result<Affine, EngineError> {
        let curve = self.curve(handle)?;
        let result = match self.config.smul_block_width {
            Some(width) => curve.smul_with_width(bases, scalars, width)?,
            None => curve.smul(bases, scalars)?,
        };
        Ok(result)
    }

    /// Square root modulo an arbitrary prime; needs no curve.
    ///
    /// A modulus below 2 fails with `InvalidParameters` instead of panicking.
    pub fn sqrt(&self, a: &BigUint, modulus: &BigUint) -> Result<BigUint, EngineError> {
        Ok(wcurve::sqrt_mod(a, modulus)?)
    }

    /// Builds a fixed-base table for `base` on the given curve.
    ///
    /// `width` defaults to the configured width and is clamped to the
    /// configured maximum.
    pub fn precompute(
        &mut self,
        handle: CurveHandle,
        base: &Affine,
        width: Option<u32>,
    ) -> Result<TableHandle, EngineError> {
        let width = self.config.table_width(width);
        let table = self.curve(handle)?.precompute(base, width);
        Ok(self.insert_table(handle, table))
    }

    /// Builds a table sized for roughly `expected_uses` multiplications.
    pub fn precompute_for(
        &mut self,
        handle: CurveHandle,
        base: &Affine,
        expected_uses: u64,
    ) -> Result<TableHandle, EngineError> {
        let curve = self.curve(handle)?;
        let bits = curve.order().bits();
        let width = self
            .config
            .table_width(Some(optimal_width(bits, expected_uses)));
        let table = curve.precompute_bits(base, width, bits);
        Ok(self.insert_table(handle, table))
    }

    fn insert_table(&mut self, curve: CurveHandle, table: FixedBaseTable) -> TableHandle {
        let id = self.issue_id();
        log::debug!(
            "table handle {} on curve handle {}: width {}, {} points",
            id,
            curve.0,
            table.width(),
            table.len()
        );
        self.tables.insert(id, TableEntry { curve, table });
        TableHandle(id)
    }

    pub fn table(&self, handle: TableHandle) -> Result<&FixedBaseTable, EngineError> {
        self.tables
            .get(&handle.0)
            .map(|entry| &entry.table)
            .ok_or(EngineError::UnknownHandle(handle.0))
    }

    /// Fixed-base multiplication through a table handle.
    pub fn fmul(
        &self,
        curve: CurveHandle,
        table: TableHandle,
        k: &BigInt,
    ) -> Result<Affine, EngineError> {
        let c = self.curve(curve)?;
        let entry = self
            .tables
            .get(&table.0)
            .ok_or(EngineError::UnknownHandle(table.0))?;
        if entry.curve != curve {
            return Err(EngineError::TableCurveMismatch {
                table: table.0,
                owner: entry.curve.0,
                curve: curve.0,
            });
        }
        Ok(c.fmul(&entry.table, k))
    }

    pub fn release_table(&mut self, handle: TableHandle) -> Result<(), EngineError> {
        if self.tables.remove(&handle.0).is_none() {
            log::warn!("release of unknown table handle {}", handle.0);
            return Err(EngineError::UnknownHandle(handle.0));
        }
        log::debug!("released table handle {}", handle.0);
        Ok(())
    }

    /// Number of live curves.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Number of live tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}
