//! Engine configuration.

use serde::{Deserialize, Serialize};
use wcurve::MAX_TABLE_WIDTH;

/// Window width used by [`crate::Engine::precompute`] when none is given.
pub const DEFAULT_TABLE_WIDTH: u32 = 8;

/// Tunables applied by the engine on top of the arithmetic core.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window width for fixed-base tables built without an explicit width.
    pub default_table_width: u32,
    /// Upper bound on any table width, explicit or chosen.
    pub max_table_width: u32,
    /// Bases per subset-sum table in `smul`; `None` picks from the input.
    pub smul_block_width: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_table_width: DEFAULT_TABLE_WIDTH,
            max_table_width: 12,
            smul_block_width: None,
        }
    }
}

impl EngineConfig {
    /// Clamp a requested width to `1..=max_table_width`.
    pub(crate) fn table_width(&self, requested: Option<u32>) -> u32 {
        let max = self.max_table_width.clamp(1, MAX_TABLE_WIDTH);
        requested.unwrap_or(self.default_table_width).clamp(1, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_width_clamping() {
        let config = EngineConfig::default();
        assert_eq!(config.table_width(None), DEFAULT_TABLE_WIDTH);
        assert_eq!(config.table_width(Some(0)), 1);
        assert_eq!(config.table_width(Some(40)), 12);

        let wide = EngineConfig {
            max_table_width: 99,
            ..EngineConfig::default()
        };
        assert_eq!(wide.table_width(Some(40)), MAX_TABLE_WIDTH);
    }
}
