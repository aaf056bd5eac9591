//! Tunable limits for the analyzer

use serde::{Deserialize, Serialize};

/// Largest grid side the expedition engine accepts
pub const MAX_GRID_SIDE: usize = 50;

/// Options applied when a layout is validated into a [`Grid`](crate::grid::Grid)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Grids with more cells than this are rejected before any row is scanned
    pub max_cells: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_cells: MAX_GRID_SIDE * MAX_GRID_SIDE,
        }
    }
}

impl AnalyzerConfig {
    /// A config that accepts grids of at most `max_cells` cells
    pub fn with_max_cells(max_cells: usize) -> Self {
        Self { max_cells }
    }
}
