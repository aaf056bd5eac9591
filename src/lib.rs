#![warn(missing_docs)]
//! Reachability and dead-end analysis for expedition map layouts
//!
//! A layout is a square grid of single-character cells: `P` park, `H` home,
//! `S` supercharger, `R` road, `B` building and `W` water. The analyzer checks
//! that every park can be reached from the first home by driving over
//! passable cells, and flags parks that are walled in or sit at a dead end.
//!
//! ```
//! use expedition_check::analysis::analyze;
//! use expedition_check::grid::Grid;
//!
//! let grid = Grid::parse(&["HRR", "BBR", "PRR"]).unwrap();
//! let report = analyze(&grid);
//! assert!(report.passed());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod grid;

pub use analysis::{analyze, analyze_layout, check_reachability, classify, flood_fill};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, InvalidGridError, NoStartPointError};
pub use grid::{CellLabel, Grid, Location};
