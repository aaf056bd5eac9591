//! Park accessibility and reachability analysis over a [`Grid`].
//!
//! Every function here borrows the grid immutably and returns a fresh
//! result, so analyses of the same or different grids can run side by side.

use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::grid::{CellLabel, Grid, PointOfInterest};
use log::info;
use serde::{Deserialize, Serialize};

mod classify;
mod flood;
mod reachability;

pub use classify::{classify, ParkClassification, ParkStatus};
pub use flood::flood_fill;
pub use reachability::{
    check_reachability, check_reachability_from, find_start, PoiReachability,
    ReachabilityReport, Verdict,
};

/// Counts of the interesting cells in a grid
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    /// Side length of the grid
    pub size: usize,
    /// Number of homes
    pub homes: usize,
    /// Number of parks
    pub parks: usize,
    /// Number of superchargers
    pub superchargers: usize,
}

impl GridSummary {
    /// Count the cells of `grid`
    pub fn of(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            homes: grid.count(CellLabel::Home),
            parks: grid.count(CellLabel::Park),
            superchargers: grid.count(CellLabel::Supercharger),
        }
    }
}

/// Outcome of the reachability part of an analysis
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Reachability {
    /// A home was found and the flood fill ran
    Evaluated(ReachabilityReport),
    /// There is no home, reachability is undefined
    NoStartPoint,
}

/// Everything the analyzer knows about a grid
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridReport {
    /// Cell counts
    pub summary: GridSummary,
    /// Parks, homes and superchargers in row-major order
    pub points_of_interest: Vec<PointOfInterest>,
    /// Local accessibility of every park
    pub parks: Vec<ParkClassification>,
    /// Connectivity from the first home
    pub reachability: Reachability,
}

impl GridReport {
    /// Parks that can never be entered
    pub fn isolated_parks(&self) -> impl Iterator<Item = &ParkClassification> {
        self.parks.iter().filter(|park| park.status.is_failure())
    }

    /// Parks with a single way in
    pub fn dead_end_parks(&self) -> impl Iterator<Item = &ParkClassification> {
        self.parks.iter().filter(|park| park.status.is_warning())
    }

    /// `true` when there is a home and every park is reachable from it
    pub fn passed(&self) -> bool {
        match &self.reachability {
            Reachability::Evaluated(report) => report.passed(),
            Reachability::NoStartPoint => false,
        }
    }
}

/// Run every check on an already validated grid.
///
/// # Examples
///
/// ```
/// use expedition_check::analysis::{analyze, Reachability};
/// use expedition_check::grid::standard_layouts::StandardLayout;
///
/// let grid = StandardLayout::Homeless.compute_grid().unwrap();
/// let report = analyze(&grid);
/// assert_eq!(report.reachability, Reachability::NoStartPoint);
/// assert!(!report.passed());
/// ```
pub fn analyze(grid: &Grid) -> GridReport {
    let summary = GridSummary::of(grid);
    info!(
        "Analyzing {0}x{0} grid with {1} parks, {2} homes, {3} superchargers",
        summary.size, summary.parks, summary.homes, summary.superchargers
    );

    let reachability = match check_reachability(grid) {
        Ok(report) => Reachability::Evaluated(report),
        Err(e) => {
            info!("{e}");
            Reachability::NoStartPoint
        }
    };

    GridReport {
        summary,
        points_of_interest: grid.points_of_interest(),
        parks: classify(grid),
        reachability,
    }
}

/// Validate layout rows and run every check.
///
/// ```
/// use expedition_check::analysis::analyze_layout;
/// use expedition_check::config::AnalyzerConfig;
/// use expedition_check::error::{AnalysisError, InvalidGridError};
///
/// let config = AnalyzerConfig::default();
/// let report = analyze_layout(&["HRP", "RRR", "PRR"], &config).unwrap();
/// assert!(report.passed());
///
/// assert_eq!(
///     analyze_layout(&["HRP", "RR"], &config),
///     Err(AnalysisError::InvalidGrid(InvalidGridError::NotSquare { row: 0, expected: 2, found: 3 }))
/// );
/// ```
pub fn analyze_layout<R: AsRef<str>>(
    rows: &[R],
    config: &AnalyzerConfig,
) -> Result<GridReport, AnalysisError> {
    let grid = Grid::parse_with_config(rows, config)?;
    Ok(analyze(&grid))
}
