//! Error types for grid validation and reachability analysis

use crate::grid::Location;
use thiserror::Error;

/// A layout that cannot be turned into a [`Grid`](crate::grid::Grid).
///
/// Raised while the grid is built, so no classification or traversal ever
/// runs on a malformed layout.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidGridError {
    /// The layout has no rows
    #[error("Layout is empty")]
    Empty,
    /// A row's length differs from the number of rows
    #[error("Row {row} has {found} cells, expected {expected} for a square grid")]
    NotSquare {
        /// Index of the offending row
        row: usize,
        /// Required row length, equal to the number of rows
        expected: usize,
        /// Actual row length
        found: usize,
    },
    /// A cell holds a character outside the label set
    #[error("Unknown cell label {label:?} at {location}")]
    UnknownLabel {
        /// The character that was found
        label: char,
        /// Where it was found
        location: Location,
    },
    /// The grid has more cells than the configured limit
    #[error("Grid has {cells} cells, limit is {limit}")]
    TooLarge {
        /// Number of cells in the layout
        cells: usize,
        /// Configured maximum
        limit: usize,
    },
}

/// The grid has no home cell, so there is nowhere to start a reachability check.
///
/// This is not the same as "no park is reachable": the question has no answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("No home cell found, cannot determine a starting point")]
pub struct NoStartPointError;

/// Errors from [`analyze_layout`](crate::analysis::analyze_layout)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The layout failed validation
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGridError),
}
