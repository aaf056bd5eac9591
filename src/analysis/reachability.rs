//! Reachability of points of interest from a starting home

use crate::analysis::flood::flood_fill;
use crate::error::NoStartPointError;
use crate::grid::{CellLabel, Grid, Location, PoiRole, PointOfInterest};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Whether every park could be reached
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    /// Every park is reachable, including the case of no parks at all
    AllReachable,
    /// At least one park is not reachable
    SomeUnreachable,
}

/// One point of interest and whether the flood fill reached it
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PoiReachability {
    /// The point of interest
    pub poi: PointOfInterest,
    /// Whether it is connected to the start
    pub reachable: bool,
}

/// Result of a flood fill from a single start
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReachabilityReport {
    /// Where the flood fill started
    pub start: Location,
    /// Every point of interest in row-major order
    pub points: Vec<PoiReachability>,
    /// Overall result for the parks
    pub verdict: Verdict,
}

impl ReachabilityReport {
    fn parks(&self) -> impl Iterator<Item = &PoiReachability> {
        self.points.iter().filter(|p| p.poi.role == PoiRole::Park)
    }

    /// Locations of the parks that can be reached
    pub fn reachable_parks(&self) -> Vec<Location> {
        self.parks()
            .filter(|p| p.reachable)
            .map(|p| p.poi.location)
            .collect()
    }

    /// Locations of the parks that cannot be reached
    pub fn unreachable_parks(&self) -> Vec<Location> {
        self.parks()
            .filter(|p| !p.reachable)
            .map(|p| p.poi.location)
            .collect()
    }

    /// Number of parks that can be reached
    pub fn reachable_park_count(&self) -> usize {
        self.parks().filter(|p| p.reachable).count()
    }

    /// Number of parks on the grid
    pub fn total_park_count(&self) -> usize {
        self.parks().count()
    }

    /// Whether the given location was reached, or `None` if it isn't a point of interest
    pub fn is_reachable(&self, location: &Location) -> Option<bool> {
        self.points
            .iter()
            .find(|p| p.poi.location == *location)
            .map(|p| p.reachable)
    }

    /// `true` when every park is reachable
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::AllReachable
    }
}

/// The start of a reachability check: the first home in row-major order.
///
/// When a layout has several homes only the first one is used, so a layout
/// whose homes sit in separate regions is judged from the top-left one.
///
/// ```
/// use expedition_check::analysis::find_start;
/// use expedition_check::grid::{Grid, Location};
///
/// let grid = Grid::parse(&["RRR", "RRH", "HRR"]).unwrap();
/// assert_eq!(find_start(&grid), Some(Location::new(2, 1)));
/// ```
pub fn find_start(grid: &Grid) -> Option<Location> {
    grid.iter()
        .find(|&(_, label)| label == CellLabel::Home)
        .map(|(location, _)| location)
}

/// Check that every park is reachable from the first home.
///
/// Returns [`NoStartPointError`] when there is no home: the check has no
/// answer then, which is different from "no park is reachable".
///
/// # Examples
///
/// ```
/// use expedition_check::analysis::{check_reachability, Verdict};
/// use expedition_check::grid::{Grid, Location};
///
/// let grid = Grid::parse(&["HRB", "BRB", "PBP"]).unwrap();
/// let report = check_reachability(&grid).unwrap();
/// assert_eq!(report.verdict, Verdict::SomeUnreachable);
/// assert_eq!(report.total_park_count(), 2);
/// assert_eq!(report.reachable_park_count(), 0);
/// ```
pub fn check_reachability(grid: &Grid) -> Result<ReachabilityReport, NoStartPointError> {
    let start = find_start(grid).ok_or(NoStartPointError)?;
    debug!("Testing connectivity from starting point {start}");
    Ok(check_reachability_from(grid, start))
}

/// Check which points of interest are reachable from an explicit start
pub fn check_reachability_from(grid: &Grid, start: Location) -> ReachabilityReport {
    let visited = flood_fill(grid, start);
    let points: Vec<PoiReachability> = grid
        .points_of_interest()
        .into_iter()
        .map(|poi| PoiReachability {
            reachable: visited.contains(&poi.location),
            poi,
        })
        .collect();

    let all_parks_reachable = points
        .iter()
        .filter(|p| p.poi.role == PoiRole::Park)
        .all(|p| p.reachable);
    let verdict = if all_parks_reachable {
        Verdict::AllReachable
    } else {
        Verdict::SomeUnreachable
    };

    let report = ReachabilityReport {
        start,
        points,
        verdict,
    };
    for park in report.unreachable_parks() {
        warn!("Park at {park} is not reachable from {start}");
    }
    info!(
        "Reachable parks: {}/{}",
        report.reachable_park_count(),
        report.total_park_count()
    );
    report
}
