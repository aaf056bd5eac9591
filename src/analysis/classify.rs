//! Local accessibility check for parks

use crate::grid::{CellLabel, Grid, Location};
use log::warn;
use serde::{Deserialize, Serialize};

/// How many ways there are into a park
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ParkStatus {
    /// No passable neighbor, the park can never be entered
    Isolated,
    /// Exactly one passable neighbor
    DeadEnd,
    /// Two or more passable neighbors
    Accessible,
}

impl ParkStatus {
    /// Status for a park with the given number of passable neighbors
    ///
    /// ```
    /// use expedition_check::analysis::ParkStatus;
    ///
    /// assert_eq!(ParkStatus::from_passable_count(0), ParkStatus::Isolated);
    /// assert_eq!(ParkStatus::from_passable_count(1), ParkStatus::DeadEnd);
    /// assert_eq!(ParkStatus::from_passable_count(2), ParkStatus::Accessible);
    /// assert_eq!(ParkStatus::from_passable_count(4), ParkStatus::Accessible);
    /// ```
    pub fn from_passable_count(count: usize) -> Self {
        match count {
            0 => ParkStatus::Isolated,
            1 => ParkStatus::DeadEnd,
            _ => ParkStatus::Accessible,
        }
    }

    /// Isolated parks make a layout unplayable
    pub fn is_failure(self) -> bool {
        self == ParkStatus::Isolated
    }

    /// Dead ends are playable but worth a look
    pub fn is_warning(self) -> bool {
        self == ParkStatus::DeadEnd
    }
}

/// The neighborhood of one park
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParkClassification {
    /// Where the park is
    pub location: Location,
    /// Neighbor labels in [`Direction::ALL`](crate::grid::Direction::ALL) order,
    /// with out of bounds read as [`CellLabel::Building`]
    pub neighbors: [CellLabel; 4],
    /// How many of `neighbors` are passable
    pub passable_count: usize,
    /// Derived from `passable_count`
    pub status: ParkStatus,
}

/// Classify every park by its passable orthogonal neighbors, in row-major order.
///
/// This only looks at the four cells around each park; whether the park can
/// actually be reached is answered by [`check_reachability`](super::check_reachability).
///
/// # Examples
///
/// ```
/// use expedition_check::analysis::{classify, ParkStatus};
/// use expedition_check::grid::Grid;
///
/// let grid = Grid::parse(&["PBR", "BRR", "HBP"]).unwrap();
/// let parks = classify(&grid);
/// assert_eq!(parks[0].status, ParkStatus::Isolated);
/// assert_eq!(parks[1].status, ParkStatus::DeadEnd);
/// ```
pub fn classify(grid: &Grid) -> Vec<ParkClassification> {
    grid.iter()
        .filter(|&(_, label)| label == CellLabel::Park)
        .map(|(location, _)| {
            let neighbors = grid.neighbor_labels(&location);
            let passable_count = neighbors.iter().filter(|label| label.is_passable()).count();
            let status = ParkStatus::from_passable_count(passable_count);
            if status.is_failure() {
                warn!("Park at {location} is surrounded by buildings");
            }
            ParkClassification {
                location,
                neighbors,
                passable_count,
                status,
            }
        })
        .collect()
}
