//! Breadth-first reachability over passable cells

use crate::grid::{Grid, Location};
use log::debug;
use std::collections::{HashSet, VecDeque};

/// Every location reachable from `start` by orthogonal moves over passable cells.
///
/// Breadth first. The result always includes `start` itself, unless `start` is
/// out of bounds or not passable, in which case nothing is reachable and the
/// result is empty.
///
/// # Examples
///
/// ```
/// use expedition_check::analysis::flood_fill;
/// use expedition_check::grid::{Grid, Location};
///
/// let grid = Grid::parse(&["HRB", "BRB", "PBP"]).unwrap();
/// let visited = flood_fill(&grid, Location::new(0, 0));
/// assert_eq!(visited.len(), 3);
/// assert!(!visited.contains(&Location::new(0, 2)));
/// ```
pub fn flood_fill(grid: &Grid, start: Location) -> HashSet<Location> {
    let mut visited = HashSet::new();
    if !grid.is_passable(&start) {
        debug!("Flood fill start {start} is not passable");
        return visited;
    }

    let mut queue = VecDeque::from([start]);
    visited.insert(start);
    while let Some(current) = queue.pop_front() {
        // only passable, unvisited cells are queued
        for neighbor in grid.passable_neighbors(&current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!("Flood fill from {start} visited {} cells", visited.len());
    visited
}
