//! Logical grid structs and utilities.

use crate::config::AnalyzerConfig;
use crate::error::InvalidGridError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod standard_layouts;

/// An integer location on the grid
///
/// Signed so that the neighbors of edge cells can be named; those read as
/// [`CellLabel::Building`] through [`Grid::label_at`].
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Location {
    /// Column - increases to the right
    pub x: i32,
    /// Row - increases downwards
    pub y: i32,
}

impl Location {
    /// Create a new Location
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent location in the given direction, which may be out of bounds
    ///
    /// Saturates at the edges of `i32`; a saturated location is still out of
    /// bounds for every [`Grid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use expedition_check::grid::{Direction, Location};
    ///
    /// assert_eq!(Location::new(0, 0).next(Direction::Up), Location::new(0, -1));
    /// assert_eq!(Location::new(0, 0).next(Direction::Right), Location::new(1, 0));
    /// ```
    pub fn next(&self, direction: Direction) -> Location {
        let (dx, dy) = direction.offset();
        Location::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Enum for direction values.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// Up, or -y
    Up = 0,
    /// Left, or -x
    Left = 1,
    /// Down, or +y
    Down = 2,
    /// Right, or +x
    Right = 3,
}

impl Direction {
    /// All four orthogonal directions, in the order neighbors are reported
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Get the (dx, dy) step for this direction
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Right => (1, 0),
        }
    }
}

/// The contents of a single cell, keyed by its layout character
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum CellLabel {
    /// `P` - a destination that must be reachable
    Park = b'P',
    /// `H` - where the car starts and recharges
    Home = b'H',
    /// `S` - a charging stop
    Supercharger = b'S',
    /// `R` - drivable
    Road = b'R',
    /// `B` - blocks movement
    Building = b'B',
    /// `W` - blocks movement, same as [`CellLabel::Building`]
    Water = b'W',
}

impl CellLabel {
    /// Parse a layout character, or `None` if it isn't a known label
    ///
    /// ```
    /// use expedition_check::grid::CellLabel;
    ///
    /// assert_eq!(CellLabel::from_char('P'), Some(CellLabel::Park));
    /// assert_eq!(CellLabel::from_char('p'), None);
    /// assert_eq!(CellLabel::from_char('é'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;
        CellLabel::try_from(byte).ok()
    }

    /// The layout character for this label
    pub fn as_char(self) -> char {
        char::from(u8::from(self))
    }

    /// Whether a traversal may move through this cell
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            CellLabel::Road | CellLabel::Park | CellLabel::Home | CellLabel::Supercharger
        )
    }

    /// The point of interest role of this label, if it has one
    pub fn poi_role(self) -> Option<PoiRole> {
        match self {
            CellLabel::Park => Some(PoiRole::Park),
            CellLabel::Home => Some(PoiRole::Home),
            CellLabel::Supercharger => Some(PoiRole::Supercharger),
            CellLabel::Road | CellLabel::Building | CellLabel::Water => None,
        }
    }
}

/// What a point of interest is
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum PoiRole {
    /// A park
    Park,
    /// A home
    Home,
    /// A supercharger
    Supercharger,
}

/// A park, home or supercharger cell
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Where the cell is
    pub location: Location,
    /// What the cell is
    pub role: PoiRole,
}

/// A validated square grid of [`CellLabel`]s.
///
/// The only way to get a [`Grid`] is through validation, so every row has
/// the same length as the number of rows and every cell holds a known label.
/// Cells are stored row by row.
///
/// # Examples
///
/// ```
/// use expedition_check::grid::{CellLabel, Grid, Location};
///
/// let grid = Grid::parse(&["HR", "BP"]).unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid.label_at(&Location::new(1, 1)), CellLabel::Park);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellLabel>,
    size: usize,
}

impl Grid {
    /// Validate layout rows with the default [`AnalyzerConfig`]
    pub fn parse<R: AsRef<str>>(rows: &[R]) -> Result<Self, InvalidGridError> {
        Self::parse_with_config(rows, &AnalyzerConfig::default())
    }

    /// Validate layout rows, one string per row and one character per cell
    ///
    /// # Examples
    ///
    /// ```
    /// use expedition_check::config::AnalyzerConfig;
    /// use expedition_check::error::InvalidGridError;
    /// use expedition_check::grid::Grid;
    ///
    /// let config = AnalyzerConfig::with_max_cells(4);
    /// assert!(Grid::parse_with_config(&["HP", "RR"], &config).is_ok());
    /// assert_eq!(
    ///     Grid::parse_with_config(&["HPR", "RRR", "RRR"], &config),
    ///     Err(InvalidGridError::TooLarge { cells: 9, limit: 4 })
    /// );
    /// ```
    pub fn parse_with_config<R: AsRef<str>>(
        rows: &[R],
        config: &AnalyzerConfig,
    ) -> Result<Self, InvalidGridError> {
        Self::from_rows(
            rows.len(),
            rows.iter().map(|row| row.as_ref().chars()),
            config,
        )
    }

    fn from_rows<I, C>(
        size: usize,
        rows: I,
        config: &AnalyzerConfig,
    ) -> Result<Self, InvalidGridError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = char>,
        C::IntoIter: Clone,
    {
        if size == 0 {
            return Err(InvalidGridError::Empty);
        }
        let cell_count = size.saturating_mul(size);
        if cell_count > config.max_cells || size > i32::MAX as usize {
            return Err(InvalidGridError::TooLarge {
                cells: cell_count,
                limit: config.max_cells,
            });
        }

        let mut cells = Vec::with_capacity(cell_count);
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.into_iter();
            let found = row.clone().count();
            if found != size {
                return Err(InvalidGridError::NotSquare {
                    row: y,
                    expected: size,
                    found,
                });
            }
            for (x, c) in row.enumerate() {
                let label = CellLabel::from_char(c).ok_or_else(|| InvalidGridError::UnknownLabel {
                    label: c,
                    location: Location::new(x as i32, y as i32),
                })?;
                cells.push(label);
            }
        }

        Ok(Self { cells, size })
    }

    /// Number of rows, which is also the number of columns
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the location lies inside the grid
    pub fn in_bounds(&self, p: &Location) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.size && (p.y as usize) < self.size
    }

    /// Returns the label at a given position
    ///
    /// Anything outside the grid is a [`CellLabel::Building`]: the map is
    /// treated as walled in on every side.
    ///
    /// # Examples
    ///
    /// ```
    /// use expedition_check::grid::{CellLabel, Grid, Location};
    ///
    /// let grid = Grid::parse(&["HR", "RP"]).unwrap();
    /// assert_eq!(grid.label_at(&Location::new(0, 0)), CellLabel::Home);
    /// assert_eq!(grid.label_at(&Location::new(-1, 0)), CellLabel::Building);
    /// assert_eq!(grid.label_at(&Location::new(0, 2)), CellLabel::Building);
    /// ```
    pub fn label_at(&self, p: &Location) -> CellLabel {
        if self.in_bounds(p) {
            self.cells[p.y as usize * self.size + p.x as usize]
        } else {
            CellLabel::Building
        }
    }

    /// Whether a traversal may move through the given position
    pub fn is_passable(&self, p: &Location) -> bool {
        self.label_at(p).is_passable()
    }

    /// The labels of the four orthogonal neighbors, in [`Direction::ALL`] order
    pub fn neighbor_labels(&self, p: &Location) -> [CellLabel; 4] {
        Direction::ALL.map(|direction| self.label_at(&p.next(direction)))
    }

    /// Returns all the passable neighbors of the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// use expedition_check::grid::{Grid, Location};
    ///
    /// let grid = Grid::parse(&["HR", "BP"]).unwrap();
    /// assert_eq!(grid.passable_neighbors(&Location::new(0, 0)), vec![Location::new(1, 0)]);
    /// ```
    pub fn passable_neighbors(&self, p: &Location) -> Vec<Location> {
        Direction::ALL
            .iter()
            .map(|&direction| p.next(direction))
            .filter(|neighbor| self.is_passable(neighbor))
            .collect()
    }

    /// Every cell with its location, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Location, CellLabel)> + '_ {
        self.cells.iter().enumerate().map(move |(index, &label)| {
            (
                Location::new((index % self.size) as i32, (index / self.size) as i32),
                label,
            )
        })
    }

    /// Parks, homes and superchargers, in row-major order
    pub fn points_of_interest(&self) -> Vec<PointOfInterest> {
        self.iter()
            .filter_map(|(location, label)| {
                label
                    .poi_role()
                    .map(|role| PointOfInterest { location, role })
            })
            .collect()
    }

    /// Number of cells with the given label
    pub fn count(&self, label: CellLabel) -> usize {
        self.cells.iter().filter(|&&cell| cell == label).count()
    }

    /// The grid as layout strings, one per row
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|label| label.as_char()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = InvalidGridError;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows.len(), rows, &AnalyzerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_layouts::*;

    #[test]
    fn valid_preset_layouts() {
        for layout in StandardLayout::get_all() {
            assert!(Grid::parse(layout.get_layout()).is_ok(), "{layout:?}");
        }
    }

    #[test]
    fn validation_require_rows() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::parse(&rows), Err(InvalidGridError::Empty));
        assert_eq!(Grid::try_from(Vec::<Vec<char>>::new()), Err(InvalidGridError::Empty));
    }

    #[test]
    fn validation_short_row() {
        let v = Grid::parse(&["BBBBB", "BRHPB", "BRR", "BPPPB", "BBBBB"]);
        assert_eq!(
            v,
            Err(InvalidGridError::NotSquare {
                row: 2,
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn validation_rectangle() {
        let v = Grid::parse(&["HRP", "RRR"]);
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Row 0 has 3 cells, expected 2 for a square grid"
        );
    }

    #[test]
    fn validation_unknown_label() {
        let v = Grid::parse(&["BBBBB", "BRXPB", "BRRSB", "BPPPB", "BBBBB"]);
        assert_eq!(
            v,
            Err(InvalidGridError::UnknownLabel {
                label: 'X',
                location: Location::new(2, 1)
            })
        );
    }

    #[test]
    fn validation_lowercase_label() {
        let v = Grid::parse(&["hr", "rp"]);
        assert!(matches!(
            v,
            Err(InvalidGridError::UnknownLabel { label: 'h', .. })
        ));
    }

    #[test]
    fn validation_too_large() {
        let row = "R".repeat(51);
        let rows = vec![row; 51];
        assert_eq!(
            Grid::parse(&rows),
            Err(InvalidGridError::TooLarge {
                cells: 2601,
                limit: 2500
            })
        );

        let rows = vec!["R".repeat(50); 50];
        assert!(Grid::parse(&rows).is_ok());
    }

    #[test]
    fn try_from_chars() {
        let grid = Grid::try_from(vec![vec!['H', 'R'], vec!['B', 'P']]).unwrap();
        assert_eq!(grid.to_rows(), vec!["HR".to_string(), "BP".to_string()]);
    }

    #[test]
    fn label_round_trip() {
        for c in ['P', 'H', 'S', 'R', 'B', 'W'] {
            assert_eq!(CellLabel::from_char(c).map(CellLabel::as_char), Some(c));
        }
    }

    #[test]
    fn passable_labels() {
        assert!(CellLabel::Road.is_passable());
        assert!(CellLabel::Park.is_passable());
        assert!(CellLabel::Home.is_passable());
        assert!(CellLabel::Supercharger.is_passable());
        assert!(!CellLabel::Building.is_passable());
        assert!(!CellLabel::Water.is_passable());
    }

    #[test]
    fn grid_at_oob() {
        let grid = StandardLayout::Minimal.compute_grid().unwrap();
        assert_eq!(grid.label_at(&Location::new(-1, 0)), CellLabel::Building);
        assert_eq!(grid.label_at(&Location::new(0, -1)), CellLabel::Building);
        assert_eq!(grid.label_at(&Location::new(5, 0)), CellLabel::Building);
        assert_eq!(grid.label_at(&Location::new(0, 5)), CellLabel::Building);
        assert!(!grid.in_bounds(&Location::new(5, 5)));
    }

    #[test]
    fn neighbors_at_extreme_coordinates() {
        let grid = Grid::parse(&["HR", "RP"]).unwrap();
        for p in [
            Location::new(i32::MAX, 0),
            Location::new(0, i32::MAX),
            Location::new(i32::MIN, i32::MIN),
        ] {
            assert_eq!(grid.neighbor_labels(&p), [CellLabel::Building; 4]);
            assert!(grid.passable_neighbors(&p).is_empty());
        }
        assert_eq!(
            Location::new(i32::MAX, i32::MIN).next(Direction::Right),
            Location::new(i32::MAX, i32::MIN)
        );
    }

    #[test]
    fn long_row_rejected_by_length() {
        let long_row = "R".repeat(100_000);
        assert_eq!(
            Grid::parse(&[long_row.as_str(), "RR"]),
            Err(InvalidGridError::NotSquare {
                row: 0,
                expected: 2,
                found: 100_000
            })
        );
    }

    #[test]
    fn grid_next() {
        let p = Location::new(1, 1);
        assert_eq!(p.next(Direction::Up), Location::new(1, 0));
        assert_eq!(p.next(Direction::Left), Location::new(0, 1));
        assert_eq!(p.next(Direction::Down), Location::new(1, 2));
        assert_eq!(p.next(Direction::Right), Location::new(2, 1));
    }

    #[test]
    fn corner_neighbor_labels() {
        let grid = Grid::parse(&["PR", "RB"]).unwrap();
        assert_eq!(
            grid.neighbor_labels(&Location::new(0, 0)),
            [
                CellLabel::Building,
                CellLabel::Building,
                CellLabel::Road,
                CellLabel::Road
            ]
        );
    }

    #[test]
    fn points_of_interest_row_major() {
        let grid = Grid::parse(&["PRH", "SBR", "RHP"]).unwrap();
        let pois = grid.points_of_interest();
        assert_eq!(
            pois,
            vec![
                PointOfInterest {
                    location: Location::new(0, 0),
                    role: PoiRole::Park
                },
                PointOfInterest {
                    location: Location::new(2, 0),
                    role: PoiRole::Home
                },
                PointOfInterest {
                    location: Location::new(0, 1),
                    role: PoiRole::Supercharger
                },
                PointOfInterest {
                    location: Location::new(1, 2),
                    role: PoiRole::Home
                },
                PointOfInterest {
                    location: Location::new(2, 2),
                    role: PoiRole::Park
                },
            ]
        );
        assert_eq!(grid.count(CellLabel::Home), 2);
        assert_eq!(grid.count(CellLabel::Water), 0);
    }
}
