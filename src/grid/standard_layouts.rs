#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made layouts covering the interesting analysis outcomes

use crate::error::InvalidGridError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// The default open layout: two homes, two parks and a supercharger on open road
///
/// ```
/// use expedition_check::grid::Grid;
/// use expedition_check::grid::standard_layouts::LAYOUT_MINIMAL;
///
/// let grid = Grid::parse(LAYOUT_MINIMAL).unwrap();
/// ```
pub const LAYOUT_MINIMAL: &[&str] = &[
    "RRPRR",
    "RRRHR",
    "RRSRR",
    "RRRHR",
    "RRPRR",
];

/// A small walled town where every park is reachable
pub const LAYOUT_WALLED: &[&str] = &[
    "BBBBB",
    "BRHPB",
    "BRRSB",
    "BPPPB",
    "BBBBB",
];

/// One park walled in on every side, one at the end of a dead-end street
pub const LAYOUT_CUL_DE_SAC: &[&str] = &[
    "HRRRB",
    "BBBRB",
    "PBRRR",
    "BBRBP",
    "SRRBB",
];

/// A park cut off from home by a lake
pub const LAYOUT_MOAT: &[&str] = &[
    "BBBBBBBBB",
    "BHRRRRRRB",
    "BWWWWWWWB",
    "BWWWWWWWB",
    "BWWWWWWWB",
    "BWWWWWWWB",
    "BWWWWWWWB",
    "BWWWWWWPB",
    "BBBBBBBBB",
];

/// Parks but no home, so there is nowhere to start from
pub const LAYOUT_HOMELESS: &[&str] = &[
    "BBBBB",
    "BRRRB",
    "BRPPB",
    "BRRRB",
    "BBBBB",
];

/// Names for the preset layouts
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardLayout {
    /// [`LAYOUT_MINIMAL`]
    #[default]
    Minimal,
    /// [`LAYOUT_WALLED`]
    Walled,
    /// [`LAYOUT_CUL_DE_SAC`]
    CulDeSac,
    /// [`LAYOUT_MOAT`]
    Moat,
    /// [`LAYOUT_HOMELESS`]
    Homeless,
}

impl StandardLayout {
    /// Get a list of all available layouts
    pub fn get_all() -> [Self; 5] {
        [
            Self::Minimal,
            Self::Walled,
            Self::CulDeSac,
            Self::Moat,
            Self::Homeless,
        ]
    }

    /// Get the layout rows associated with this enum
    pub fn get_layout(&self) -> &'static [&'static str] {
        match self {
            Self::Minimal => LAYOUT_MINIMAL,
            Self::Walled => LAYOUT_WALLED,
            Self::CulDeSac => LAYOUT_CUL_DE_SAC,
            Self::Moat => LAYOUT_MOAT,
            Self::Homeless => LAYOUT_HOMELESS,
        }
    }

    /// Get the validated [`Grid`] associated with this enum
    pub fn compute_grid(self) -> Result<Grid, InvalidGridError> {
        Grid::parse(self.get_layout())
    }
}
