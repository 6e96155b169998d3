//! Common types for the hot-seat game: coordinates, shot states and errors.

use core::fmt;

/// A cell position on a board. `x` is the column, `y` the row, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Map a row-major cell number on a `size`×`size` grid to a coordinate.
    /// Returns `None` when the index lies past the last cell.
    pub fn from_cell_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new((index % size) as i32, (index / size) as i32))
    }

    /// Row-major cell number of this coordinate, if it lies inside the grid.
    pub fn cell_index(&self, size: usize) -> Option<usize> {
        let n = size as i32;
        if self.x < 0 || self.y < 0 || self.x >= n || self.y >= n {
            return None;
        }
        Some(self.y as usize * size + self.x as usize)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shot state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum ShotState {
    #[default]
    NotShot = 0,
    Miss = -1,
    Hit = 1,
}

impl ShotState {
    /// Numeric encoding used by renderers: 0 not shot, -1 miss, 1 hit.
    pub fn value(self) -> i8 {
        self as i8
    }
}

/// Result of firing at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum HitResult {
    Hit = 1,
    Miss = -1,
}

impl HitResult {
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl From<HitResult> for ShotState {
    fn from(result: HitResult) -> Self {
        match result {
            HitResult::Hit => ShotState::Hit,
            HitResult::Miss => ShotState::Miss,
        }
    }
}

/// Errors returned by ship and board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship endpoints differ on both axes.
    InvalidShipShape { start: Coordinate, end: Coordinate },
    /// Endpoints are aligned but further apart than any ship may span.
    ShipTooLong { start: Coordinate, end: Coordinate },
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// Placement shares this coordinate with a ship already on the board.
    ShipOverlap(Coordinate),
    /// This cell was already resolved as a hit or miss.
    AlreadyFired(Coordinate),
    /// Row-major cell number does not name a cell of the board.
    InvalidCellIndex(usize),
    /// Random placement found no free run of this length.
    NoRoomForShip { length: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidShipShape { start, end } => write!(
                f,
                "Ship endpoints {} and {} are not aligned vertically or horizontally",
                start, end
            ),
            BoardError::ShipTooLong { start, end } => write!(
                f,
                "Ship from {} to {} is longer than {} cells",
                start,
                end,
                crate::ship::MAX_SHIP_LENGTH
            ),
            BoardError::OutOfBounds(c) => write!(f, "Position {} is outside the board", c),
            BoardError::ShipOverlap(c) => {
                write!(f, "Ship placement overlaps another ship at {}", c)
            }
            BoardError::AlreadyFired(c) => write!(f, "Position {} has already been fired at", c),
            BoardError::InvalidCellIndex(i) => write!(f, "Cell {} is not on the board", i),
            BoardError::NoRoomForShip { length } => {
                write!(f, "No room left for a ship of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
