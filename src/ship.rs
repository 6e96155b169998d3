//! Ship definitions: a straight run of coordinates with hit bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate};

/// Longest run of cells a single ship may cover.
pub const MAX_SHIP_LENGTH: usize = 1 << 16;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on a board.
///
/// The coordinate list is fixed at construction and runs from the start
/// endpoint to the end endpoint inclusive, one cell per step.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    coordinates: Vec<Coordinate>,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// Build a ship between two endpoints sharing a row or a column.
    /// Equal endpoints give a one-cell ship.
    pub fn new(start: Coordinate, end: Coordinate) -> Result<Self, BoardError> {
        if start.x != end.x && start.y != end.y {
            return Err(BoardError::InvalidShipShape { start, end });
        }

        // Spans between far-apart i32 endpoints overflow i32.
        let span_x = i64::from(end.x) - i64::from(start.x);
        let span_y = i64::from(end.y) - i64::from(start.y);
        let steps = span_x.abs().max(span_y.abs());
        if steps >= MAX_SHIP_LENGTH as i64 {
            return Err(BoardError::ShipTooLong { start, end });
        }

        let (dx, dy, steps) = (span_x.signum() as i32, span_y.signum() as i32, steps as i32);
        let coordinates = (0..=steps)
            .map(|i| Coordinate::new(start.x + dx * i, start.y + dy * i))
            .collect();

        Ok(Ship {
            coordinates,
            hits: 0,
            sunk: false,
        })
    }

    /// Register a shot at `position`.
    /// Returns `true` and records the hit if the ship covers that cell.
    /// Repeat shots on the same cell are counted again.
    pub fn hit_check(&mut self, position: Coordinate) -> bool {
        if !self.contains(position) {
            return false;
        }
        self.hits += 1;
        if self.hits == self.coordinates.len() {
            self.sunk = true;
        }
        true
    }

    /// Whether the ship covers `position`.
    pub fn contains(&self, position: Coordinate) -> bool {
        self.coordinates.contains(&position)
    }

    pub fn number_of_hits(&self) -> usize {
        self.hits
    }

    /// Check if the ship is sunk (every segment hit). Never reverts.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Ship's length.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Ships always cover at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ coordinates: {:?}, hits: {}, sunk: {} }}",
            self.coordinates, self.hits, self.sunk,
        )
    }
}
