//! Game board state: the shot grid and the ships placed on it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Coordinate, HitResult, ShotState};
use crate::ship::Ship;

/// Attempts made by [`Board::random_placement`] before giving up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// A square board: one shot state per cell plus the ships placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Indexed `[y][x]`.
    grid: Vec<Vec<ShotState>>,
    /// Inclusive upper bound accepted by the bounds checks. Equal to the size.
    max_position: i32,
    ships: Vec<Ship>,
    all_sunk: bool,
}

impl Board {
    /// Create an empty `size`×`size` board with no ships and no shots.
    pub fn new(size: usize) -> Self {
        Board {
            grid: vec![vec![ShotState::NotShot; size]; size],
            max_position: size as i32,
            ships: Vec::new(),
            all_sunk: false,
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    // Upper bound is inclusive: an index equal to the size passes.
    fn in_bounds(&self, c: Coordinate) -> bool {
        (0..=self.max_position).contains(&c.x) && (0..=self.max_position).contains(&c.y)
    }

    /// Place a ship between two endpoints.
    ///
    /// Fails with [`BoardError::OutOfBounds`] if either endpoint is off the
    /// board, [`BoardError::InvalidShipShape`] if the endpoints are not aligned,
    /// and [`BoardError::ShipOverlap`] if any cell is already taken. A failed
    /// placement leaves the board untouched.
    pub fn place_ship(&mut self, start: Coordinate, end: Coordinate) -> Result<(), BoardError> {
        for c in [start, end] {
            if !self.in_bounds(c) {
                return Err(BoardError::OutOfBounds(c));
            }
        }

        let ship = Ship::new(start, end)?;
        if let Some(&shared) = ship
            .coordinates()
            .iter()
            .find(|c| self.ships.iter().any(|placed| placed.contains(**c)))
        {
            return Err(BoardError::ShipOverlap(shared));
        }

        log::debug!("placed ship {} -> {} ({} cells)", start, end, ship.len());
        self.ships.push(ship);
        Ok(())
    }

    /// Remove the first ship (in placement order) covering `coord`.
    /// Returns its coordinates, or an empty list if no ship covers `coord`.
    pub fn remove_ship_by_coordinate(&mut self, coord: Coordinate) -> Vec<Coordinate> {
        match self.ships.iter().position(|s| s.contains(coord)) {
            Some(i) => {
                let ship = self.ships.remove(i);
                log::debug!("removed ship covering {}", coord);
                ship.coordinates().to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Fire a shot at `position`, marking the cell as hit or miss.
    pub fn fire(&mut self, position: Coordinate) -> Result<HitResult, BoardError> {
        if !self.in_bounds(position) {
            return Err(BoardError::OutOfBounds(position));
        }
        // The far edge passes the bounds check but has no cell behind it.
        match self.cell(position) {
            Some(ShotState::NotShot) => {}
            _ => return Err(BoardError::AlreadyFired(position)),
        }

        let result = if self.ships.iter_mut().any(|s| s.hit_check(position)) {
            HitResult::Hit
        } else {
            HitResult::Miss
        };

        self.grid[position.y as usize][position.x as usize] = result.into();
        self.check_all_sunk();

        log::debug!("shot at {} -> {:?}", position, result);
        Ok(result)
    }

    /// Returns `true` when every ship is sunk; an empty board counts as sunk.
    /// A `true` result latches until [`Board::reset`].
    pub fn check_all_sunk(&mut self) -> bool {
        if self.ships.iter().all(Ship::is_sunk) {
            self.all_sunk = true;
        }
        self.all_sunk
    }

    /// Cached result of the last [`Board::check_all_sunk`].
    pub fn all_sunk(&self) -> bool {
        self.all_sunk
    }

    /// Shot state of one cell, if the cell exists.
    pub fn cell(&self, c: Coordinate) -> Option<ShotState> {
        if c.x < 0 || c.y < 0 {
            return None;
        }
        self.grid.get(c.y as usize)?.get(c.x as usize).copied()
    }

    /// Read-only view of the shot grid, indexed `[y][x]`.
    pub fn shots(&self) -> &[Vec<ShotState>] {
        &self.grid
    }

    /// Read-only view of the placed ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn clear_ships(&mut self) {
        self.ships.clear();
    }

    /// Set every cell back to not-shot. Ships and the sunk flag are kept.
    pub fn reset_hits(&mut self) {
        for row in &mut self.grid {
            row.fill(ShotState::NotShot);
        }
    }

    /// Restore the board to its freshly constructed state.
    pub fn reset(&mut self) {
        self.clear_ships();
        self.reset_hits();
        self.all_sunk = false;
    }

    /// Returns random endpoints for a ship of `length` that fit inside the
    /// grid and do not overlap any placed ship.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coordinate, Coordinate), BoardError> {
        let size = self.size();
        if length == 0 || length > size {
            return Err(BoardError::NoRoomForShip { length });
        }
        let span = length as i32 - 1;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let horizontal: bool = rng.random();
            let (max_x, max_y) = if horizontal {
                (size - length, size - 1)
            } else {
                (size - 1, size - length)
            };
            let start = Coordinate::new(
                rng.random_range(0..=max_x) as i32,
                rng.random_range(0..=max_y) as i32,
            );
            let end = if horizontal {
                Coordinate::new(start.x + span, start.y)
            } else {
                Coordinate::new(start.x, start.y + span)
            };
            let ship = Ship::new(start, end)?;
            let free = ship
                .coordinates()
                .iter()
                .all(|c| !self.ships.iter().any(|placed| placed.contains(*c)));
            if free {
                return Ok((start, end));
            }
        }
        Err(BoardError::NoRoomForShip { length })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  ships: {:?},\n  all_sunk: {}\n}}",
            self.size(),
            self.ships,
            self.all_sunk
        )
    }
}
