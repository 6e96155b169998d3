use crate::ship::ShipType;

/// Side length of the board used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Smallest board that still fits the longest ship of the fleet.
pub const MIN_BOARD_SIZE: usize = 5;
/// Columns are labelled with single letters.
pub const MAX_BOARD_SIZE: usize = 26;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

