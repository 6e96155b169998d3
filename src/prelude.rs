//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Coordinate, FireOutcome, HitResult, Match, MatchError, Phase, PlayerId,
    ShotState,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HotSeat};
