//! Turn coordination for a two-player, same-screen game.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, HitResult, ShotState},
};

/// One of the two seats at the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Seat number, 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Where the match is in its fire / swap cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The active player may fire.
    AwaitingShot,
    /// A shot is being resolved; input is locked.
    Processing,
    /// The active player's shot landed; input stays locked until the swap.
    TurnComplete,
    /// The targeted board reported every ship sunk.
    GameOver,
}

/// What a valid shot led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// The shot resolved; waiting for an explicit turn swap.
    TurnComplete { at: Coordinate, result: HitResult },
    /// The shot sank the last ship on the targeted board.
    GameOver {
        at: Coordinate,
        result: HitResult,
        winner: PlayerId,
    },
}

/// Errors returned by [`Match`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Input is locked: a shot is in flight or the turn awaits a swap.
    Busy,
    /// The shot was rejected by the board. Nothing changed and input is unlocked.
    InvalidMove(BoardError),
    /// The game has ended.
    GameOver,
    /// A swap was requested with no completed turn.
    SwapNotReady,
    /// Boards can only be changed before the first shot resolves.
    PlacementClosed,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Busy => write!(f, "Still processing the previous action"),
            MatchError::InvalidMove(e) => write!(f, "Invalid move: {}", e),
            MatchError::GameOver => write!(f, "The game is over"),
            MatchError::SwapNotReady => write!(f, "No completed turn to swap"),
            MatchError::PlacementClosed => write!(f, "Ships can no longer be moved"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::InvalidMove(err)
    }
}

/// Everything the active player is allowed to see once the boards are revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayerView {
    pub player: PlayerId,
    /// Shots the opponent has taken at this player's board.
    pub own_shots: Vec<Vec<ShotState>>,
    /// Coordinates of each of this player's ships.
    pub own_ships: Vec<Vec<Coordinate>>,
    /// Shots this player has taken at the opponent. No ship positions.
    pub foe_shots: Vec<Vec<ShotState>>,
}

/// A single game between two players sharing one screen.
pub struct Match {
    boards: [Board; 2],
    active: PlayerId,
    phase: Phase,
    busy: bool,
    /// Set once the first shot resolves; closes placement.
    started: bool,
    winner: Option<PlayerId>,
}

impl Match {
    /// Start a match with two empty `size`×`size` boards. Player one fires first.
    pub fn new(size: usize) -> Self {
        Self::with_boards(Board::new(size), Board::new(size))
    }

    /// Start a match from boards that already carry their ships.
    pub fn with_boards(one: Board, two: Board) -> Self {
        Self {
            boards: [one, two],
            active: PlayerId::One,
            phase: Phase::AwaitingShot,
            busy: false,
            started: false,
            winner: None,
        }
    }

    fn index(player: PlayerId) -> usize {
        match player {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[Self::index(player)]
    }

    /// Mutable access for the placement step. Refused once a shot has resolved.
    pub fn board_mut(&mut self, player: PlayerId) -> Result<&mut Board, MatchError> {
        if self.started {
            return Err(MatchError::PlacementClosed);
        }
        Ok(self.board_at(player))
    }

    fn board_at(&mut self, player: PlayerId) -> &mut Board {
        &mut self.boards[Self::index(player)]
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether input is currently locked out.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Fire the active player's shot at the opponent's board.
    ///
    /// Input is locked before the board is touched. A rejected shot releases
    /// the lock and leaves the turn with the same player. A resolved shot keeps
    /// the lock until [`Match::swap_turn`] or ends the game.
    pub fn fire(&mut self, target: Coordinate) -> Result<FireOutcome, MatchError> {
        match self.phase {
            Phase::GameOver => return Err(MatchError::GameOver),
            Phase::AwaitingShot if !self.busy => {}
            _ => return Err(MatchError::Busy),
        }
        self.busy = true;
        self.phase = Phase::Processing;

        let shooter = self.active;
        let result = match self.board_at(shooter.opponent()).fire(target) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("{} made an invalid move: {}", shooter, e);
                self.phase = Phase::AwaitingShot;
                self.busy = false;
                return Err(MatchError::InvalidMove(e));
            }
        };
        self.started = true;

        if self.board_at(shooter.opponent()).check_all_sunk() {
            log::info!("{} sank the last ship at {}", shooter, target);
            self.phase = Phase::GameOver;
            self.winner = Some(shooter);
            self.busy = false;
            return Ok(FireOutcome::GameOver {
                at: target,
                result,
                winner: shooter,
            });
        }

        self.phase = Phase::TurnComplete;
        Ok(FireOutcome::TurnComplete { at: target, result })
    }

    /// Fire at a row-major cell number of the opponent's board.
    pub fn fire_at_cell(&mut self, index: usize) -> Result<FireOutcome, MatchError> {
        if self.phase == Phase::GameOver {
            return Err(MatchError::GameOver);
        }
        if self.busy {
            return Err(MatchError::Busy);
        }
        let size = self.board(self.active.opponent()).size();
        let target = Coordinate::from_cell_index(index, size)
            .ok_or(MatchError::InvalidMove(BoardError::InvalidCellIndex(index)))?;
        self.fire(target)
    }

    /// Hand the screen to the other player after a completed turn.
    pub fn swap_turn(&mut self) -> Result<PlayerId, MatchError> {
        match self.phase {
            Phase::TurnComplete => {}
            Phase::GameOver => return Err(MatchError::GameOver),
            _ => return Err(MatchError::SwapNotReady),
        }
        self.active = self.active.opponent();
        self.phase = Phase::AwaitingShot;
        self.busy = false;
        log::info!("turn passes to {}", self.active);
        Ok(self.active)
    }

    /// What the active player sees once the boards are revealed.
    pub fn view(&self) -> PlayerView {
        let own = self.board(self.active);
        let foe = self.board(self.active.opponent());
        PlayerView {
            player: self.active,
            own_shots: own.shots().to_vec(),
            own_ships: own.ships().iter().map(|s| s.coordinates().to_vec()).collect(),
            foe_shots: foe.shots().to_vec(),
        }
    }

    /// Clear both boards and hand the first turn back to player one.
    pub fn restart(&mut self) {
        for board in &mut self.boards {
            board.reset();
        }
        self.active = PlayerId::One;
        self.phase = Phase::AwaitingShot;
        self.busy = false;
        self.started = false;
        self.winner = None;
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("active", &self.active)
            .field("phase", &self.phase)
            .field("busy", &self.busy)
            .field("winner", &self.winner)
            .finish()
    }
}
