#![cfg(feature = "std")]

//! Same-screen terminal front end: ship placement and the hide / swap /
//! reveal ritual between turns.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Context};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, HitResult, ShotState},
    config::FLEET,
    game::{FireOutcome, Match, MatchError, PlayerId},
    ship::ShipType,
};

/// Format a coordinate as a column letter and 1-based row, e.g. `C7`.
pub fn coord_to_string(c: Coordinate) -> String {
    let col = (b'A' + c.x as u8) as char;
    format!("{}{}", col, c.y + 1)
}

/// Parse `C7` style input. Returns `None` for anything off a `size`×`size` grid.
pub fn parse_coord(input: &str, size: usize) -> Option<Coordinate> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > size || col >= size {
        return None;
    }
    Some(Coordinate::new(col as i32, row as i32 - 1))
}

/// Write a shot grid. Ship cells are drawn only for coordinates in `ships`.
pub fn print_grid<W: Write>(
    out: &mut W,
    shots: &[Vec<ShotState>],
    ships: &[Vec<Coordinate>],
) -> std::io::Result<()> {
    write!(out, "   ")?;
    for c in 0..shots.len() {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for (y, row) in shots.iter().enumerate() {
        write!(out, "{:2} ", y + 1)?;
        for (x, state) in row.iter().enumerate() {
            let here = Coordinate::new(x as i32, y as i32);
            let ch = match state {
                ShotState::Hit => 'X',
                ShotState::Miss => 'o',
                ShotState::NotShot if ships.iter().any(|s| s.contains(&here)) => 'S',
                ShotState::NotShot => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn result_word(result: HitResult) -> &'static str {
    match result {
        HitResult::Hit => "Hit",
        HitResult::Miss => "Miss",
    }
}

fn last_ship_cells(board: &Board) -> Vec<Coordinate> {
    board
        .ships()
        .last()
        .map(|s| s.coordinates().to_vec())
        .unwrap_or_default()
}

fn ship_cells(board: &Board) -> Vec<Vec<Coordinate>> {
    board.ships().iter().map(|s| s.coordinates().to_vec()).collect()
}

/// Terminal session driving a [`Match`] from one shared keyboard and screen.
pub struct HotSeat<R, W> {
    input: R,
    output: W,
    rng: SmallRng,
    random_fleet: bool,
}

impl<R: BufRead, W: Write> HotSeat<R, W> {
    pub fn new(input: R, output: W, rng: SmallRng) -> Self {
        Self {
            input,
            output,
            rng,
            random_fleet: false,
        }
    }

    /// Place every fleet randomly instead of asking the players.
    pub fn random_fleet(mut self, enabled: bool) -> Self {
        self.random_fleet = enabled;
        self
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn clear_screen(&mut self) -> anyhow::Result<()> {
        write!(self.output, "\x1B[2J\x1B[H")?;
        Ok(())
    }

    /// Place both fleets, then play until one of them is sunk.
    pub fn run(&mut self, size: usize) -> anyhow::Result<PlayerId> {
        let mut game = Match::new(size);
        for player in [PlayerId::One, PlayerId::Two] {
            writeln!(self.output, "{}, place your ships.", player)?;
            let board = game.board_mut(player).map_err(|e| anyhow!(e))?;
            self.place_fleet(board)?;
            self.clear_screen()?;
        }
        self.play(&mut game)
    }

    /// Ask for every ship of the standard fleet until all are on `board`.
    pub fn place_fleet(&mut self, board: &mut Board) -> anyhow::Result<()> {
        let mut pending: Vec<ShipType> = FLEET.to_vec();
        let mut placed: Vec<(ShipType, Vec<Coordinate>)> = Vec::new();

        while let Some(&def) = pending.first() {
            if self.random_fleet {
                let (start, end) = board
                    .random_placement(&mut self.rng, def.length())
                    .map_err(|e| anyhow!(e))?;
                board.place_ship(start, end).map_err(|e| anyhow!(e))?;
                placed.push((def, last_ship_cells(board)));
                pending.remove(0);
                continue;
            }

            print_grid(&mut self.output, board.shots(), &ship_cells(board))?;
            let line = self.prompt(&format!(
                "Place {} (length {}), e.g. A1 A{} or 'remove B2'. Press enter for random: ",
                def.name(),
                def.length(),
                def.length()
            ))?;

            if let Some(target) = line.strip_prefix("remove ") {
                let Some(coord) = parse_coord(target, board.size()) else {
                    writeln!(self.output, "Invalid coordinate")?;
                    continue;
                };
                let removed = board.remove_ship_by_coordinate(coord);
                match placed.iter().position(|(_, cells)| *cells == removed) {
                    Some(i) if !removed.is_empty() => {
                        let (def, _) = placed.remove(i);
                        pending.insert(0, def);
                    }
                    _ => writeln!(self.output, "No ship at {}", coord_to_string(coord))?,
                }
                continue;
            }

            let (start, end) = if line.is_empty() {
                board
                    .random_placement(&mut self.rng, def.length())
                    .map_err(|e| anyhow!(e))?
            } else {
                let mut parts = line.split_whitespace();
                let size = board.size();
                match (
                    parts.next().and_then(|p| parse_coord(p, size)),
                    parts.next().and_then(|p| parse_coord(p, size)),
                ) {
                    (Some(s), Some(e)) => (s, e),
                    _ => {
                        writeln!(self.output, "Invalid input")?;
                        continue;
                    }
                }
            };

            let cells = ((end.x - start.x).abs() + (end.y - start.y).abs() + 1) as usize;
            if cells != def.length() {
                writeln!(self.output, "{} must cover {} cells", def.name(), def.length())?;
                continue;
            }
            match board.place_ship(start, end) {
                Ok(()) => {
                    placed.push((def, last_ship_cells(board)));
                    pending.remove(0);
                }
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
        Ok(())
    }

    fn reveal(&mut self, game: &Match) -> anyhow::Result<()> {
        let view = game.view();
        writeln!(self.output, "{}'s turn", view.player)?;
        writeln!(self.output, "Opponent board:")?;
        print_grid(&mut self.output, &view.foe_shots, &[])?;
        writeln!(self.output, "\nYour board:")?;
        print_grid(&mut self.output, &view.own_shots, &view.own_ships)?;
        Ok(())
    }

    /// Play turns until a board is fully sunk and return the winner.
    pub fn play(&mut self, game: &mut Match) -> anyhow::Result<PlayerId> {
        loop {
            self.reveal(game)?;
            let size = game.board(game.active_player().opponent()).size();
            let outcome = loop {
                let line = self.prompt("Fire at: ")?;
                let Some(target) = parse_coord(&line, size) else {
                    writeln!(self.output, "Invalid coordinate")?;
                    continue;
                };
                match game.fire(target) {
                    Ok(outcome) => break outcome,
                    Err(MatchError::InvalidMove(e)) => {
                        writeln!(self.output, "Invalid move ({}), try another cell!", e)?;
                    }
                    Err(e) => return Err(anyhow!(e)),
                }
            };

            match outcome {
                FireOutcome::GameOver { at, result, winner } => {
                    writeln!(self.output, "{} -> {}", coord_to_string(at), result_word(result))?;
                    writeln!(self.output, "All ships sunk. {} wins!", winner)?;
                    return Ok(winner);
                }
                FireOutcome::TurnComplete { at, result } => {
                    writeln!(self.output, "{} -> {}", coord_to_string(at), result_word(result))?;
                }
            }

            self.prompt("Press enter to hide the boards.")?;
            self.clear_screen()?;
            let next = game.swap_turn().map_err(|e| anyhow!(e))?;
            self.prompt(&format!("{}, press enter to reveal your boards.", next))?;
        }
    }
}
