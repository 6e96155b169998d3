#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use hotseat_battleship::{
    init_logging, HotSeat, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player Battleship on a single shared screen.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Side length of each player's board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size)]
    size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Place both fleets randomly instead of asking each player.
    #[arg(long)]
    random_fleet: bool,
}

#[cfg(feature = "std")]
fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{}", e))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {} and {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE
        ))
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session =
        HotSeat::new(stdin.lock(), stdout.lock(), rng).random_fleet(cli.random_fleet);
    let winner = session.run(cli.size)?;
    log::info!("game finished, {} won", winner);
    Ok(())
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn size_bounds() {
        assert_eq!(parse_size("10"), Ok(10));
        assert!(parse_size("4").is_err());
        assert!(parse_size("27").is_err());
        assert!(parse_size("ten").is_err());
    }
}
