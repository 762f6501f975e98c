#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use hotseat_battleship::{init_logging, ConsoleGame};
#[cfg(feature = "std")]
use log::LevelFilter;

/// Two players, one console: place five ships each, then take turns firing.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Diagnostic log level written to stderr (overrides BATTLESHIP_LOG).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = ConsoleGame::new(stdin.lock(), stdout.lock());
    let winner = console.run()?;
    log::info!("game finished, player {} won", winner);
    Ok(())
}
