use anyhow::Result;
use clap::Parser;
use std::io;
use wolfsheep_core::{GameController, Role};

mod app;

use app::{App, Control};

/// One wolf against four sheep on an 8x8 board.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Who plays the wolf.
    #[arg(long, value_enum, default_value_t = Control::Human)]
    wolf: Control,

    /// Who plays the sheep.
    #[arg(long, value_enum, default_value_t = Control::Computer)]
    sheep: Control,

    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let game = GameController::new();
    let mut app = App::new(game, args.wolf, args.sheep, io::stdin().lock(), io::stdout().lock());
    let winners = app.run(args.games)?;

    let wolf_wins = winners.iter().filter(|&&w| w == Role::Wolf).count();
    log::info!(
        "Finished {} game(s): wolf {wolf_wins}, sheep {}",
        winners.len(),
        winners.len() - wolf_wins
    );
    Ok(())
}
