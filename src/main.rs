// Headless Sokoban replay
// Loads a level, plays a move script against it and prints the final board.
// Keys: W/A/S/D move, Z undo, X redo, R reset, Q stops the script.
// Tiles: '#' wall, '.' floor, 'a' storage, '@' player, '+' player on storage, 'A' crate, '1' crate on storage.

use std::path::PathBuf;

use clap::Parser;
use sokoban_rules::console_interface::{load_level_file, render_dump, run_script};
use sokoban_rules::core::EngineConfig;
use sokoban_rules::models::GameSummary;

#[derive(Parser, Debug)]
#[command(version, about = "Replay a move script against a Sokoban level")]
struct Args {
    /// Level file: `height width` header, then one row of symbols per line
    level: PathBuf,

    /// Keys to replay, e.g. "ddwzx"
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Keep at most this many undo entries
    #[arg(long)]
    history_limit: Option<usize>,

    /// Print the final state as JSON instead of the text dump
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = EngineConfig {
        history_limit: args.history_limit,
    };
    let mut game = load_level_file(&args.level, config)?;
    game.set_initial_state();
    log::info!(
        "loaded {} ({}x{}), player at {}",
        args.level.display(),
        game.width(),
        game.height(),
        game.player_position()
    );

    let stats = run_script(&mut game, &args.moves);
    log::info!("replayed script: {:?}", stats);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&GameSummary::new(&game))?);
        return Ok(());
    }

    println!("Moves: {}", game.move_count());
    if game.is_won() {
        println!("You Win!");
    }
    print!("{}", render_dump(&game));
    Ok(())
}
