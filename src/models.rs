use serde::Serialize;

use crate::console_interface::render_board_to_string;
use crate::core::{GameState, Position};

/// Final state of a replay, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub player: Position,
    pub move_count: u32,
    pub won: bool,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

impl GameSummary {
    pub fn new(game: &GameState) -> Self {
        GameSummary {
            width: game.width(),
            height: game.height(),
            rows: render_board_to_string(game.board()).lines().map(str::to_string).collect(),
            player: game.player_position(),
            move_count: game.move_count(),
            won: game.is_won(),
            undo_depth: game.undo_depth(),
            redo_depth: game.redo_depth(),
        }
    }
}
