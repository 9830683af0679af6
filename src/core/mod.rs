mod board;
mod config;
mod game;
mod history;
mod model_helpers;
mod models;
mod update;

pub use board::{Board, BoardShapeError};
pub use config::EngineConfig;
pub use game::{GameState, PlayerError};
pub use model_helpers::TileTally;
pub use models::{BlockReason, Cell, Direction, GameChangeType, GameUpdate, Position, Snapshot, UserAction};
