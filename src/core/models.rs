use serde::{Deserialize, Serialize};

use crate::core::board::Board;

/// Everything that can occupy one square of the board.
///
/// Storage survives occupancy: a crate sitting on a goal is `CrateOnStorage`,
/// never `CrateOnFloor`, so the underlying tile can always be recovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Floor,
    Storage,
    Wall,
    PlayerOnFloor,
    PlayerOnStorage,
    CrateOnFloor,
    CrateOnStorage,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Position {
        Position { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Redo,
    Reset,
}

/// What an operation did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameChangeType),
    Blocked(BlockReason),
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCrateMove,
    Undo,
    Redo,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BlockReason {
    #[display("Cannot move out of bounds")]
    OutOfBounds,
    #[display("Cannot push crate out of bounds")]
    CrateOutOfBounds,
    #[display("Cannot push crate")]
    CrateBlocked,
    #[display("Cannot walk into a wall")]
    Wall,
}

/// One entry on the undo or redo stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub player: Position,
}
