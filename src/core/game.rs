use crate::core::board::Board;
use crate::core::config::EngineConfig;
use crate::core::history::History;
use crate::core::models::{Cell, GameChangeType, GameUpdate, Position, Snapshot};

/// A live puzzle: the board, where the player stands, and how it got here.
///
/// The board is the source of truth for the player; `player` is a cached copy
/// of the single player cell and only changes together with the board.
///
/// Loading does not capture a reset point. Call [`GameState::set_initial_state`]
/// once after construction, before any moves, to make [`GameState::reset`] work.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) player: Position,
    initial_board: Option<Board>,
    move_count: u32,
    pub(crate) history: History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayerError {
    #[display("board has no player")]
    Missing,
    #[display("board has a second player at {second}, first at {first}")]
    Multiple { first: Position, second: Position },
}

/// The board's single player cell.
fn locate_player(board: &Board) -> Result<Position, PlayerError> {
    let mut players = board.positions().filter(|&pos| board[pos].is_player());
    let first = players.next().ok_or(PlayerError::Missing)?;
    if let Some(second) = players.next() {
        return Err(PlayerError::Multiple { first, second });
    }
    Ok(first)
}

impl GameState {
    /// Wraps a board holding exactly one player cell.
    pub fn new(board: Board) -> Result<GameState, PlayerError> {
        GameState::with_config(board, EngineConfig::default())
    }

    pub fn with_config(board: Board, config: EngineConfig) -> Result<GameState, PlayerError> {
        let player = locate_player(&board)?;
        Ok(GameState {
            board,
            player,
            initial_board: None,
            move_count: 0,
            history: History::new(config.history_limit),
        })
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn player_position(&self) -> Position {
        self.player
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.board.get(pos)
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn has_initial_state(&self) -> bool {
        self.initial_board.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            player: self.player,
        }
    }

    /// Captures the current board as the target of every later [`GameState::reset`].
    pub fn set_initial_state(&mut self) {
        self.initial_board = Some(self.board.clone());
    }

    /// Restores the captured board and zeroes the move counter. The undo and
    /// redo stacks are left as they are.
    pub fn reset(&mut self) -> GameUpdate {
        let Some(initial) = &self.initial_board else {
            log::warn!("reset requested before set_initial_state, ignoring");
            return GameUpdate::NoChange;
        };
        self.board = initial.clone();
        self.move_count = 0;
        // rescan instead of trusting any cached position
        if let Some(player) = self.board.find_player() {
            self.player = player;
        }
        log::trace!("reset to initial state, player at {}", self.player);
        GameUpdate::NextState(GameChangeType::Reset)
    }

    pub fn undo(&mut self) -> GameUpdate {
        let Some(previous) = self.history.pop_undo() else {
            return GameUpdate::NoChange;
        };
        let current = self.restore(previous);
        self.history.push_redo(current);
        log::trace!("undo, {} entries left", self.history.undo_depth());
        GameUpdate::NextState(GameChangeType::Undo)
    }

    pub fn redo(&mut self) -> GameUpdate {
        let Some(next) = self.history.pop_redo() else {
            return GameUpdate::NoChange;
        };
        let current = self.restore(next);
        self.history.push_undo(current);
        log::trace!("redo, {} entries left", self.history.redo_depth());
        GameUpdate::NextState(GameChangeType::Redo)
    }

    /// Swaps in `snapshot` and hands back the state it replaced.
    fn restore(&mut self, snapshot: Snapshot) -> Snapshot {
        let board = std::mem::replace(&mut self.board, snapshot.board);
        let player = std::mem::replace(&mut self.player, snapshot.player);
        Snapshot { board, player }
    }

    pub(crate) fn record_accepted_move(&mut self) {
        self.history.clear_redo();
        self.move_count = self.move_count.wrapping_add(1);
    }
}
