use crate::core::{BlockReason, Direction, GameChangeType, GameState, GameUpdate, Position, UserAction};

impl GameState {
    pub fn apply(&mut self, action: UserAction) -> GameUpdate {
        match action {
            UserAction::Move(dir) => self.move_player(dir),
            UserAction::Undo => self.undo(),
            UserAction::Redo => self.redo(),
            UserAction::Reset => self.reset(),
        }
    }

    /// Walks or pushes one step in `dir`.
    ///
    /// The pre-move state is recorded for undo before the move is checked, so
    /// a blocked move still leaves an (identical) entry on the undo stack.
    pub fn move_player(&mut self, dir: Direction) -> GameUpdate {
        let snapshot = self.snapshot();
        self.history.push_undo(snapshot);

        match self.try_move(dir) {
            Ok(change) => {
                self.record_accepted_move();
                log::trace!("moved {:?} to {} ({:?})", dir, self.player, change);
                GameUpdate::NextState(change)
            }
            Err(reason) => {
                log::debug!("move {:?} from {} rejected: {}", dir, self.player, reason);
                GameUpdate::Blocked(reason)
            }
        }
    }

    fn try_move(&mut self, dir: Direction) -> Result<GameChangeType, BlockReason> {
        let target = self
            .board
            .neighbor(self.player, dir)
            .ok_or(BlockReason::OutOfBounds)?;
        let dest = self.board[target];

        if dest.is_walkable() {
            self.step_player_to(target);
            return Ok(GameChangeType::PlayerMove);
        }
        if !dest.is_crate() {
            return Err(BlockReason::Wall);
        }

        let crate_target = self
            .board
            .neighbor(target, dir)
            .ok_or(BlockReason::CrateOutOfBounds)?;
        let beyond = self.board[crate_target];
        if !beyond.is_walkable() {
            return Err(BlockReason::CrateBlocked);
        }

        self.board[crate_target] = beyond.with_crate();
        self.board[target] = dest.vacated();
        self.step_player_to(target);
        Ok(GameChangeType::PlayerAndCrateMove)
    }

    /// The only place the player cell moves; keeps the cached position in step with the board.
    fn step_player_to(&mut self, to: Position) {
        let from = self.player;
        self.board[from] = self.board[from].vacated();
        self.board[to] = self.board[to].with_player();
        self.player = to;
    }
}
