use std::path::Path;
use std::str::FromStr;

use crate::core::{Board, Cell, Direction, EngineConfig, GameState, GameUpdate, PlayerError, Position, UserAction};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelError {
    #[display("level is missing its `height width` header")]
    MissingHeader,
    #[display("invalid level header {line:?}: expected `height width`")]
    InvalidHeader { line: String },
    #[display("level must be at least 1x1, got {height}x{width}")]
    EmptyBoard { height: usize, width: usize },
    #[display("level of {height}x{width} cells is too large")]
    TooLarge { height: usize, width: usize },
    #[display("level declares {expected} rows but only has {found}")]
    MissingRow { expected: usize, found: usize },
    #[display("row {row} has {found} cells, expected {expected}")]
    RowTooShort { row: usize, expected: usize, found: usize },
    #[display("unknown symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
    #[display("level has no player")]
    MissingPlayer,
    #[display("level has a second player at {second}, first at {first}")]
    MultiplePlayers { first: Position, second: Position },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    #[display("failed to read level file: {_0}")]
    Io(std::io::Error),
    #[display("malformed level: {_0}")]
    Level(LevelError),
}

impl From<PlayerError> for LevelError {
    fn from(err: PlayerError) -> Self {
        match err {
            PlayerError::Missing => LevelError::MissingPlayer,
            PlayerError::Multiple { first, second } => LevelError::MultiplePlayers { first, second },
        }
    }
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        Some(match symbol {
            '#' => Cell::Wall,
            '.' => Cell::Floor,
            'a' => Cell::Storage,
            '@' => Cell::PlayerOnFloor,
            '+' => Cell::PlayerOnStorage,
            'A' => Cell::CrateOnFloor,
            '1' => Cell::CrateOnStorage,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Storage => 'a',
            Cell::PlayerOnFloor => '@',
            Cell::PlayerOnStorage => '+',
            Cell::CrateOnFloor => 'A',
            Cell::CrateOnStorage => '1',
        }
    }
}

/// Reads a level description: a `height width` header followed by `height`
/// rows of `width` symbols. Returns the board and the player's cell.
pub fn parse_level(s: &str) -> Result<(Board, Position), LevelError> {
    let mut lines = s.lines();
    let header = lines.next().ok_or(LevelError::MissingHeader)?;
    let (height, width) = parse_header(header)?;

    let mut cells = Vec::new();
    let mut player: Option<Position> = None;
    for y in 0..height {
        let line = lines.next().ok_or(LevelError::MissingRow {
            expected: height,
            found: y,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(line);

        let row: Vec<char> = line.chars().take(width).collect();
        if row.len() < width {
            return Err(LevelError::RowTooShort {
                row: y,
                expected: width,
                found: row.len(),
            });
        }

        for (x, symbol) in row.into_iter().enumerate() {
            let cell = Cell::from_symbol(symbol).ok_or(LevelError::UnknownSymbol { symbol, x, y })?;
            if cell.is_player() {
                let here = Position { x, y };
                if let Some(first) = player {
                    return Err(LevelError::MultiplePlayers { first, second: here });
                }
                player = Some(here);
            }
            cells.push(cell);
        }
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    let board = Board::from_cells(width, height, cells)
        .map_err(|_| LevelError::EmptyBoard { height, width })?;
    Ok((board, player))
}

fn parse_header(line: &str) -> Result<(usize, usize), LevelError> {
    let invalid = || LevelError::InvalidHeader { line: line.to_string() };
    let mut parts = line.split_whitespace();
    let height = parts.next().ok_or_else(invalid)?.parse::<usize>().map_err(|_| invalid())?;
    let width = parts.next().ok_or_else(invalid)?.parse::<usize>().map_err(|_| invalid())?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    if height == 0 || width == 0 {
        return Err(LevelError::EmptyBoard { height, width });
    }
    if height.checked_mul(width).is_none() {
        return Err(LevelError::TooLarge { height, width });
    }
    Ok((height, width))
}

impl GameState {
    pub fn from_level(s: &str) -> Result<GameState, LevelError> {
        GameState::from_level_with_config(s, EngineConfig::default())
    }

    pub fn from_level_with_config(s: &str, config: EngineConfig) -> Result<GameState, LevelError> {
        let (board, _player) = parse_level(s)?;
        Ok(GameState::with_config(board, config)?)
    }
}

impl FromStr for GameState {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_level(s)
    }
}

pub fn load_level_file(path: impl AsRef<Path>, config: EngineConfig) -> Result<GameState, LoadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(GameState::from_level_with_config(&text, config)?)
}

pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::with_capacity((board.width() + 1) * board.height());
    for row in board.rows() {
        result.extend(row.iter().map(Cell::symbol));
        result.push('\n');
    }
    result
}

/// The board followed by a `Player Position: (x, y)` line.
pub fn render_dump(game: &GameState) -> String {
    format!(
        "{}Player Position: {}\n",
        render_board_to_string(game.board()),
        game.player_position()
    )
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_dump(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Skip,
    Unknown,
}

/// Maps one key of a move script: W/A/S/D move, Z undoes, X redoes, R resets.
pub fn input_from_char(ch: char) -> ConsoleInput {
    match ch.to_ascii_lowercase() {
        'q' => ConsoleInput::Quit,
        'w' => ConsoleInput::UserAction(UserAction::Move(Direction::Up)),
        's' => ConsoleInput::UserAction(UserAction::Move(Direction::Down)),
        'a' => ConsoleInput::UserAction(UserAction::Move(Direction::Left)),
        'd' => ConsoleInput::UserAction(UserAction::Move(Direction::Right)),
        'z' => ConsoleInput::UserAction(UserAction::Undo),
        'x' => ConsoleInput::UserAction(UserAction::Redo),
        'r' => ConsoleInput::UserAction(UserAction::Reset),
        c if c.is_whitespace() => ConsoleInput::Skip,
        _ => ConsoleInput::Unknown,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    pub applied: usize,
    pub blocked: usize,
    pub ignored: usize,
    pub quit: bool,
}

/// Feeds a move script to the game key by key. Once the level is won only
/// reset is accepted; `q` stops the script.
pub fn run_script(game: &mut GameState, script: &str) -> ScriptStats {
    let mut stats = ScriptStats::default();
    for ch in script.chars() {
        match input_from_char(ch) {
            ConsoleInput::Quit => {
                stats.quit = true;
                break;
            }
            ConsoleInput::Skip => {}
            ConsoleInput::Unknown => {
                log::warn!("ignoring unknown key {:?} in move script", ch);
                stats.ignored += 1;
            }
            ConsoleInput::UserAction(action) => {
                if game.is_won() && action != UserAction::Reset {
                    stats.ignored += 1;
                    continue;
                }
                match game.apply(action) {
                    GameUpdate::Blocked(_) => stats.blocked += 1,
                    _ => stats.applied += 1,
                }
            }
        }
    }
    stats
}
