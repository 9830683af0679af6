use serde::{Deserialize, Serialize};

use crate::core::models::{Cell, Direction, Position};

/// A fixed size rectangle of cells stored row-major, `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board of {width}x{height} cannot hold {found} cells")]
pub struct BoardShapeError {
    pub width: usize,
    pub height: usize,
    pub found: usize,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardShapeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.width, raw.height, raw.cells)
    }
}

impl Board {
    pub fn new(width: usize, height: usize, fill: Cell) -> Board {
        Board {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Board, BoardShapeError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(BoardShapeError {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Board { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    /// The cell one step from `pos` in `dir`, or `None` when that leaves the board.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.offset();
        let next = Position {
            x: pos.x.checked_add_signed(dx)?,
            y: pos.y.checked_add_signed(dy)?,
        };
        self.contains(next).then_some(next)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }

    /// First player cell in row-major order.
    pub fn find_player(&self) -> Option<Position> {
        self.positions().find(|&pos| self[pos].is_player())
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.x + pos.y * self.width
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Cell;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl std::ops::IndexMut<Position> for Board {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        let i = self.index_of(index);
        &mut self.cells[i]
    }
}
