use crate::core::board::Board;
use crate::core::models::{Cell, Direction};

impl Cell {
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Storage)
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Cell::PlayerOnFloor | Cell::PlayerOnStorage)
    }

    pub fn is_crate(&self) -> bool {
        matches!(self, Cell::CrateOnFloor | Cell::CrateOnStorage)
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Cell::Storage | Cell::PlayerOnStorage | Cell::CrateOnStorage)
    }

    /// The tile left behind when the player or a crate walks off this cell.
    pub fn vacated(&self) -> Cell {
        match self {
            Cell::PlayerOnStorage | Cell::CrateOnStorage => Cell::Storage,
            Cell::PlayerOnFloor | Cell::CrateOnFloor => Cell::Floor,
            other => *other,
        }
    }

    /// This cell with the player standing on its underlying tile.
    pub fn with_player(&self) -> Cell {
        if self.is_storage() {
            Cell::PlayerOnStorage
        } else {
            Cell::PlayerOnFloor
        }
    }

    /// This cell with a crate resting on its underlying tile.
    pub fn with_crate(&self) -> Cell {
        if self.is_storage() {
            Cell::CrateOnStorage
        } else {
            Cell::CrateOnFloor
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(dx, dy)` with y growing downward.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileTally {
    /// Crates not on storage.
    pub loose_crates: usize,
    pub crates_on_storage: usize,
    /// Every storage-backed cell, occupied or not.
    pub storage: usize,
}

impl TileTally {
    pub fn is_won(&self) -> bool {
        // a board with no crates and no storage has nothing to solve
        if self.storage == 0 && self.loose_crates == 0 {
            return false;
        }
        if self.storage == self.loose_crates {
            self.crates_on_storage == self.storage
        } else {
            self.loose_crates == 0 && self.crates_on_storage > 0
        }
    }
}

impl Board {
    pub fn tally(&self) -> TileTally {
        let mut tally = TileTally::default();
        for cell in self.cells() {
            match cell {
                Cell::CrateOnFloor => tally.loose_crates += 1,
                Cell::CrateOnStorage => tally.crates_on_storage += 1,
                _ => {}
            }
            if cell.is_storage() {
                tally.storage += 1;
            }
        }
        tally
    }

    pub fn is_won(&self) -> bool {
        self.tally().is_won()
    }
}
