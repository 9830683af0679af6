use std::collections::VecDeque;

use crate::core::models::Snapshot;

/// Undo and redo stacks of full board snapshots.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> History {
        History {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    pub fn push_undo(&mut self, snapshot: Snapshot) {
        if self.limit == Some(0) {
            return;
        }
        self.undo.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                log::warn!("undo history is over its limit of {}, dropping the oldest entry", limit);
                self.undo.pop_front();
            }
        }
    }

    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop_back()
    }

    pub fn push_redo(&mut self, snapshot: Snapshot) {
        self.redo.push(snapshot);
    }

    pub fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop()
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
