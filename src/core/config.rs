use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of undo entries kept. `None` keeps every move.
    pub history_limit: Option<usize>,
}

impl EngineConfig {
    pub fn with_history_limit(limit: usize) -> EngineConfig {
        EngineConfig {
            history_limit: Some(limit),
        }
    }
}
