use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Back,
    Forward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Back => f.write_str("back"),
            Direction::Forward => f.write_str("forward"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("No history to go {direction}")]
    NoHistory { direction: Direction },
}

/// Failure reported by the dictionary backend.
///
/// Aggregation never sees these: a failed search ends the lookup before any
/// result set is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("Dictionary unavailable: {0}")]
    Unavailable(String),

    #[error("Search for '{query}' timed out after {timeout_ms}ms")]
    Timeout { query: String, timeout_ms: u64 },

    #[error("Search for '{query}' failed: {reason}")]
    Failed { query: String, reason: String },
}
