use serde::{Deserialize, Serialize};

fn default_capacity() -> usize {
    100
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HistoryConfig {
    /// Pages kept before the oldest is forgotten
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}
