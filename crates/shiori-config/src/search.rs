use serde::{Deserialize, Serialize};
use shiori_core::MatchMode;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Mode used for queries typed into the search bar
    pub match_mode: MatchMode,
}
