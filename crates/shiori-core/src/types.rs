use serde::{Deserialize, Serialize};

use crate::aggregate::{CharacterView, WordView};
use crate::dictionary::DictionaryEntry;
use crate::error::OracleError;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Intent(UserIntent),
    LookupFinished {
        ticket: u64,
        outcome: Result<PageView, OracleError>,
    },
    ShowPage(Presentation),
    LookupFailed {
        query: String,
        reason: String,
        navigation: NavigationFlags,
    },
    NavigationChanged(NavigationFlags),
    Shutdown,
}

/// Everything the user can ask the browser to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    KanjiSelected(char),
    WordSelected { word: String, reading: String },
    SearchSubmitted(String),
    LinkActivated(String),
    BackRequested,
    ForwardRequested,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFlags {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Data for one rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageView {
    SearchResults {
        query: String,
        entries: Vec<DictionaryEntry>,
    },
    Kanji(CharacterView),
    Word(WordView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub page: PageView,
    pub navigation: NavigationFlags,
}
