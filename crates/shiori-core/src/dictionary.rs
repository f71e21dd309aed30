use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Dictionary search backend.
///
/// Implementations own storage and matching; the browser only consumes the
/// ordered result list.
pub trait Dictionary: Send + Sync {
    /// Search the dictionary, results in backend order
    fn search(&self, query: &str, mode: MatchMode) -> Result<Vec<DictionaryEntry>, OracleError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The query is the whole headword (or reading)
    #[default]
    ExactCharacter,
    /// The query appears anywhere in the headword
    Anywhere,
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: String,
    pub language: String,
    pub entry_count: usize,
}

/// One dictionary record, either a per-character reference entry or a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub readings: Vec<String>,
    pub meanings: Vec<String>,
    pub is_common: bool,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Reference(KanjiInfo),
    Word,
}

/// Per-character data carried only by reference entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiInfo {
    pub grade: Option<String>,
    pub stroke_count: Option<String>,
    pub frequency_rank: Option<String>,
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    pub nanori: Vec<String>,
    pub radical_readings: Vec<String>,
}

impl DictionaryEntry {
    pub fn word(
        word: impl Into<String>,
        readings: Vec<String>,
        meanings: Vec<String>,
        is_common: bool,
    ) -> Self {
        Self {
            word: word.into(),
            readings,
            meanings,
            is_common,
            kind: EntryKind::Word,
        }
    }

    pub fn reference(character: char, meanings: Vec<String>, info: KanjiInfo) -> Self {
        // The flat reading list is on'yomi followed by kun'yomi
        let readings = info.onyomi.iter().chain(&info.kunyomi).cloned().collect();

        Self {
            word: character.to_string(),
            readings,
            meanings,
            is_common: false,
            kind: EntryKind::Reference(info),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.kind, EntryKind::Reference(_))
    }

    pub fn kanji_info(&self) -> Option<&KanjiInfo> {
        match &self.kind {
            EntryKind::Reference(info) => Some(info),
            EntryKind::Word => None,
        }
    }

    pub fn primary_reading(&self) -> &str {
        self.readings.first().map(String::as_str).unwrap_or_default()
    }

    /// Meanings as a single display line
    pub fn meanings_line(&self) -> String {
        self.meanings.join("; ")
    }
}
