use std::collections::HashMap;

use serde::Deserialize;
use shiori_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata, KanjiInfo, MatchMode};
use shiori_core::error::OracleError;

// JSON structures for the bundled dictionary format
#[derive(Debug, Deserialize)]
struct DictionaryJson {
    #[serde(default)]
    kanji: Vec<KanjiJson>,
    #[serde(default)]
    words: Vec<WordJson>,
}

#[derive(Debug, Deserialize)]
struct KanjiJson {
    character: String,
    grade: Option<String>,
    strokes: Option<String>,
    freq: Option<String>,
    #[serde(default)]
    onyomi: Vec<String>,
    #[serde(default)]
    kunyomi: Vec<String>,
    #[serde(default)]
    nanori: Vec<String>,
    #[serde(default)]
    radical: Vec<String>,
    #[serde(default)]
    meanings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WordJson {
    word: String,
    #[serde(default)]
    readings: Vec<String>,
    meanings: Vec<String>,
    #[serde(default)]
    common: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory kanji and word dictionary
#[derive(Debug, Default)]
pub struct JapaneseDictionary {
    kanji: Vec<DictionaryEntry>,
    words: Vec<DictionaryEntry>,
    kanji_index: HashMap<String, usize>,
    word_index: HashMap<String, Vec<usize>>,
    reading_index: HashMap<String, Vec<usize>>,
}

impl JapaneseDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: DictionaryJson = serde_json::from_str(json_str)?;

        let mut dict = Self::new();

        for record in data.kanji {
            let mut chars = record.character.chars();
            let character = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    tracing::warn!("Skipping kanji record '{}'", record.character);
                    continue;
                }
            };

            let info = KanjiInfo {
                grade: record.grade,
                stroke_count: record.strokes,
                frequency_rank: record.freq,
                onyomi: record.onyomi,
                kunyomi: record.kunyomi,
                nanori: record.nanori,
                radical_readings: record.radical,
            };
            dict.insert_kanji(DictionaryEntry::reference(character, record.meanings, info));
        }

        for record in data.words {
            // Skip entries with nothing to show
            if record.word.is_empty() || record.meanings.is_empty() {
                continue;
            }
            dict.insert_word(DictionaryEntry::word(
                record.word,
                record.readings,
                record.meanings,
                record.common,
            ));
        }

        Ok(dict)
    }

    /// Number of kanji plus word entries
    pub fn entry_count(&self) -> usize {
        self.kanji.len() + self.words.len()
    }

    /// Merge another dictionary into this one.
    /// Kanji from `other` replace ones already present; words are appended.
    pub fn merge(mut self, other: JapaneseDictionary) -> Self {
        for entry in other.kanji {
            self.insert_kanji(entry);
        }
        for entry in other.words {
            self.insert_word(entry);
        }
        self
    }

    fn insert_kanji(&mut self, entry: DictionaryEntry) {
        match self.kanji_index.get(&entry.word) {
            Some(&idx) => self.kanji[idx] = entry,
            None => {
                self.kanji_index.insert(entry.word.clone(), self.kanji.len());
                self.kanji.push(entry);
            }
        }
    }

    fn insert_word(&mut self, entry: DictionaryEntry) {
        let idx = self.words.len();

        self.word_index.entry(entry.word.clone()).or_default().push(idx);
        for reading in &entry.readings {
            self.reading_index.entry(reading.clone()).or_default().push(idx);
        }

        self.words.push(entry);
    }

    fn exact_words(&self, query: &str) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .word_index
            .get(query)
            .into_iter()
            .chain(self.reading_index.get(query))
            .flatten()
            .copied()
            .collect();

        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

impl Dictionary for JapaneseDictionary {
    fn search(&self, query: &str, mode: MatchMode) -> Result<Vec<DictionaryEntry>, OracleError> {
        let mut results: Vec<DictionaryEntry> = self
            .kanji_index
            .get(query)
            .map(|&idx| self.kanji[idx].clone())
            .into_iter()
            .collect();

        match mode {
            MatchMode::ExactCharacter => {
                results.extend(self.exact_words(query).into_iter().map(|idx| self.words[idx].clone()));
            }
            MatchMode::Anywhere => {
                results.extend(self.words.iter().filter(|e| e.word.contains(query)).cloned());
            }
        }

        tracing::debug!("Search '{}' ({:?}): {} results", query, mode, results.len());
        Ok(results)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "shiori-ja".to_string(),
            version: "1.0".to_string(),
            language: "ja".to_string(),
            entry_count: self.entry_count(),
        }
    }
}
