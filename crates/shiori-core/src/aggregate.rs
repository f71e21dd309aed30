//! Merging raw search results into the views shown for a kanji or a word.
//!
//! Everything here works on result sets that were already fetched; a failed
//! search must be handled before these functions are called.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::decompose::decompose;
use crate::dictionary::DictionaryEntry;

/// Most compounds listed on a kanji page
pub const COMPOUND_LIMIT: usize = 50;

/// Longest meaning summary, ellipsis included
pub const SUMMARY_LENGTH: usize = 80;

const ELLIPSIS: &str = "...";

/// A word entry cut down for the compound list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundCandidate {
    pub word: String,
    /// Primary reading, also used as the hint when the compound is opened
    pub reading: String,
    pub meaning_summary: String,
    pub is_common: bool,
}

impl CompoundCandidate {
    pub fn from_entry(entry: &DictionaryEntry) -> Self {
        Self {
            word: entry.word.clone(),
            reading: entry.primary_reading().to_string(),
            meaning_summary: summarize_meaning(&entry.meanings_line()),
            is_common: entry.is_common,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterView {
    pub character: char,
    /// `None` when the dictionary has no reference entry for the character
    pub reference_entry: Option<DictionaryEntry>,
    pub compound_candidates: Vec<CompoundCandidate>,
    /// Compounds cut off by [`COMPOUND_LIMIT`]
    pub remaining_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordView {
    pub word: String,
    pub reading_hint: String,
    pub best_entry: Option<DictionaryEntry>,
    /// One row per kanji of the best entry, filled after the per-character lookups
    pub breakdown: Vec<KanjiSummary>,
}

impl WordView {
    /// Kanji that need a breakdown lookup, in order
    pub fn kanji(&self) -> Vec<char> {
        self.best_entry
            .as_ref()
            .map(|entry| decompose(&entry.word))
            .unwrap_or_default()
    }
}

/// Short description of one kanji inside a word page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiSummary {
    pub character: char,
    pub found: bool,
    pub readings: String,
    pub meanings: String,
    pub stroke_count: Option<String>,
}

/// First reference entry in `results`, if any.
pub fn find_reference(results: &[DictionaryEntry]) -> Option<&DictionaryEntry> {
    results.iter().find(|entry| entry.is_reference())
}

pub fn build_character_view(
    character: char,
    reference_results: &[DictionaryEntry],
    compound_results: &[DictionaryEntry],
) -> CharacterView {
    let reference_entry = find_reference(reference_results).cloned();

    // A compound search also returns the character's own reference record
    let mut candidates: Vec<CompoundCandidate> = compound_results
        .iter()
        .filter(|entry| !entry.is_reference())
        .map(CompoundCandidate::from_entry)
        .collect();

    // Stable: duplicates of one word keep backend order
    candidates.sort_by(compare_candidates);

    let total = candidates.len();
    candidates.truncate(COMPOUND_LIMIT);

    tracing::debug!(
        "Character view for {}: reference={}, compounds={}",
        character,
        reference_entry.is_some(),
        total
    );

    CharacterView {
        character,
        reference_entry,
        compound_candidates: candidates,
        remaining_count: total.saturating_sub(COMPOUND_LIMIT),
    }
}

/// Common words first, then by headword.
fn compare_candidates(a: &CompoundCandidate, b: &CompoundCandidate) -> Ordering {
    b.is_common
        .cmp(&a.is_common)
        .then_with(|| a.word.cmp(&b.word))
}

pub fn build_word_view(word: &str, reading_hint: &str, results: &[DictionaryEntry]) -> WordView {
    let best_entry = select_best_word(word, reading_hint, results).cloned();

    WordView {
        word: word.to_string(),
        reading_hint: reading_hint.to_string(),
        best_entry,
        breakdown: Vec::new(),
    }
}

/// Pick the entry a word link points at.
///
/// An exact word+reading match wins outright. Otherwise the first entry with
/// the same headword, and failing that the first word entry at all.
pub fn select_best_word<'a>(
    word: &str,
    reading_hint: &str,
    results: &'a [DictionaryEntry],
) -> Option<&'a DictionaryEntry> {
    let mut first_word_match = None;

    for entry in results.iter().filter(|entry| !entry.is_reference()) {
        if entry.word != word {
            continue;
        }
        if !reading_hint.is_empty() && entry.readings.iter().any(|r| r == reading_hint) {
            return Some(entry);
        }
        if first_word_match.is_none() {
            first_word_match = Some(entry);
        }
    }

    first_word_match.or_else(|| results.iter().find(|entry| !entry.is_reference()))
}

/// Build the breakdown row for `character` from an exact-character search.
pub fn summarize_kanji(character: char, results: &[DictionaryEntry]) -> KanjiSummary {
    let Some(entry) = find_reference(results) else {
        return KanjiSummary {
            character,
            found: false,
            readings: String::new(),
            meanings: String::new(),
            stroke_count: None,
        };
    };

    let info = entry.kanji_info().cloned().unwrap_or_default();

    let mut readings = info.onyomi.join(", ");
    if !info.kunyomi.is_empty() {
        if !readings.is_empty() {
            readings.push_str(" / ");
        }
        readings.push_str(&info.kunyomi.join(", "));
    }

    KanjiSummary {
        character,
        found: true,
        readings,
        meanings: entry.meanings_line(),
        stroke_count: info.stroke_count,
    }
}

/// Shorten `meaning` to at most [`SUMMARY_LENGTH`] characters.
pub fn summarize_meaning(meaning: &str) -> String {
    if meaning.chars().count() <= SUMMARY_LENGTH {
        return meaning.to_string();
    }

    let keep = SUMMARY_LENGTH - ELLIPSIS.len();
    let mut summary: String = meaning.chars().take(keep).collect();
    summary.push_str(ELLIPSIS);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::KanjiInfo;

    fn word(w: &str, reading: &str, meaning: &str, common: bool) -> DictionaryEntry {
        DictionaryEntry::word(w, vec![reading.to_string()], vec![meaning.to_string()], common)
    }

    fn kanji(ch: char, on: &[&str], kun: &[&str], meanings: &[&str]) -> DictionaryEntry {
        let info = KanjiInfo {
            grade: Some("1".to_string()),
            stroke_count: Some("4".to_string()),
            onyomi: on.iter().map(|s| s.to_string()).collect(),
            kunyomi: kun.iter().map(|s| s.to_string()).collect(),
            ..KanjiInfo::default()
        };
        DictionaryEntry::reference(ch, meanings.iter().map(|s| s.to_string()).collect(), info)
    }

    #[test]
    fn common_compounds_sort_first() {
        let compounds = vec![
            word("日光", "にっこう", "sunlight", false),
            word("日本語", "にほんご", "Japanese language", true),
        ];

        let view = build_character_view('日', &[], &compounds);

        let order: Vec<&str> = view.compound_candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(order, ["日本語", "日光"]);
        assert_eq!(view.remaining_count, 0);
        assert!(view.reference_entry.is_none());
    }

    #[test]
    fn ties_break_on_word_and_keep_duplicates_in_order() {
        let compounds = vec![
            word("日中", "にっちゅう", "daytime", true),
            word("日曜", "にちよう", "Sunday", false),
            word("日中", "ひなか", "broad daylight", true),
            word("一日", "いちにち", "one day", true),
        ];

        let view = build_character_view('日', &[], &compounds);

        let order: Vec<(&str, &str)> = view
            .compound_candidates
            .iter()
            .map(|c| (c.word.as_str(), c.reading.as_str()))
            .collect();
        assert_eq!(
            order,
            [
                ("一日", "いちにち"),
                ("日中", "にっちゅう"),
                ("日中", "ひなか"),
                ("日曜", "にちよう"),
            ]
        );
    }

    #[test]
    fn reference_entries_are_split_out() {
        let sun = kanji('日', &["ニチ"], &["ひ"], &["day", "sun"]);
        let compounds = vec![sun.clone(), word("日本", "にほん", "Japan", true)];

        let view = build_character_view('日', &[word("日", "ひ", "day", true), sun.clone()], &compounds);

        assert_eq!(view.reference_entry, Some(sun));
        assert_eq!(view.compound_candidates.len(), 1);
        assert_eq!(view.compound_candidates[0].word, "日本");
    }

    #[test]
    fn compound_list_is_capped() {
        let compounds: Vec<DictionaryEntry> = (0..73)
            .map(|i| word(&format!("日{i:03}"), "にち", "x", i % 3 == 0))
            .collect();

        let view = build_character_view('日', &[], &compounds);

        assert_eq!(view.compound_candidates.len(), COMPOUND_LIMIT);
        assert_eq!(view.remaining_count, 23);

        let first_uncommon = view
            .compound_candidates
            .iter()
            .position(|c| !c.is_common)
            .unwrap();
        assert!(view.compound_candidates[first_uncommon..].iter().all(|c| !c.is_common));
        assert!(view.compound_candidates.windows(2).all(|w| {
            w[0].is_common != w[1].is_common || w[0].word <= w[1].word
        }));
    }

    #[test]
    fn long_meanings_are_summarized() {
        let long = "a".repeat(120);
        let summary = summarize_meaning(&long);
        assert_eq!(summary.chars().count(), SUMMARY_LENGTH);
        assert!(summary.ends_with("..."));

        let exact = "b".repeat(SUMMARY_LENGTH);
        assert_eq!(summarize_meaning(&exact), exact);

        let wide = "意".repeat(90);
        assert_eq!(summarize_meaning(&wide).chars().count(), SUMMARY_LENGTH);
    }

    #[test]
    fn reading_hint_beats_earlier_word_match() {
        let results = vec![
            word("猫", "びょう", "cat (literary)", false),
            word("猫", "ねこ", "cat", true),
        ];

        let view = build_word_view("猫", "ねこ", &results);

        assert_eq!(view.best_entry, Some(results[1].clone()));
    }

    #[test]
    fn falls_back_to_first_word_match_then_any_word() {
        let results = vec![
            kanji('猫', &["ビョウ"], &["ねこ"], &["cat"]),
            word("子猫", "こねこ", "kitten", true),
            word("猫", "びょう", "cat (literary)", false),
            word("猫", "ねこ", "cat", true),
        ];

        let no_hint = build_word_view("猫", "", &results);
        assert_eq!(no_hint.best_entry, Some(results[2].clone()));

        let wrong_hint = build_word_view("猫", "にゃん", &results);
        assert_eq!(wrong_hint.best_entry, Some(results[2].clone()));

        let other = build_word_view("野良猫", "のらねこ", &results);
        assert_eq!(other.best_entry, Some(results[1].clone()));
    }

    #[test]
    fn no_word_entry_is_not_found() {
        let results = vec![kanji('猫', &["ビョウ"], &["ねこ"], &["cat"])];

        assert!(build_word_view("猫", "ねこ", &results).best_entry.is_none());
        assert!(build_word_view("猫", "ねこ", &[]).best_entry.is_none());
    }

    #[test]
    fn word_view_lists_kanji_of_best_entry() {
        let results = vec![word("日本語", "にほんご", "Japanese", true)];
        let view = build_word_view("日本語", "にほんご", &results);
        assert_eq!(view.kanji(), vec!['日', '本', '語']);
    }

    #[test]
    fn kanji_summary_joins_readings() {
        let results = vec![
            word("本", "ほん", "book", true),
            kanji('本', &["ホン"], &["もと"], &["book", "origin"]),
        ];

        let summary = summarize_kanji('本', &results);
        assert!(summary.found);
        assert_eq!(summary.readings, "ホン / もと");
        assert_eq!(summary.meanings, "book; origin");
        assert_eq!(summary.stroke_count.as_deref(), Some("4"));

        let kun_only = summarize_kanji('込', &[kanji('込', &[], &["こむ", "こめる"], &["crowded"])]);
        assert_eq!(kun_only.readings, "こむ, こめる");

        let missing = summarize_kanji('鬱', &[]);
        assert!(!missing.found);
        assert!(missing.readings.is_empty());
    }
}
