use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Direction, HistoryError};

/// One page the user has visited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageState {
    SearchResults { query: String },
    Kanji { character: char },
    Word { word: String, reading: String },
}

impl PageState {
    /// Text the page was looked up with
    pub fn query(&self) -> String {
        match self {
            PageState::SearchResults { query } => query.clone(),
            PageState::Kanji { character } => character.to_string(),
            PageState::Word { word, .. } => word.clone(),
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageState::SearchResults { query } => write!(f, "search '{query}'"),
            PageState::Kanji { character } => write!(f, "kanji {character}"),
            PageState::Word { word, reading } if reading.is_empty() => write!(f, "word {word}"),
            PageState::Word { word, reading } => write!(f, "word {word} ({reading})"),
        }
    }
}

/// Browser-style back/forward stack.
///
/// `cursor` is `Some` exactly when there are entries, and then always points
/// at one of them. Pushing while not at the tail drops the forward entries.
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: VecDeque<PageState>,
    cursor: Option<usize>,
    capacity: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that forgets its oldest page once `capacity` pages are stored.
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            cursor: None,
            capacity: Some(capacity.max(1)),
        }
    }

    pub fn push(&mut self, state: PageState) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push_back(state);

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                self.entries.pop_front();
            }
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn back(&mut self) -> Result<PageState, HistoryError> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Ok(self.entries[cursor - 1].clone())
            }
            _ => Err(HistoryError::NoHistory {
                direction: Direction::Back,
            }),
        }
    }

    pub fn forward(&mut self) -> Result<PageState, HistoryError> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                Ok(self.entries[cursor + 1].clone())
            }
            _ => Err(HistoryError::NoHistory {
                direction: Direction::Forward,
            }),
        }
    }

    /// The page one step from `from`, leaving the cursor where it is.
    pub fn peek(&self, from: usize, direction: Direction) -> Result<(usize, &PageState), HistoryError> {
        let target = match direction {
            Direction::Back => from.checked_sub(1),
            Direction::Forward => from.checked_add(1),
        };

        target
            .and_then(|index| self.entries.get(index).map(|state| (index, state)))
            .ok_or(HistoryError::NoHistory { direction })
    }

    /// Move the cursor to `index`. Out of range indexes leave it unchanged.
    pub fn seek(&mut self, index: usize) -> Option<&PageState> {
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = Some(index);
        self.entries.get(index)
    }

    pub fn current(&self) -> Option<&PageState> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }

    /// Start over from a fresh top-level search.
    pub fn reset(&mut self, initial: PageState) {
        self.entries.clear();
        self.entries.push_back(initial);
        self.cursor = Some(0);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &PageState> {
        self.entries.iter()
    }
}
