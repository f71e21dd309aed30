//! Page navigation without I/O.
//!
//! The controller turns user intents into lookup requests and applies the
//! finished lookups to the history. Running the searches is left to the
//! caller, which hands each result back with the ticket it was issued under.
//! Only the newest ticket is honoured, so a slow lookup overtaken by another
//! click can never render or touch the history.

use crate::error::{Direction, HistoryError, OracleError};
use crate::history::{NavigationHistory, PageState};
use crate::link::LinkTarget;
use crate::preprocess::normalize_query;
use crate::types::{NavigationFlags, PageView, Presentation, UserIntent};

/// How a finished lookup is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Followed a link: append, dropping forward history
    Push,
    /// New top-level search: history restarts here
    Reset,
    /// Back/forward re-render: move the cursor to this entry once shown
    Replay { cursor: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub ticket: u64,
    pub state: PageState,
    pub mode: NavigationMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Run this lookup and report back through [`PageController::complete`]
    Lookup(LookupRequest),
    /// Nothing to fetch; refresh the navigation controls
    Unchanged(NavigationFlags),
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Show(Presentation),
    Failed {
        state: PageState,
        error: OracleError,
        navigation: NavigationFlags,
    },
    /// Superseded by a newer request
    Stale,
}

pub struct PageController {
    history: NavigationHistory,
    pending: Option<LookupRequest>,
    next_ticket: u64,
}

impl PageController {
    pub fn new(history: NavigationHistory) -> Self {
        Self {
            history,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn handle(&mut self, intent: UserIntent) -> Dispatch {
        tracing::debug!("Intent: {:?}", intent);
        match intent {
            UserIntent::KanjiSelected(character) => self.kanji_selected(character),
            UserIntent::WordSelected { word, reading } => self.word_selected(word, reading),
            UserIntent::SearchSubmitted(query) => self.search_submitted(&query),
            UserIntent::LinkActivated(href) => self.link_activated(&href),
            UserIntent::BackRequested => self.step(Direction::Back),
            UserIntent::ForwardRequested => self.step(Direction::Forward),
        }
    }

    pub fn kanji_selected(&mut self, character: char) -> Dispatch {
        self.request(PageState::Kanji { character }, NavigationMode::Push)
    }

    pub fn word_selected(&mut self, word: String, reading: String) -> Dispatch {
        if word.is_empty() {
            return Dispatch::Ignored;
        }
        self.request(PageState::Word { word, reading }, NavigationMode::Push)
    }

    /// Search bar submission. Replaces the whole history once it succeeds.
    pub fn search_submitted(&mut self, query: &str) -> Dispatch {
        let query = normalize_query(query);
        if query.is_empty() {
            return Dispatch::Ignored;
        }
        self.request(PageState::SearchResults { query }, NavigationMode::Reset)
    }

    /// Follow a link clicked inside the current page.
    pub fn link_activated(&mut self, href: &str) -> Dispatch {
        let on_results_page = matches!(
            self.history.current(),
            None | Some(PageState::SearchResults { .. })
        );

        let target = if on_results_page {
            Some(LinkTarget::from_results_link(href))
        } else {
            LinkTarget::parse(href)
        };

        match target {
            Some(LinkTarget::Kanji(character)) => self.kanji_selected(character),
            Some(LinkTarget::Word { word, reading }) => self.word_selected(word, reading),
            Some(LinkTarget::Search(text)) => {
                let query = normalize_query(&text);
                if query.is_empty() {
                    return Dispatch::Ignored;
                }
                self.request(PageState::SearchResults { query }, NavigationMode::Push)
            }
            None => {
                tracing::debug!("Ignoring unroutable link '{}'", href);
                Dispatch::Ignored
            }
        }
    }

    pub fn back_requested(&mut self) -> Dispatch {
        self.step(Direction::Back)
    }

    pub fn forward_requested(&mut self) -> Dispatch {
        self.step(Direction::Forward)
    }

    /// Back/forward. The cursor only moves when the replayed page arrives, so
    /// repeated presses walk on from the entry already requested.
    fn step(&mut self, direction: Direction) -> Dispatch {
        let from = match &self.pending {
            Some(LookupRequest {
                mode: NavigationMode::Replay { cursor },
                ..
            }) => Some(*cursor),
            _ => self.history.cursor(),
        };

        let target = from
            .ok_or(HistoryError::NoHistory { direction })
            .and_then(|from| self.history.peek(from, direction))
            .map(|(cursor, state)| (cursor, state.clone()));

        match target {
            Ok((cursor, state)) => self.request(state, NavigationMode::Replay { cursor }),
            Err(e) => {
                tracing::debug!("{}", e);
                Dispatch::Unchanged(self.navigation())
            }
        }
    }

    fn request(&mut self, state: PageState, mode: NavigationMode) -> Dispatch {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);

        if let Some(previous) = &self.pending {
            tracing::debug!("Superseding lookup #{} ({})", previous.ticket, previous.state);
        }

        let request = LookupRequest {
            ticket,
            state,
            mode,
        };
        self.pending = Some(request.clone());

        Dispatch::Lookup(request)
    }

    /// Apply a finished lookup.
    pub fn complete(&mut self, ticket: u64, outcome: Result<PageView, OracleError>) -> Completion {
        let request = match self.pending.take() {
            Some(request) if request.ticket == ticket => request,
            other => {
                tracing::debug!("Discarding stale lookup #{}", ticket);
                self.pending = other;
                return Completion::Stale;
            }
        };

        match outcome {
            Ok(page) => {
                match request.mode {
                    NavigationMode::Push => self.history.push(request.state),
                    NavigationMode::Reset => self.history.reset(request.state),
                    NavigationMode::Replay { cursor } => {
                        if self.history.seek(cursor).is_none() {
                            tracing::warn!("History entry {} vanished before replay", cursor);
                        }
                    }
                }

                Completion::Show(Presentation {
                    page,
                    navigation: self.navigation(),
                })
            }
            Err(error) => {
                tracing::warn!("Lookup for {} failed: {}", request.state, error);
                Completion::Failed {
                    state: request.state,
                    error,
                    navigation: self.navigation(),
                }
            }
        }
    }

    pub fn navigation(&self) -> NavigationFlags {
        NavigationFlags {
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        }
    }

    /// True while a back/forward re-render is in flight
    pub fn is_replaying(&self) -> bool {
        matches!(
            &self.pending,
            Some(LookupRequest {
                mode: NavigationMode::Replay { .. },
                ..
            })
        )
    }

    pub fn pending(&self) -> Option<&LookupRequest> {
        self.pending.as_ref()
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(NavigationHistory::new())
    }
}
