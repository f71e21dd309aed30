use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use shiori_core::aggregate::{build_character_view, build_word_view, summarize_kanji};
use shiori_core::dictionary::{DictionaryEntry, MatchMode};
use shiori_core::error::OracleError;
use shiori_core::history::PageState;
use shiori_core::types::{AppEvent, PageView};

use crate::source::LookupSource;

/// Shared dependencies of the lookup tasks
#[derive(Clone)]
pub struct LookupContext {
    pub source: Arc<dyn LookupSource>,
    /// Where finished lookups are reported
    pub event_tx: AsyncSender<AppEvent>,
    pub search_mode: MatchMode,
    pub timeout: Duration,
}

impl LookupContext {
    async fn search(&self, query: &str, mode: MatchMode) -> Result<Vec<DictionaryEntry>, OracleError> {
        match tokio::time::timeout(self.timeout, self.source.search(query, mode)).await {
            Ok(result) => result,
            Err(_) => Err(OracleError::Timeout {
                query: query.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }

    /// Fetch and assemble everything the page for `state` shows
    pub async fn fetch_page(&self, state: &PageState) -> Result<PageView, OracleError> {
        match state {
            PageState::SearchResults { query } => {
                let entries = self.search(query, self.search_mode).await?;
                Ok(PageView::SearchResults {
                    query: query.clone(),
                    entries,
                })
            }
            PageState::Kanji { character } => {
                let query = character.to_string();
                let reference = self.search(&query, MatchMode::ExactCharacter).await?;
                let compounds = self.search(&query, MatchMode::Anywhere).await?;

                Ok(PageView::Kanji(build_character_view(
                    *character,
                    &reference,
                    &compounds,
                )))
            }
            PageState::Word { word, reading } => {
                let results = self.search(word, MatchMode::ExactCharacter).await?;
                let mut view = build_word_view(word, reading, &results);

                for character in view.kanji() {
                    let results = self
                        .search(&character.to_string(), MatchMode::ExactCharacter)
                        .await?;
                    view.breakdown.push(summarize_kanji(character, &results));
                }

                Ok(PageView::Word(view))
            }
        }
    }

    /// Run the lookup in the background and report it as `LookupFinished`
    pub fn spawn(&self, ticket: u64, state: PageState) {
        let ctx = self.clone();
        tokio::spawn(async move {
            let outcome = ctx.fetch_page(&state).await;
            if let Err(e) = ctx
                .event_tx
                .send(AppEvent::LookupFinished { ticket, outcome })
                .await
            {
                tracing::error!("Failed to report lookup #{}: {}", ticket, e);
            }
        });
    }
}
