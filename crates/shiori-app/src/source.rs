use std::sync::Arc;

use shiori_core::dictionary::{Dictionary, DictionaryEntry, MatchMode};
use shiori_core::error::OracleError;

/// Async view of the dictionary backend
#[async_trait::async_trait]
pub trait LookupSource: Send + Sync {
    async fn search(&self, query: &str, mode: MatchMode) -> Result<Vec<DictionaryEntry>, OracleError>;
}

/// Runs a synchronous [`Dictionary`] on the blocking pool
pub struct BlockingSource<D> {
    dictionary: Arc<D>,
}

impl<D> BlockingSource<D> {
    pub fn new(dictionary: Arc<D>) -> Self {
        Self { dictionary }
    }
}

#[async_trait::async_trait]
impl<D: Dictionary + 'static> LookupSource for BlockingSource<D> {
    async fn search(&self, query: &str, mode: MatchMode) -> Result<Vec<DictionaryEntry>, OracleError> {
        let dictionary = self.dictionary.clone();
        let query = query.to_string();

        tokio::task::spawn_blocking(move || dictionary.search(&query, mode))
            .await
            .map_err(|e| OracleError::Unavailable(format!("search task failed: {e}")))?
    }
}
