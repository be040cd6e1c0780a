use crate::cards::{CardQuery, CardRow};
use crate::error::{RatingError, Result};
use std::path::Path;
use tracing::debug;

/// Anything that can answer a card query, such as a hosted table client or a local export.
pub trait CardSource: Send + Sync {
    fn query(&self, query: &CardQuery) -> Result<Vec<CardRow>>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCardStore {
    rows: Vec<CardRow>,
}

impl InMemoryCardStore {
    pub fn new(rows: Vec<CardRow>) -> Self {
        Self { rows }
    }

    /// Reads a JSON array of card rows, as exported from the cards table.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RatingError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let rows: Vec<CardRow> = serde_json::from_str(&content)?;
        debug!(path = %path.display(), rows = rows.len(), "loaded card export");
        Ok(Self::new(rows))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CardSource for InMemoryCardStore {
    fn query(&self, query: &CardQuery) -> Result<Vec<CardRow>> {
        let mut rows = self
            .rows
            .iter()
            .filter(|row| query.matches(row))
            .cloned()
            .collect::<Vec<_>>();
        // sort_by is stable, so export order breaks remaining ties.
        rows.sort_by(|a, b| query.compare(a, b));
        rows.truncate(query.limit);
        Ok(rows)
    }
}
