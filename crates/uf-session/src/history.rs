//! Conversion history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uf_catalog::Category;

/// One recorded conversion.
///
/// `source` and `result` are display descriptions ("[1.0, 2.0] Meter"
/// style) built by the service layer when the user records a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub category: Category,
    pub source: String,
    pub result: String,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(category: Category, source: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            category,
            source: source.into(),
            result: result.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Session-scoped state: the append-only conversion history.
///
/// Entries are never mutated or removed once added; there is no size cap
/// and no persistence across sessions.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the history.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// The full history, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.entries().is_empty());
    }

    #[test]
    fn record_preserves_insertion_order() {
        let mut session = Session::new();
        session.record(HistoryEntry::new(Category::Length, "[1.0] Meter", "[3.28084] Foot"));
        session.record(HistoryEntry::new(
            Category::Temperature,
            "[0.0] Celsius",
            "[32] Fahrenheit",
        ));

        assert_eq!(session.len(), 2);
        assert_eq!(session.entries()[0].category, Category::Length);
        assert_eq!(session.entries()[1].category, Category::Temperature);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let mut session = Session::new();
        let entry = HistoryEntry::new(Category::Time, "[60.0] Second", "[1] Minute");
        session.record(entry.clone());
        session.record(entry);
        assert_eq!(session.len(), 2);
    }
}
