//! Search history and suggestion derivation.
//!
//! This module owns the append-only record of past searches and derives
//! suggestion candidates from it. The history is ordered most-recent-first,
//! is never deduplicated, and nothing ever removes an entry: repeating a
//! search prepends a second copy of the same query. Suggestions are a pure
//! function of the history and the current input, recomputed on every
//! keystroke rather than stored.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// One past search.
///
/// The timestamp is presentation metadata only; ordering comes from the
/// position in the history sequence, and suggestion matching uses the query
/// text alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub searched_at: i64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            searched_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns a human-readable string describing how long ago the search ran.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn time_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.searched_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Ordered record of past searches, most recent first.
///
/// Recording is O(1) via [`VecDeque::push_front`]; iteration order is the
/// prepend order. The sequence is unbounded and holds every search completed
/// in this session (plus, once hydrated, the searches persisted by earlier
/// sessions).
///
/// # Examples
///
/// ```
/// use zflick::domain::SearchHistory;
///
/// let mut history = SearchHistory::default();
/// history.record("dog");
/// history.record("car");
/// history.record("cat");
///
/// let matches = history.suggest("ca");
/// let queries: Vec<&str> = matches.iter().map(|e| e.query.as_str()).collect();
/// assert_eq!(queries, ["cat", "car"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: VecDeque<HistoryEntry>,
}

impl SearchHistory {
    /// Prepends a query to the history and returns the recorded entry.
    ///
    /// Called once per successful top-level search, including searches for
    /// the empty query and searches identical to an existing entry. The
    /// returned clone is what gets forwarded to the persistence worker.
    pub fn record(&mut self, query: impl Into<String>) -> HistoryEntry {
        let entry = HistoryEntry::new(query);
        self.entries.push_front(entry.clone());
        entry
    }

    /// Returns every entry whose query contains `input`, case-insensitively,
    /// preserving history order.
    ///
    /// An empty `input` matches everything, so clearing the search box shows
    /// the full history. Never mutates the history.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Vec<HistoryEntry> {
        let needle = input.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.query.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Installs entries loaded from the persistent store.
    ///
    /// `entries` arrive most-recent-first and are appended behind anything
    /// already recorded in this session, which stays newer by construction.
    pub fn hydrate(&mut self, entries: Vec<HistoryEntry>) {
        for entry in entries {
            self.entries.push_back(entry);
        }
    }

    /// Number of recorded searches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded or hydrated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queries(entries: &[HistoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.query.as_str()).collect()
    }

    #[test]
    fn empty_input_returns_full_history_most_recent_first() {
        let mut history = SearchHistory::default();
        history.record("first");
        history.record("second");
        history.record("third");

        let all = history.suggest("");
        assert_eq!(queries(&all), ["third", "second", "first"]);
    }

    #[test]
    fn suggestions_only_contain_matching_entries() {
        let mut history = SearchHistory::default();
        history.record("mountain");
        history.record("sea");
        history.record("Mountain lake");

        for entry in history.suggest("mount") {
            assert!(entry.query.to_lowercase().contains("mount"));
        }
        assert_eq!(history.suggest("volcano").len(), 0);
    }

    #[test]
    fn matching_is_case_insensitive_both_ways() {
        let mut history = SearchHistory::default();
        history.record("Golden Gate");

        assert_eq!(history.suggest("golden").len(), 1);
        assert_eq!(history.suggest("GATE").len(), 1);
    }

    #[test]
    fn cat_car_dog_scenario() {
        let mut history = SearchHistory::default();
        history.record("dog");
        history.record("car");
        history.record("cat");

        let matches = history.suggest("ca");
        assert_eq!(queries(&matches), ["cat", "car"]);
    }

    #[test]
    fn repeated_queries_are_never_deduplicated() {
        let mut history = SearchHistory::default();
        history.record("sunset");
        history.record("sunset");
        history.record("sunset");

        assert_eq!(history.len(), 3);
        assert_eq!(queries(&history.suggest("")), ["sunset", "sunset", "sunset"]);
    }

    #[test]
    fn suggest_does_not_mutate_history() {
        let mut history = SearchHistory::default();
        history.record("alpha");
        history.record("beta");

        let _ = history.suggest("a");
        let _ = history.suggest("");
        assert_eq!(history.len(), 2);
        assert_eq!(queries(&history.suggest("")), ["beta", "alpha"]);
    }

    #[test]
    fn hydrated_entries_sit_behind_session_entries() {
        let mut history = SearchHistory::default();
        history.record("this session");
        history.hydrate(vec![
            HistoryEntry::new("last session, newest"),
            HistoryEntry::new("last session, oldest"),
        ]);

        assert_eq!(
            queries(&history.suggest("")),
            ["this session", "last session, newest", "last session, oldest"]
        );
    }

    #[test]
    fn empty_query_can_be_recorded() {
        let mut history = SearchHistory::default();
        history.record("");
        assert_eq!(history.len(), 1);
        assert_eq!(history.suggest("").len(), 1);
    }

    #[test]
    fn time_ago_buckets() {
        let now = chrono::Utc::now().timestamp();
        let mut entry = HistoryEntry::new("q");
        assert_eq!(entry.time_ago(), "just now");

        entry.searched_at = now - 300;
        assert_eq!(entry.time_ago(), "5m ago");

        entry.searched_at = now - 7200;
        assert_eq!(entry.time_ago(), "2h ago");

        entry.searched_at = now - 172_800;
        assert_eq!(entry.time_ago(), "2d ago");
    }
}
