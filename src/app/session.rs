//! Search session state machine.
//!
//! This module owns the pagination bookkeeping for the active query: the
//! result list, the page cursor, the more-available flag, and the single
//! in-flight fetch slot. It is the one place that decides whether a fetch may
//! start and what a settled fetch does to the state.
//!
//! # State machine
//!
//! ```text
//! IDLE --start_search--> LOADING(page=1)
//! LOADING(page=1) --success---------------> READY(more=true)   [list replaced,
//!                                                               even when empty]
//! LOADING(page=1) --failure---------------> READY(more=true)   [stale list kept]
//! READY(more=true) --request_next_page----> LOADING(page=n+1)
//! LOADING(page=n+1) --success(non-empty)--> READY(page=n+1, more=true)
//! LOADING(page=n+1) --success(empty)------> READY(page=n, more=false)
//! LOADING(page=n+1) --failure-------------> READY(page=n, more=true)
//! READY(more=false) --request_next_page---> [refused]
//! any state --start_search----------------> LOADING(page=1)
//! ```
//!
//! Every issued fetch is stamped with a monotonically increasing generation.
//! A new top-level search supersedes whatever occupies the slot; the
//! superseded response is recognized by its stale generation when it
//! eventually arrives and is discarded without touching the state.

use crate::domain::Photo;

/// What a fetch was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Top-level search: the settled page replaces the result list.
    Fresh,
    /// Pagination: the settled page appends to the result list.
    NextPage,
}

/// The single-slot record of an outstanding fetch.
///
/// Holds everything needed to apply the response when it settles: which
/// generation to accept, whether to replace or append, and which page the
/// cursor should advance to on a non-empty append.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchTicket {
    generation: u64,
    kind: FetchKind,
    page: u32,
}

/// A fetch the runtime shim should issue against the photo service.
///
/// Produced by [`SearchSession::start_search`] and
/// [`SearchSession::request_next_page`]; the generation travels with the HTTP
/// request (in the web request context) and comes back with the response so
/// the session can match it against the occupying ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: String,
    pub page: u32,
}

/// Outcome of applying a settled fetch to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A top-level search settled; the result list was replaced.
    ///
    /// Carries the query so the caller can record it to history.
    Replaced { query: String, count: usize },
    /// A pagination page settled with photos; the list grew and the page
    /// cursor advanced.
    Appended { count: usize },
    /// A pagination page settled empty; the session is exhausted.
    Exhausted,
    /// The fetch failed; only the slot was cleared.
    Failed { error: String },
    /// The response belonged to a superseded fetch and was discarded.
    Stale,
}

/// Pagination state for the active query.
///
/// # Examples
///
/// ```
/// use zflick::app::SearchSession;
/// use zflick::domain::Photo;
///
/// let mut session = SearchSession::new();
/// let request = session.start_search("red fox");
/// assert_eq!(request.page, 1);
/// assert!(session.loading());
///
/// let photos = vec![Photo::new("1", "65535", "aa", "fox")];
/// session.complete(request.generation, Ok(photos));
/// assert_eq!(session.photos().len(), 1);
/// assert!(!session.loading());
/// ```
#[derive(Debug, Clone)]
pub struct SearchSession {
    /// Query text of the most recent top-level search.
    query: String,

    /// Current result set, replaced on a fresh search, extended by pagination.
    photos: Vec<Photo>,

    /// Last successfully loaded page. Starts at 1 and is reset to 1 by every
    /// top-level search; advances only when a pagination page arrives with
    /// data, so the next page to try stays correct across failures.
    page: u32,

    /// False once a pagination page came back empty. An empty first page does
    /// not falsify it.
    has_more: bool,

    /// The single in-flight fetch slot. `Some` is the loading state.
    in_flight: Option<FetchTicket>,

    /// Generation stamp handed to the most recently issued fetch.
    last_generation: u64,

    /// True once the first top-level search has been issued. Pagination is
    /// refused before that.
    started: bool,
}

impl SearchSession {
    /// Creates an idle session with no query and an empty result list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            photos: Vec::new(),
            page: 1,
            has_more: true,
            in_flight: None,
            last_generation: 0,
            started: false,
        }
    }

    /// Begins a top-level search for `query`.
    ///
    /// Synchronously resets the page cursor to 1 and more-available to true,
    /// stamps a new generation, and occupies the fetch slot, superseding any
    /// outstanding fetch. The previous result list stays visible until the
    /// new page arrives; it is only replaced on success. An empty `query` is
    /// a valid search and is forwarded untouched.
    pub fn start_search(&mut self, query: impl Into<String>) -> FetchRequest {
        let query = query.into();
        let superseded = self.in_flight.as_ref().map(|ticket| ticket.generation);

        self.query = query.clone();
        self.page = 1;
        self.has_more = true;
        self.started = true;

        self.last_generation += 1;
        let generation = self.last_generation;
        self.in_flight = Some(FetchTicket {
            generation,
            kind: FetchKind::Fresh,
            page: 1,
        });

        tracing::debug!(
            query = %self.query,
            generation,
            superseded_generation = ?superseded,
            "starting top-level search"
        );

        FetchRequest {
            generation,
            query,
            page: 1,
        }
    }

    /// Requests the page after the last loaded one.
    ///
    /// Returns `None` when pagination must not start: before the first
    /// search, after the results are exhausted, or while a fetch is already
    /// outstanding. The returned request targets `page + 1`; the stored
    /// cursor moves only when that page settles with data.
    pub fn request_next_page(&mut self) -> Option<FetchRequest> {
        if !self.started || !self.has_more || self.in_flight.is_some() {
            tracing::trace!(
                started = self.started,
                has_more = self.has_more,
                loading = self.in_flight.is_some(),
                "pagination refused"
            );
            return None;
        }

        let page = self.page + 1;
        self.last_generation += 1;
        let generation = self.last_generation;
        self.in_flight = Some(FetchTicket {
            generation,
            kind: FetchKind::NextPage,
            page,
        });

        tracing::debug!(query = %self.query, page, generation, "requesting next page");

        Some(FetchRequest {
            generation,
            query: self.query.clone(),
            page,
        })
    }

    /// Applies a settled fetch.
    ///
    /// The response is matched against the occupying ticket by generation;
    /// anything else is stale (a superseded fetch finally coming back) and is
    /// discarded without touching the state or the slot. For the matching
    /// generation the slot is always cleared, success or failure.
    pub fn complete(
        &mut self,
        generation: u64,
        result: std::result::Result<Vec<Photo>, String>,
    ) -> FetchOutcome {
        let ticket = match self.in_flight.take() {
            Some(ticket) if ticket.generation == generation => ticket,
            other => {
                // Not ours: put the newer ticket back and drop the response.
                self.in_flight = other;
                tracing::debug!(generation, "discarding stale fetch response");
                return FetchOutcome::Stale;
            }
        };

        match (ticket.kind, result) {
            (FetchKind::Fresh, Ok(photos)) => {
                let count = photos.len();
                self.photos = photos;
                tracing::debug!(query = %self.query, count, "result list replaced");
                FetchOutcome::Replaced {
                    query: self.query.clone(),
                    count,
                }
            }
            (FetchKind::NextPage, Ok(photos)) => {
                if photos.is_empty() {
                    self.has_more = false;
                    tracing::debug!(query = %self.query, page = self.page, "results exhausted");
                    FetchOutcome::Exhausted
                } else {
                    let count = photos.len();
                    self.photos.extend(photos);
                    self.page = ticket.page;
                    tracing::debug!(
                        query = %self.query,
                        page = self.page,
                        count,
                        total = self.photos.len(),
                        "page appended"
                    );
                    FetchOutcome::Appended { count }
                }
            }
            (_, Err(error)) => {
                tracing::warn!(
                    query = %self.query,
                    page = ticket.page,
                    error = %error,
                    "photo fetch failed"
                );
                FetchOutcome::Failed { error }
            }
        }
    }

    /// Query text of the most recent top-level search.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current result set.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Last successfully loaded page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// False once a pagination page came back empty.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True while a fetch occupies the slot.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True once the first top-level search has been issued.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo::new(format!("{i}"), "65535", "sec", format!("photo {i}")))
            .collect()
    }

    #[test]
    fn fresh_search_replaces_results_and_keeps_page_one() {
        let mut session = SearchSession::new();
        let request = session.start_search("cats");
        assert_eq!(request.page, 1);
        assert_eq!(request.query, "cats");
        assert!(session.loading());

        let outcome = session.complete(request.generation, Ok(photos(3)));
        assert_eq!(
            outcome,
            FetchOutcome::Replaced {
                query: "cats".to_string(),
                count: 3
            }
        );
        assert_eq!(session.photos().len(), 3);
        assert_eq!(session.page(), 1);
        assert!(session.has_more());
        assert!(!session.loading());
    }

    #[test]
    fn empty_first_page_leaves_more_available_true() {
        let mut session = SearchSession::new();
        let request = session.start_search("qwzx");
        session.complete(request.generation, Ok(vec![]));

        assert!(session.photos().is_empty());
        assert_eq!(session.page(), 1);
        assert!(session.has_more());
    }

    #[test]
    fn pagination_appends_and_advances_page_by_one() {
        let mut session = SearchSession::new();
        let first = session.start_search("sea");
        session.complete(first.generation, Ok(photos(2)));

        let next = session.request_next_page().unwrap();
        assert_eq!(next.page, 2);
        assert!(session.loading());

        let outcome = session.complete(next.generation, Ok(photos(3)));
        assert_eq!(outcome, FetchOutcome::Appended { count: 3 });
        assert_eq!(session.photos().len(), 5);
        assert_eq!(session.page(), 2);
        assert!(session.has_more());
    }

    #[test]
    fn empty_pagination_page_exhausts_without_advancing() {
        let mut session = SearchSession::new();
        let first = session.start_search("fox");
        session.complete(first.generation, Ok(photos(1)));

        let next = session.request_next_page().unwrap();
        let outcome = session.complete(next.generation, Ok(vec![]));
        assert_eq!(outcome, FetchOutcome::Exhausted);
        assert_eq!(session.photos().len(), 1);
        assert_eq!(session.page(), 1);
        assert!(!session.has_more());

        // Exhausted sessions refuse further pagination.
        assert!(session.request_next_page().is_none());
    }

    #[test]
    fn pagination_refused_while_fetch_outstanding() {
        let mut session = SearchSession::new();
        let first = session.start_search("sea");
        assert!(session.request_next_page().is_none());

        session.complete(first.generation, Ok(photos(1)));
        let next = session.request_next_page();
        assert!(next.is_some());
        assert!(session.request_next_page().is_none());
    }

    #[test]
    fn pagination_refused_before_first_search() {
        let mut session = SearchSession::new();
        assert!(session.request_next_page().is_none());
    }

    #[test]
    fn new_search_supersedes_outstanding_pagination() {
        let mut session = SearchSession::new();
        let first = session.start_search("old");
        session.complete(first.generation, Ok(photos(4)));
        let stale = session.request_next_page().unwrap();

        // The reset happens synchronously, before anything settles.
        let fresh = session.start_search("new");
        assert_eq!(session.page(), 1);
        assert!(session.has_more());
        assert!(session.loading());
        assert_eq!(session.query(), "new");

        // The superseded pagination response is discarded wholesale.
        let outcome = session.complete(stale.generation, Ok(photos(9)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(session.photos().len(), 4);
        assert!(session.loading());

        // The superseding search still applies normally.
        let outcome = session.complete(fresh.generation, Ok(photos(2)));
        assert!(matches!(outcome, FetchOutcome::Replaced { count: 2, .. }));
        assert_eq!(session.photos().len(), 2);
        assert!(!session.loading());
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut session = SearchSession::new();
        let first = session.start_search("old");
        session.complete(first.generation, Ok(photos(1)));
        let stale = session.request_next_page().unwrap();
        let _fresh = session.start_search("new");

        let outcome = session.complete(stale.generation, Err("timeout".to_string()));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(session.loading());
    }

    #[test]
    fn late_response_after_everything_settled_is_stale() {
        let mut session = SearchSession::new();
        let first = session.start_search("q");
        let superseding = session.start_search("q2");
        session.complete(superseding.generation, Ok(photos(1)));

        let outcome = session.complete(first.generation, Ok(photos(5)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(session.photos().len(), 1);
        assert!(!session.loading());
    }

    #[test]
    fn pagination_failure_clears_slot_and_nothing_else() {
        let mut session = SearchSession::new();
        let first = session.start_search("sea");
        session.complete(first.generation, Ok(photos(2)));
        let next = session.request_next_page().unwrap();

        let outcome = session.complete(next.generation, Err("503".to_string()));
        assert!(matches!(outcome, FetchOutcome::Failed { .. }));
        assert_eq!(session.photos().len(), 2);
        assert_eq!(session.page(), 1);
        assert!(session.has_more());
        assert!(!session.loading());

        // The failed page can be retried: the cursor never advanced.
        let retry = session.request_next_page().unwrap();
        assert_eq!(retry.page, 2);
    }

    #[test]
    fn fresh_search_failure_keeps_previous_results() {
        let mut session = SearchSession::new();
        let first = session.start_search("sea");
        session.complete(first.generation, Ok(photos(2)));

        let second = session.start_search("land");
        session.complete(second.generation, Err("down".to_string()));

        assert_eq!(session.photos().len(), 2);
        assert_eq!(session.query(), "land");
        assert!(!session.loading());
    }

    #[test]
    fn empty_query_is_a_valid_search() {
        let mut session = SearchSession::new();
        let request = session.start_search("");
        assert_eq!(request.query, "");
        assert_eq!(request.page, 1);
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut session = SearchSession::new();
        let a = session.start_search("a");
        let b = session.start_search("b");
        session.complete(b.generation, Ok(photos(1)));
        let c = session.request_next_page().unwrap();

        assert!(a.generation < b.generation);
        assert!(b.generation < c.generation);
    }
}
