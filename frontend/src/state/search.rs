use crate::notify::Notice;
use crate::services::ServiceError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

/// The header search box. One search may be in flight at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    phase: SearchPhase,
    in_flight: Option<String>,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Starts a search and returns the trimmed query to send. Blank queries
    /// and submits during a pending search change nothing.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_searching() {
            return None;
        }
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_string();
        self.phase = SearchPhase::Searching;
        self.in_flight = Some(query.clone());
        log::debug!("search started for {:?}", query);
        Some(query)
    }

    /// Settles the pending search. On failure the typed query is kept so the
    /// reader can retry.
    pub fn finish(&mut self, outcome: Result<(), ServiceError>) -> Option<Notice> {
        let query = self.in_flight.take()?;
        self.phase = SearchPhase::Idle;
        match outcome {
            Ok(()) => {
                self.query.clear();
                Some(Notice::info(format!("Searching for: {}", query)))
            }
            Err(e) => {
                log::warn!("search for {:?} failed: {}", query, e);
                Some(Notice::error("Search failed", e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::oneshot;
    use futures::executor::block_on;

    use super::*;

    fn with_query(query: &str) -> SearchState {
        let mut state = SearchState::default();
        state.set_query(query.to_string());
        state
    }

    #[test]
    fn blank_queries_are_ignored() {
        for query in ["", "   "] {
            let mut state = with_query(query);
            let before = state.clone();
            assert_eq!(state.submit(), None);
            assert_eq!(state, before);
            assert_eq!(state.finish(Ok(())), None);
        }
    }

    #[test]
    fn search_runs_then_returns_to_idle() {
        let mut state = with_query("  Everest ");
        assert_eq!(state.submit().as_deref(), Some("Everest"));
        assert_eq!(state.phase(), SearchPhase::Searching);

        let notice = state.finish(Ok(())).expect("notice");
        assert_eq!(notice.title, "Searching for: Everest");
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn only_one_search_in_flight() {
        let mut state = with_query("Everest");
        assert!(state.submit().is_some());
        state.set_query("Pokhara".to_string());
        assert_eq!(state.submit(), None);
        assert!(state.is_searching());
    }

    #[test]
    fn failure_keeps_the_query_and_unlocks() {
        let mut state = with_query("Everest");
        state.submit();
        let notice = state.finish(Err(ServiceError::Unavailable)).expect("notice");
        assert_eq!(notice.kind, crate::notify::NoticeKind::Error);
        assert_eq!(state.query(), "Everest");
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert!(state.submit().is_some());
    }

    #[test]
    fn completion_order_is_driven_by_the_service() {
        let (tx, rx) = oneshot::channel();
        let mut state = with_query("Everest");
        state.submit().expect("started");

        // Nothing settles until the service answers.
        assert!(state.is_searching());
        tx.send(Ok(())).expect("receiver alive");
        let outcome = block_on(rx).unwrap_or(Err(ServiceError::Unavailable));

        assert!(state.finish(outcome).is_some());
        assert!(!state.is_searching());
    }
}
