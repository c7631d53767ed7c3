//! Per-feed screen state.
//!
//! One [`Screen`] owns a single feed's fetch-and-display lifecycle: the
//! item list, the loading flag, the stored error, and the list cursor.
//! The state is pure (no terminal types), so transitions are tested
//! directly.

use crate::app::Result;
use crate::domain::{FeedItem, FeedSource};

/// The one user-facing failure message; every load error collapses to it.
pub const LOAD_ERROR_MESSAGE: &str = "Couldn't load data.";

pub struct Screen {
    pub source: FeedSource,
    pub items: Vec<FeedItem>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Screen {
    pub fn new(source: FeedSource) -> Self {
        Self {
            source,
            items: Vec::new(),
            selected: 0,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Called when the screen becomes visible.
    ///
    /// Starts a fetch only when the screen holds no items and none is
    /// underway; returning to an already-populated screen fetches nothing.
    pub fn on_focus(&mut self) -> Option<u64> {
        if self.items.is_empty() && !self.loading {
            Some(self.begin_fetch())
        } else {
            None
        }
    }

    /// Manual refresh: always starts a fetch, superseding any in flight.
    pub fn refresh(&mut self) -> u64 {
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a completed fetch.
    ///
    /// A completion carrying a superseded generation is discarded without
    /// touching state. On success the item list is replaced wholesale; on
    /// failure the items stand and only the error is recorded.
    pub fn finish_fetch(&mut self, generation: u64, outcome: Result<Vec<FeedItem>>) {
        if generation != self.generation {
            return;
        }

        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
                if self.selected >= self.items.len() {
                    self.selected = self.items.len().saturating_sub(1);
                }
            }
            Err(_) => {
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// The spinner shows only while loading with nothing to display yet.
    pub fn shows_spinner(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    /// A reload with stale items still visible is surfaced in the status
    /// bar instead of a spinner.
    pub fn is_refreshing(&self) -> bool {
        self.loading && !self.items.is_empty()
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::TribuneError;

    fn item(id: &str, title: &str) -> FeedItem {
        FeedItem {
            id: id.into(),
            title: Some(title.into()),
            link: None,
            summary: None,
            author: None,
            published_at: None,
        }
    }

    fn network_error() -> TribuneError {
        TribuneError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    #[test]
    fn test_successful_fetch_stores_items_in_order() {
        let mut screen = Screen::new(FeedSource::News);
        let generation = screen.on_focus().expect("empty screen should fetch");
        assert!(screen.loading);

        screen.finish_fetch(generation, Ok(vec![item("a", "A"), item("b", "B")]));

        assert!(!screen.loading);
        assert_eq!(screen.items.len(), 2);
        assert_eq!(screen.items[0].id, "a");
        assert_eq!(screen.items[1].id, "b");
        assert_eq!(screen.error, None);
    }

    #[test]
    fn test_failed_fetch_records_fixed_message() {
        let mut screen = Screen::new(FeedSource::News);
        let generation = screen.on_focus().unwrap();

        screen.finish_fetch(generation, Err(network_error()));

        assert!(!screen.loading);
        assert_eq!(screen.error.as_deref(), Some("Couldn't load data."));
        assert!(screen.items.is_empty());
    }

    #[test]
    fn test_refresh_replaces_items_wholesale() {
        let mut screen = Screen::new(FeedSource::Articles);
        let generation = screen.on_focus().unwrap();
        screen.finish_fetch(generation, Ok(vec![item("a", "A"), item("b", "B")]));

        let generation = screen.refresh();
        assert!(screen.is_refreshing());
        screen.finish_fetch(generation, Ok(vec![item("c", "C")]));

        assert_eq!(screen.items.len(), 1);
        assert_eq!(screen.items[0].id, "c");
    }

    #[test]
    fn test_failed_refresh_keeps_stale_items() {
        let mut screen = Screen::new(FeedSource::Articles);
        let generation = screen.on_focus().unwrap();
        screen.finish_fetch(generation, Ok(vec![item("a", "A")]));

        let generation = screen.refresh();
        screen.finish_fetch(generation, Err(network_error()));

        assert_eq!(screen.items.len(), 1);
        assert_eq!(screen.error.as_deref(), Some("Couldn't load data."));
    }

    #[test]
    fn test_focus_fetches_once_while_empty() {
        let mut screen = Screen::new(FeedSource::News);

        assert!(screen.on_focus().is_some());
        // Focus again while the first fetch is still in flight.
        assert!(screen.on_focus().is_none());
    }

    #[test]
    fn test_focus_does_not_refetch_populated_screen() {
        let mut screen = Screen::new(FeedSource::News);
        let generation = screen.on_focus().unwrap();
        screen.finish_fetch(generation, Ok(vec![item("a", "A")]));

        assert!(screen.on_focus().is_none());
    }

    #[test]
    fn test_superseded_completion_is_discarded() {
        let mut screen = Screen::new(FeedSource::News);
        let first = screen.on_focus().unwrap();
        let second = screen.refresh();

        screen.finish_fetch(first, Ok(vec![item("stale", "Stale")]));
        assert!(screen.loading);
        assert!(screen.items.is_empty());

        screen.finish_fetch(second, Ok(vec![item("fresh", "Fresh")]));
        assert!(!screen.loading);
        assert_eq!(screen.items[0].id, "fresh");
    }

    #[test]
    fn test_spinner_only_while_loading_without_items() {
        let mut screen = Screen::new(FeedSource::News);
        assert!(!screen.shows_spinner());

        let generation = screen.on_focus().unwrap();
        assert!(screen.shows_spinner());
        assert!(!screen.is_refreshing());

        screen.finish_fetch(generation, Ok(vec![item("a", "A")]));
        assert!(!screen.shows_spinner());

        screen.refresh();
        assert!(!screen.shows_spinner());
        assert!(screen.is_refreshing());
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let mut screen = Screen::new(FeedSource::News);
        let generation = screen.on_focus().unwrap();
        screen.finish_fetch(generation, Err(network_error()));

        let generation = screen.refresh();
        screen.finish_fetch(generation, Ok(vec![item("a", "A")]));

        assert_eq!(screen.error, None);
        assert_eq!(screen.items.len(), 1);
    }

    #[test]
    fn test_cursor_clamps_to_shorter_list() {
        let mut screen = Screen::new(FeedSource::News);
        let generation = screen.on_focus().unwrap();
        screen.finish_fetch(
            generation,
            Ok(vec![item("a", "A"), item("b", "B"), item("c", "C")]),
        );
        screen.move_down();
        screen.move_down();
        assert_eq!(screen.selected, 2);

        let generation = screen.refresh();
        screen.finish_fetch(generation, Ok(vec![item("d", "D")]));

        assert_eq!(screen.selected, 0);
    }
}
