use tracing::{debug, info, warn};

use crate::domain::entities::page::{PageResult, ResultState};
use crate::domain::entities::query::{PageRequest, QueryState};
use crate::usecase::ports::source::FetchError;

/// A request the controller wants executed. Only the newest ticket may
/// write its outcome back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: PageRequest,
}

/// Owns query parameters and the last fetch result.
///
/// Every mutator that changes the query returns the ticket for the single
/// fetch that change requires; `None` means nothing changed and nothing
/// needs to be requested. The controller never performs I/O itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchController {
    query: QueryState,
    result: ResultState,
    generation: u64,
}

impl FetchController {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: QueryState::new(page_size),
            result: ResultState::default(),
            generation: 0,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    pub fn current_page(&self) -> u32 {
        self.query.page
    }

    /// Ticket for the current query, used on mount and for manual reloads.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> Option<FetchTicket> {
        let term = term.into();
        if term == self.query.search_term && self.query.page == 1 {
            return None;
        }
        self.query.search_term = term;
        self.query.page = 1;
        Some(self.issue())
    }

    /// Accepts only pages in `1..=total_pages`; anything else is ignored.
    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        if page < 1 || page > self.result.total_pages {
            debug!(page, total_pages = self.result.total_pages, "ignoring out-of-range page");
            return None;
        }
        if page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.issue())
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Option<FetchTicket> {
        if page_size == 0 {
            return None;
        }
        if page_size == self.query.page_size && self.query.page == 1 {
            return None;
        }
        self.query.page_size = page_size;
        self.query.page = 1;
        Some(self.issue())
    }

    pub fn toggle_sort(&mut self, column: &str) -> Option<FetchTicket> {
        self.query.sort = self.query.sort.toggled(column);
        self.query.page = 1;
        Some(self.issue())
    }

    /// Applies a finished fetch. Returns `false` when a newer ticket has
    /// been issued since, in which case the outcome is discarded.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PageResult, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                latest = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }
        match outcome {
            Ok(page) => {
                info!(
                    rows = page.rows.len(),
                    total_items = page.total_items,
                    total_pages = page.total_pages,
                    "page loaded"
                );
                self.result.apply_page(page);
            }
            Err(err) => {
                warn!(error = %err, "error fetching data");
                self.result.apply_error(err.to_string());
            }
        }
        self.result.loading = false;
        true
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        self.result.loading = true;
        self.result.error = None;
        FetchTicket {
            generation: self.generation,
            request: PageRequest::from(&self.query),
        }
    }
}

impl Default for FetchController {
    fn default() -> Self {
        Self::new(10)
    }
}
