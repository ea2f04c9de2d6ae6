use crate::domain::entities::record::Record;

/// Rows and counters extracted from one response body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResult {
    pub rows: Vec<Record>,
    pub total_items: u64,
    pub total_pages: u32,
    /// Page number echoed by the server, if any. Informational only.
    pub reported_page: Option<u32>,
}

/// Outcome of the most recently completed fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultState {
    pub rows: Vec<Record>,
    pub total_items: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl ResultState {
    pub(crate) fn apply_page(&mut self, page: PageResult) {
        self.rows = page.rows;
        self.total_items = page.total_items;
        self.total_pages = page.total_pages;
        self.error = None;
    }

    pub(crate) fn apply_error(&mut self, message: String) {
        self.rows = Vec::new();
        self.total_items = 0;
        self.total_pages = 0;
        self.error = Some(message);
    }
}
