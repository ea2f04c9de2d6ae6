use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-column sort. A direction only exists together with a column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted {
        column: String,
        direction: SortDirection,
    },
}

impl SortState {
    /// Next state when `column` is clicked: unsorted -> asc -> desc -> unsorted.
    /// Clicking a different column always starts at ascending.
    pub fn toggled(&self, column: &str) -> SortState {
        match self {
            SortState::Sorted {
                column: current,
                direction,
            } if current == column => match direction {
                SortDirection::Asc => SortState::Sorted {
                    column: column.to_string(),
                    direction: SortDirection::Desc,
                },
                SortDirection::Desc => SortState::Unsorted,
            },
            _ => SortState::Sorted {
                column: column.to_string(),
                direction: SortDirection::Asc,
            },
        }
    }

    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match self {
            SortState::Sorted {
                column: current,
                direction,
            } if current == column => Some(*direction),
            _ => None,
        }
    }

    /// `column,direction` as sent on the wire, `None` while unsorted.
    pub fn to_param(&self) -> Option<String> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted { column, direction } => Some(format!("{column},{direction}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub page_size: u32,
    pub search_term: String,
    pub sort: SortState,
}

impl QueryState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search_term: String::new(),
            sort: SortState::Unsorted,
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Parameters of one list request, detached from controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl From<&QueryState> for PageRequest {
    fn from(query: &QueryState) -> Self {
        let search = if query.search_term.is_empty() {
            None
        } else {
            Some(query.search_term.clone())
        };
        Self {
            page: query.page,
            page_size: query.page_size,
            search,
            sort: query.sort.to_param(),
        }
    }
}
