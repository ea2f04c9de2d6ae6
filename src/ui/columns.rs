use std::fmt;
use std::sync::Arc;

use chrono::DateTime;

use crate::domain::entities::query::{SortDirection, SortState};
use crate::domain::entities::record::{display_value, lookup_path, record_keys, Record};

/// Custom cell text for one column.
#[derive(Clone)]
pub struct CellRenderer(Arc<dyn Fn(&Record) -> String + Send + Sync>);

impl CellRenderer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    pub fn render(&self, record: &Record) -> String {
        (*self.0)(record)
    }
}

impl PartialEq for CellRenderer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellRenderer(..)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Dotted path into the row, also the sort key sent to the server.
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub render: Option<CellRenderer>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            render: None,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn with_render(mut self, render: CellRenderer) -> Self {
        self.render = Some(render);
        self
    }

    /// Sort key a header click toggles, or `None` when clicks are ignored.
    pub fn sort_target(&self) -> Option<&str> {
        self.sortable.then_some(self.key.as_str())
    }

    pub fn sort_indicator(&self, sort: &SortState) -> &'static str {
        if !self.sortable {
            return "";
        }
        match sort.direction_for(&self.key) {
            None => "↕",
            Some(SortDirection::Asc) => "▲",
            Some(SortDirection::Desc) => "▼",
        }
    }

    pub fn cell_text(&self, record: &Record) -> String {
        match &self.render {
            Some(render) => render.render(record),
            None => display_value(lookup_path(record, &self.key)),
        }
    }
}

/// `createdAt` -> `Created At`.
pub fn format_header(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() && !spaced.is_empty() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Caller columns when given, otherwise one sortable column per key of the
/// first row. No rows and no caller columns means no columns.
pub fn resolve_columns(configured: &[ColumnDescriptor], rows: &[Record]) -> Vec<ColumnDescriptor> {
    if !configured.is_empty() {
        return configured.to_vec();
    }
    rows.first()
        .map(|first| {
            record_keys(first)
                .into_iter()
                .map(|key| {
                    let header = format_header(&key);
                    ColumnDescriptor::new(key, header)
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Row paths used to lay out a grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFields {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub date: Option<String>,
    pub date_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridCard {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub date: String,
    pub date_info: String,
}

impl GridFields {
    pub fn card(&self, record: &Record) -> GridCard {
        let text = |path: &Option<String>| {
            path.as_deref()
                .map(|path| display_value(lookup_path(record, path)))
                .unwrap_or_default()
        };
        GridCard {
            id: display_value(lookup_path(record, &self.id)),
            title: display_value(lookup_path(record, &self.title)),
            subtitle: text(&self.subtitle),
            body: text(&self.body),
            date: format_date(&text(&self.date)),
            date_info: text(&self.date_info),
        }
    }
}

/// RFC 3339 timestamps shown as `YYYY-MM-DD`; anything else unchanged.
pub fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// React-style row key: the `id` field when present, else the index.
pub fn row_key(record: &Record, index: usize) -> String {
    match lookup_path(record, "id") {
        Some(id) if !id.is_null() => display_value(Some(id)),
        _ => index.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_header_splits_camel_case() {
        assert_eq!(format_header("createdAt"), "Created At");
        assert_eq!(format_header("id"), "Id");
        assert_eq!(format_header("clientIdNumber"), "Client Id Number");
        assert_eq!(format_header(""), "");
    }

    #[test]
    fn resolve_columns_prefers_configured() {
        let configured = vec![ColumnDescriptor::new("title", "Title")];
        let rows = vec![json!({"id": 1, "title": "a"})];
        assert_eq!(resolve_columns(&configured, &rows), configured);
    }

    #[test]
    fn resolve_columns_derives_from_first_row_in_key_order() {
        let rows = vec![json!({"id": 1, "createdAt": "2024-01-01", "title": "a"})];
        let columns = resolve_columns(&[], &rows);
        let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["Id", "Created At", "Title"]);
        assert!(columns.iter().all(|c| c.sortable));
    }

    #[test]
    fn resolve_columns_without_data_is_empty() {
        assert!(resolve_columns(&[], &[]).is_empty());
    }

    #[test]
    fn unsortable_header_has_no_target_or_indicator() {
        let column = ColumnDescriptor::new("location", "Location").unsortable();
        let sort = SortState::Unsorted.toggled("location");
        assert_eq!(column.sort_target(), None);
        assert_eq!(column.sort_indicator(&sort), "");
    }

    #[test]
    fn sortable_header_targets_its_key_and_shows_direction() {
        let column = ColumnDescriptor::new("title", "Title");
        assert_eq!(column.sort_target(), Some("title"));

        let sort = SortState::Unsorted;
        assert_eq!(column.sort_indicator(&sort), "↕");
        let sort = sort.toggled("title");
        assert_eq!(column.sort_indicator(&sort), "▲");
        let sort = sort.toggled("title");
        assert_eq!(column.sort_indicator(&sort), "▼");
        assert_eq!(column.sort_indicator(&sort.toggled("id")), "↕");
    }

    #[test]
    fn cell_text_resolves_nested_paths_and_missing_values() {
        let row = json!({"user": {"name": "Ada"}, "score": null});
        assert_eq!(ColumnDescriptor::new("user.name", "User").cell_text(&row), "Ada");
        assert_eq!(ColumnDescriptor::new("user.email", "Email").cell_text(&row), "");
        assert_eq!(ColumnDescriptor::new("score", "Score").cell_text(&row), "");
    }

    #[test]
    fn cell_text_uses_custom_renderer() {
        let column = ColumnDescriptor::new("price", "Price").with_render(CellRenderer::new(|row| {
            format!("${}", display_value(lookup_path(row, "price")))
        }));
        assert_eq!(column.cell_text(&json!({"price": 12})), "$12");
    }

    #[test]
    fn grid_card_formats_date_and_tolerates_missing_fields() {
        let fields = GridFields {
            id: "id".to_string(),
            title: "title".to_string(),
            subtitle: Some("jobDetails".to_string()),
            body: None,
            date: Some("createdAt".to_string()),
            date_info: Some("createdBy".to_string()),
        };
        let card = fields.card(&json!({
            "id": 3,
            "title": "Engineer",
            "createdAt": "2024-05-06T10:00:00Z",
        }));
        assert_eq!(card.id, "3");
        assert_eq!(card.title, "Engineer");
        assert_eq!(card.subtitle, "");
        assert_eq!(card.date, "2024-05-06");
        assert_eq!(card.date_info, "");
    }

    #[test]
    fn format_date_keeps_unparseable_text() {
        assert_eq!(format_date("last week"), "last week");
    }

    #[test]
    fn row_key_falls_back_to_index() {
        assert_eq!(row_key(&json!({"id": 9}), 0), "9");
        assert_eq!(row_key(&json!({"name": "x"}), 4), "4");
    }
}
