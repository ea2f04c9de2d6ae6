use serde_json::{Map, Value};

use crate::domain::entities::page::PageResult;
use crate::domain::entities::record::{as_count, lookup_path};
use crate::usecase::ports::source::FetchError;

/// Turns a response body into a page of rows.
pub trait ResponseMapper: Send + Sync {
    fn map(&self, body: &Value) -> Result<PageResult, FetchError>;
}

/// Where list data lives inside the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPaths {
    pub list: String,
    pub total: String,
    pub page: String,
    pub total_pages: String,
}

impl Default for FieldPaths {
    fn default() -> Self {
        Self {
            list: "data.list".to_string(),
            total: "data.total".to_string(),
            page: "data.page".to_string(),
            total_pages: "data.totalPages".to_string(),
        }
    }
}

impl ResponseMapper for FieldPaths {
    fn map(&self, body: &Value) -> Result<PageResult, FetchError> {
        let rows = match lookup_path(body, &self.list) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => {
                return Err(FetchError::Mapping(format!(
                    "`{}` is not a list (found {})",
                    self.list,
                    json_kind(other)
                )))
            }
        };
        let total_items = as_count(lookup_path(body, &self.total)).unwrap_or(0);
        let total_pages = as_count(lookup_path(body, &self.total_pages))
            .map(|pages| u32::try_from(pages).unwrap_or(u32::MAX))
            .unwrap_or(0);
        let reported_page = as_count(lookup_path(body, &self.page))
            .and_then(|page| u32::try_from(page).ok());

        Ok(PageResult {
            rows,
            total_items,
            total_pages,
            reported_page,
        })
    }
}

impl FieldPaths {
    /// Reshapes a body that is a bare JSON array into the configured layout,
    /// as a single page holding every item. Other bodies pass through.
    pub fn wrap_bare_list(&self, body: Value) -> Result<Value, FetchError> {
        let Value::Array(items) = body else {
            return Ok(body);
        };
        let count = items.len();
        let mut wrapped = Value::Object(Map::new());
        insert_path(&mut wrapped, &self.list, Value::Array(items))?;
        insert_path(&mut wrapped, &self.total, Value::from(count))?;
        insert_path(&mut wrapped, &self.total_pages, Value::from(u32::from(count > 0)))?;
        Ok(wrapped)
    }
}

fn insert_path(target: &mut Value, path: &str, value: Value) -> Result<(), FetchError> {
    let mut current = target;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let Value::Object(map) = current else {
            return Err(FetchError::Transform(format!(
                "cannot place a value at `{path}`"
            )));
        };
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return Ok(());
        }
        current = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    Err(FetchError::Transform("empty field path".to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
