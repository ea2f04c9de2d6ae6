use serde_json::Value;

/// One row as returned by the endpoint.
pub type Record = Value;

/// Resolves a dotted path such as `data.list` or `user.address.city`.
///
/// Returns `None` as soon as a segment is missing, an intermediate value is
/// not a container, or a numeric segment is out of range for an array.
/// An empty path resolves to the value itself.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|idx| items.get(idx)),
        _ => None,
    })
}

/// Text shown for a cell. Null and missing values render as empty.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Non-negative count from a number or a numeric string.
pub fn as_count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Keys of a row in their document order. Non-object rows have none.
pub fn record_keys(record: &Record) -> Vec<String> {
    match record {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
