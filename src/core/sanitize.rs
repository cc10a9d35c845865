//! Turns the model's free-form response into a [`ChartRecord`].
//!
//! The response is untrusted input: the JSON object is routinely wrapped in
//! prose or code fences, numbers arrive as currency strings, and a column
//! the model calls numeric may contain junk in one row. Everything here is
//! about refusing to chart a value that was never a number.

use crate::domain::model::ChartRecord;
use crate::utils::error::{ChartError, Result};
use serde_json::{Map, Number, Value};

/// Sanitize a raw model response into a chart-ready record.
///
/// Returns the empty sentinel (not an error) when the response parses but
/// carries no usable rows; the caller decides whether that is fatal.
pub fn sanitize_response(raw: &str) -> Result<ChartRecord> {
    let window = extract_json_window(raw)?;
    let parsed: Value = serde_json::from_str(window).map_err(|e| {
        ChartError::MalformedResponse {
            reason: format!("invalid JSON in response: {}", e),
        }
    })?;
    Ok(shape_record(parsed))
}

/// The substring from the first `{` to the last `}` inclusive. The model
/// wraps its JSON in explanations and markdown fences often enough that
/// parsing the whole response is a losing game.
fn extract_json_window(raw: &str) -> Result<&str> {
    let start = raw.find('{');
    let end = raw.rfind('}');
    match (start, end) {
        (Some(s), Some(e)) if e >= s => Ok(&raw[s..=e]),
        _ => Err(ChartError::MalformedResponse {
            reason: "response did not contain a JSON object".to_string(),
        }),
    }
}

/// Validate the parsed shape and build the record. Any missing piece, or an
/// empty row set, yields the sentinel rather than an error.
fn shape_record(parsed: Value) -> ChartRecord {
    let Value::Object(obj) = parsed else {
        return ChartRecord::empty();
    };

    let rows: Vec<Map<String, Value>> = match obj.get("chartData").and_then(Value::as_array) {
        Some(rows) => rows
            .iter()
            .filter_map(|row| row.as_object().cloned())
            .collect(),
        None => return ChartRecord::empty(),
    };

    let Some(name_key) = obj.get("nameKey").and_then(Value::as_str) else {
        return ChartRecord::empty();
    };

    let candidates: Vec<&str> = match obj.get("dataKeys").and_then(Value::as_array) {
        Some(keys) => keys.iter().filter_map(Value::as_str).collect(),
        None => return ChartRecord::empty(),
    };

    if rows.is_empty() {
        return ChartRecord::empty();
    }

    let numeric_keys = filter_numeric_keys(&rows, name_key, &candidates);
    let rows = coerce_rows(rows, &numeric_keys);

    ChartRecord {
        rows,
        name_key: name_key.to_string(),
        numeric_keys,
    }
}

/// Keep a candidate only if it differs from the name key and every row's
/// value at it is numeric-or-empty. One bad row disqualifies the key, never
/// the row: a column the model mislabeled as numeric must not reach the
/// chart's metric selector.
fn filter_numeric_keys(
    rows: &[Map<String, Value>],
    name_key: &str,
    candidates: &[&str],
) -> Vec<String> {
    let mut retained: Vec<String> = Vec::new();
    for key in candidates {
        if *key == name_key || retained.iter().any(|k| k == key) {
            continue;
        }
        let all_numeric = rows.iter().all(|row| is_numeric_or_empty(row.get(*key)));
        if all_numeric {
            retained.push((*key).to_string());
        }
    }
    retained
}

fn is_numeric_or_empty(value: Option<&Value>) -> bool {
    match value {
        // Sparse data is fine; the chart skips the point.
        None | Some(Value::Null) => true,
        Some(Value::Number(_)) => true,
        Some(Value::String(s)) => s.is_empty() || parse_numeric(s).is_some(),
        _ => false,
    }
}

/// Rewrite every retained key's value in every row: empties become null,
/// numbers stay, currency strings become numbers. Other fields pass through
/// unchanged for the table view.
fn coerce_rows(mut rows: Vec<Map<String, Value>>, numeric_keys: &[String]) -> Vec<Map<String, Value>> {
    for row in &mut rows {
        for key in numeric_keys {
            let coerced = match row.get(key) {
                None | Some(Value::Null) => Value::Null,
                Some(Value::Number(n)) => Value::Number(n.clone()),
                Some(Value::String(s)) if s.is_empty() => Value::Null,
                Some(Value::String(s)) => match parse_numeric(s) {
                    Some(n) => number_value(n),
                    None => Value::Null,
                },
                // Should not survive filtering, but never chart a bool or
                // an object.
                Some(_) => Value::Null,
            };
            row.insert(key.clone(), coerced);
        }
    }
    rows
}

/// Parse a string as a finite number after stripping currency symbols and
/// thousands separators, e.g. `"$1,234.50"` -> `1234.5`.
fn parse_numeric(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let n: f64 = cleaned.parse().ok()?;
    n.is_finite().then_some(n)
}

/// Whole values stay integers so `"20"` sanitizes to `20`, not `20.0`.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
