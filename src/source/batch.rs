//! Multi-id conversion

use crate::config::{ConvertOptions, Schema};
use crate::error::{MapperError, Result};
use crate::source::RecordSource;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static ID_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("valid id separator pattern"));

/// Parse one record id, as found in a list or a string-keyed record map
pub fn parse_record_id(token: &str) -> Result<u32> {
    token
        .trim()
        .parse::<u32>()
        .map_err(|_| MapperError::InvalidId(token.to_string()))
}

/// Parse a whitespace or comma separated id list
pub fn parse_ids(text: &str) -> Result<Vec<u32>> {
    let ids = ID_SEPARATOR
        .split(text.trim())
        .filter(|token| !token.is_empty())
        .map(parse_record_id)
        .collect::<Result<Vec<u32>>>()?;

    if ids.is_empty() {
        return Err(MapperError::NoIds);
    }
    Ok(ids)
}

/// Fetch and convert every id, keyed by id in request (or sorted) order.
///
/// A fetch or mapping failure aborts the whole batch.
pub fn convert_batch<S, F>(
    ids: &[u32],
    source: &S,
    convert: F,
    options: &ConvertOptions,
) -> Result<Map<String, Value>>
where
    S: RecordSource + ?Sized,
    F: Fn(&Value) -> Result<Option<Value>>,
{
    let mut ordered = ids.to_vec();
    if options.sort {
        ordered.sort_unstable();
    }

    let mut out = Map::with_capacity(ordered.len());
    for id in ordered {
        let record = source.fetch(id)?;
        let converted = convert(&record)?;
        out.insert(id.to_string(), converted.unwrap_or(Value::Null));
    }

    debug!("converted {} records", out.len());
    Ok(out)
}

/// [`convert_batch`] with one of the built-in schemas
pub fn convert_schema_batch<S>(
    schema: Schema,
    ids: &[u32],
    source: &S,
    options: &ConvertOptions,
) -> Result<Map<String, Value>>
where
    S: RecordSource + ?Sized,
{
    convert_batch(ids, source, |record| schema.convert(record), options)
}
