//! Python bindings
//!
//! Records cross the boundary as plain Python dicts/lists. They are moved
//! through the `json` module so that the mapper only ever sees
//! `serde_json::Value`.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use serde_json::Value;

use crate::config::{extract_options, Schema};
use crate::error::MapperError;
use crate::source::{convert_schema_batch, parse_record_id, MemorySource};
use crate::template::{map_value, Template};

// ============================================================================
// Helper Functions
// ============================================================================

/// Python object → JSON value
fn to_json(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    let text: String = obj
        .py()
        .import("json")?
        .call_method1("dumps", (obj,))?
        .extract()?;
    Ok(serde_json::from_str(&text).map_err(MapperError::from)?)
}

/// JSON value → Python object
fn to_py<'py>(py: Python<'py>, value: &Value) -> PyResult<Bound<'py, PyAny>> {
    let text = serde_json::to_string(value).map_err(MapperError::from)?;
    py.import("json")?.call_method1("loads", (text,))
}

/// Record id from a dict key; both string and integer keys are accepted
fn record_id(key: &Bound<'_, PyAny>) -> PyResult<u32> {
    if let Ok(id) = key.extract::<u32>() {
        return Ok(id);
    }
    let key_str: String = key.extract()?;
    Ok(parse_record_id(&key_str)?)
}

fn convert<'py>(
    py: Python<'py>,
    schema: Schema,
    record: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let record = to_json(record)?;
    match schema.convert(&record)? {
        Some(value) => to_py(py, &value),
        None => Ok(py.None().into_bound(py)),
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Map a monster's skill list into monster skill rows
#[pyfunction]
fn map_mob_skill<'py>(py: Python<'py>, mob: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    convert(py, Schema::MobSkill, mob)
}

/// Map a monster into a monster database entry
#[pyfunction]
fn map_mob<'py>(py: Python<'py>, mob: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    convert(py, Schema::Mob, mob)
}

/// Map an item into an item database entry
#[pyfunction]
fn map_item<'py>(py: Python<'py>, item: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    convert(py, Schema::Item, item)
}

/// Map a record through an ad-hoc template given as a dict
///
/// Strings and numbers in the template are lookup keys, dicts are nested
/// templates, `None` is always `None`.
#[pyfunction]
#[pyo3(signature = (template, raw, context=None))]
fn map_with_template<'py>(
    py: Python<'py>,
    template: &Bound<'py, PyAny>,
    raw: &Bound<'py, PyAny>,
    context: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyAny>> {
    let template = match Template::from_json(&to_json(template)?) {
        Some(t) => t,
        None => return Ok(py.None().into_bound(py)),
    };
    let raw = to_json(raw)?;
    let context = match context {
        Some(c) => to_json(c)?,
        None => Value::Null,
    };
    match map_value(&template, &raw, &context)? {
        Some(value) => to_py(py, &value),
        None => Ok(py.None().into_bound(py)),
    }
}

/// Convert a batch of already fetched records asynchronously
///
/// The conversion runs on Tokio's blocking pool so the asyncio event loop
/// stays responsive. Resolves to a JSON string mapping id → converted record.
///
/// # Arguments
/// * `schema` - `"item"`, `"mob"` or `"mob_skill"`
/// * `records` - Fetched records keyed by id
/// * `ids` - Ids to convert, in output order unless `options.sort` is set
/// * `options` - Optional dict or object with a `sort` flag
#[pyfunction]
#[pyo3(signature = (schema, records, ids, options=None))]
fn convert_batch_async<'py>(
    py: Python<'py>,
    schema: &str,
    records: &Bound<'py, PyDict>,
    ids: Vec<u32>,
    options: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyAny>> {
    let schema: Schema = schema.parse()?;
    let options = extract_options(options);

    let mut source = MemorySource::new();
    for (key, value) in records.iter() {
        source.insert(record_id(&key)?, to_json(&value)?);
    }

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let out = tokio::task::spawn_blocking(move || {
            let converted = convert_schema_batch(schema, &ids, &source, &options)?;
            let text = serde_json::to_string(&converted).map_err(MapperError::from)?;
            Ok::<String, PyErr>(text)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Conversion task panicked: {}",
                e
            ))
        })??;

        Ok(out)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn rathena_schema_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(map_mob_skill, m)?)?;
    m.add_function(wrap_pyfunction!(map_mob, m)?)?;
    m.add_function(wrap_pyfunction!(map_item, m)?)?;
    m.add_function(wrap_pyfunction!(map_with_template, m)?)?;
    m.add_function(wrap_pyfunction!(convert_batch_async, m)?)?;
    Ok(())
}
