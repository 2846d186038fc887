//! Read-only view over an externally supplied record
//!
//! Source records arrive as arbitrary JSON. Nothing about their shape is
//! guaranteed, so every access goes through [`RawRecord`], which reports an
//! absent key as `None` (or as [`MapperError::MissingKey`] through
//! [`RawRecord::require`]) instead of assuming it is there.

use crate::error::{MapperError, Result};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Field carrying an error reported by the source instead of a record
pub const ERROR_FIELD: &str = "Error";

/// Borrowed view of a raw or context record
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawRecord<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        RawRecord {
            fields: Some(fields),
        }
    }

    /// A record with no fields at all
    pub fn empty() -> Self {
        RawRecord { fields: None }
    }

    /// View a JSON value as a record.
    ///
    /// `null` means "no record" and yields `None`. Any other non-object
    /// value is viewed as a record with no fields.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(fields) => Some(RawRecord::new(fields)),
            _ => Some(RawRecord::empty()),
        }
    }

    /// Get a field. A field that is present with a `null` value is `Some(Null)`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|f| f.get(key))
    }

    /// Get a field, treating a present `null` the same as absent
    #[inline]
    pub fn get_non_null(&self, key: &str) -> Option<&'a Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    /// Get a field that a rule cannot work without
    pub fn require(&self, key: &str) -> Result<&'a Value> {
        self.get(key)
            .ok_or_else(|| MapperError::MissingKey(key.to_string()))
    }

    /// Require an integer field
    pub fn require_i64(&self, key: &str) -> Result<i64> {
        let value = self.require(key)?;
        as_integer(value).ok_or_else(|| MapperError::invalid(key, "an integer"))
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look a field up by a key that may be a string or a number.
    ///
    /// Keys compare by value: `1`, `1.0` and `"1"` all address field `"1"`.
    pub fn lookup(&self, key: &Value) -> Option<&'a Value> {
        let key = lookup_key(key)?;
        self.get(&key)
    }

    /// Walk nested objects, e.g. `["stats", "attack", "minimum"]`
    pub fn path(&self, keys: &[&str]) -> Option<&'a Value> {
        let (first, rest) = keys.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    /// Whether the source sent an error report rather than a record
    pub fn is_error_payload(&self) -> bool {
        self.contains(ERROR_FIELD)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.map_or(true, |f| f.is_empty())
    }
}

/// The field name a scalar addresses, if it can be used as a key at all
pub fn lookup_key(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Cow::Owned(i.to_string()))
            } else if let Some(u) = n.as_u64() {
                Some(Cow::Owned(u.to_string()))
            } else {
                let f = n.as_f64()?;
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    Some(Cow::Owned((f as i64).to_string()))
                } else {
                    Some(Cow::Owned(f.to_string()))
                }
            }
        }
        _ => None,
    }
}

/// Read an integer out of a number or a numeric string
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Python-style truthiness for the loosely typed flags the source sends
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
