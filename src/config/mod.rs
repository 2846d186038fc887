//! Conversion configuration
//!
//! Options arrive either as JSON/serde data or, with the `python` feature,
//! as Python dicts or objects.

use crate::error::{MapperError, Result};
use crate::{item, mob, mob_skill};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Destination schema a batch converts into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    Item,
    Mob,
    MobSkill,
}

impl Schema {
    /// Convert one source record into this schema
    pub fn convert(self, record: &Value) -> Result<Option<Value>> {
        match self {
            Schema::Item => item::map_item(record),
            Schema::Mob => mob::map_mob(record),
            Schema::MobSkill => mob_skill::map_mob_skill(record),
        }
    }

    /// Kind of source record the schema is built from
    pub fn source_prefix(self) -> &'static str {
        match self {
            Schema::Item => "item",
            Schema::Mob | Schema::MobSkill => "mob",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Schema::Item => "item",
            Schema::Mob => "mob",
            Schema::MobSkill => "mob_skill",
        })
    }
}

impl FromStr for Schema {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "item" => Ok(Schema::Item),
            "mob" => Ok(Schema::Mob),
            "mob_skill" | "mobskill" => Ok(Schema::MobSkill),
            other => Err(MapperError::invalid(other, "item, mob or mob_skill")),
        }
    }
}

/// Batch conversion options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConvertOptions {
    /// Emit records in ascending id order instead of request order
    #[serde(default)]
    pub sort: bool,
}

impl ConvertOptions {
    pub fn from_json(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(ConvertOptions::deserialize(value)?)
    }
}

#[cfg(feature = "python")]
mod python {
    use super::ConvertOptions;
    use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods};
    use pyo3::Bound;

    /// Helper to get optional attribute from either dict or object
    fn get_attr_opt<'py>(
        obj: &Bound<'py, pyo3::PyAny>,
        name: &str,
    ) -> Option<Bound<'py, pyo3::PyAny>> {
        if let Ok(dict) = obj.downcast::<PyDict>() {
            dict.get_item(name).ok().flatten()
        } else {
            obj.getattr(name).ok()
        }
    }

    /// Extract options from a Python dict or object; `None` gives the defaults
    pub fn extract_options(obj: Option<&Bound<'_, pyo3::PyAny>>) -> ConvertOptions {
        let obj = match obj {
            Some(o) if !o.is_none() => o,
            _ => return ConvertOptions::default(),
        };
        ConvertOptions {
            sort: get_attr_opt(obj, "sort")
                .and_then(|v| v.extract().ok())
                .unwrap_or(false),
        }
    }
}

#[cfg(feature = "python")]
pub use python::extract_options;
