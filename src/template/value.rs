//! Template structure

use crate::error::Result;
use crate::record::RawRecord;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Pure function computing one destination field from `(raw, context)`
pub type Derivation =
    Arc<dyn for<'a> Fn(&RawRecord<'a>, &RawRecord<'a>) -> Result<Value> + Send + Sync>;

/// Value of one template entry
#[derive(Clone)]
pub enum TemplateValue {
    /// Always `null` in the destination
    Null,
    /// Read this key from the raw record, or emit it literally when absent
    Lookup(Value),
    /// Emitted as-is, never looked up
    Literal(Value),
    /// Computed from the raw and context records
    Derive(Derivation),
    /// Mapped recursively against the same records
    Nested(Template),
}

impl TemplateValue {
    pub fn derive<F>(f: F) -> Self
    where
        F: for<'a> Fn(&RawRecord<'a>, &RawRecord<'a>) -> Result<Value> + Send + Sync + 'static,
    {
        TemplateValue::Derive(Arc::new(f))
    }

    pub fn lookup(key: impl Into<Value>) -> Self {
        TemplateValue::Lookup(key.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        TemplateValue::Literal(value.into())
    }
}

impl fmt::Debug for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Null => f.write_str("Null"),
            TemplateValue::Lookup(key) => f.debug_tuple("Lookup").field(key).finish(),
            TemplateValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            TemplateValue::Derive(_) => f.write_str("Derive(..)"),
            TemplateValue::Nested(template) => f.debug_tuple("Nested").field(template).finish(),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(key: &str) -> Self {
        TemplateValue::Lookup(Value::from(key))
    }
}

impl From<i64> for TemplateValue {
    fn from(key: i64) -> Self {
        TemplateValue::Lookup(Value::from(key))
    }
}

impl From<f64> for TemplateValue {
    fn from(key: f64) -> Self {
        TemplateValue::Lookup(Value::from(key))
    }
}

impl From<Template> for TemplateValue {
    fn from(template: Template) -> Self {
        TemplateValue::Nested(template)
    }
}

/// Ordered description of a destination record
#[derive(Debug, Clone, Default)]
pub struct Template {
    fields: Vec<(String, TemplateValue)>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style
    pub fn field(mut self, name: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append a `null` field
    pub fn null(self, name: impl Into<String>) -> Self {
        self.field(name, TemplateValue::Null)
    }

    /// Append a derived field
    pub fn derive<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&RawRecord<'a>, &RawRecord<'a>) -> Result<Value> + Send + Sync + 'static,
    {
        self.field(name, TemplateValue::derive(f))
    }

    /// Build a template from a JSON object.
    ///
    /// `null` → [`TemplateValue::Null`], object → [`TemplateValue::Nested`],
    /// string/number → [`TemplateValue::Lookup`], anything else →
    /// [`TemplateValue::Literal`]. Returns `None` for non-objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let fields = object
            .iter()
            .map(|(name, v)| {
                let entry = match v {
                    Value::Null => TemplateValue::Null,
                    Value::Object(_) => {
                        TemplateValue::Nested(Template::from_json(v).unwrap_or_default())
                    }
                    Value::String(_) | Value::Number(_) => TemplateValue::Lookup(v.clone()),
                    Value::Bool(_) | Value::Array(_) => TemplateValue::Literal(v.clone()),
                };
                (name.clone(), entry)
            })
            .collect();
        Some(Template { fields })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Destination field names in order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }
}
