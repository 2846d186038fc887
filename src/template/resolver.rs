//! Template resolution against raw records

use crate::error::Result;
use crate::record::RawRecord;
use crate::template::value::{Template, TemplateValue};
use serde_json::{Map, Value};

/// Map a raw record onto a template.
///
/// Returns `Ok(None)` when there is no template, or when there is no raw
/// record and the template has at least one field. An absent context is
/// treated as an empty record.
pub fn map_schema(
    template: Option<&Template>,
    raw: Option<RawRecord<'_>>,
    context: Option<RawRecord<'_>>,
) -> Result<Option<Value>> {
    let template = match template {
        Some(t) => t,
        None => return Ok(None),
    };
    let context = context.unwrap_or_default();

    match resolve_template(template, raw, &context)? {
        Some(fields) => Ok(Some(Value::Object(fields))),
        None => Ok(None),
    }
}

/// Convenience wrapper taking JSON values directly
pub fn map_value(template: &Template, raw: &Value, context: &Value) -> Result<Option<Value>> {
    map_schema(
        Some(template),
        RawRecord::from_value(raw),
        RawRecord::from_value(context),
    )
}

fn resolve_template(
    template: &Template,
    raw: Option<RawRecord<'_>>,
    context: &RawRecord<'_>,
) -> Result<Option<Map<String, Value>>> {
    let mut fields = Map::with_capacity(template.len());

    for (name, value) in template.iter() {
        let raw = match raw {
            Some(r) => r,
            None => return Ok(None),
        };
        fields.insert(name.to_string(), resolve_value(value, &raw, context)?);
    }

    Ok(Some(fields))
}

fn resolve_value(
    value: &TemplateValue,
    raw: &RawRecord<'_>,
    context: &RawRecord<'_>,
) -> Result<Value> {
    match value {
        TemplateValue::Null => Ok(Value::Null),
        TemplateValue::Nested(template) => {
            let nested = resolve_template(template, Some(*raw), context)?;
            Ok(nested.map(Value::Object).unwrap_or(Value::Null))
        }
        TemplateValue::Derive(f) => f(raw, context),
        TemplateValue::Lookup(key) => Ok(resolve_lookup(key, raw)),
        TemplateValue::Literal(value) => Ok(value.clone()),
    }
}

/// Resolve a key with one level of indirection, falling back to the key itself
fn resolve_lookup(key: &Value, raw: &RawRecord<'_>) -> Value {
    match raw.lookup(key) {
        Some(found) => match raw.lookup(found) {
            Some(indirect) => indirect.clone(),
            None => found.clone(),
        },
        None => key.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapperError;
    use serde_json::json;

    fn map(template: Option<&Template>, raw: &Value, context: &Value) -> Option<Value> {
        map_schema(
            template,
            RawRecord::from_value(raw),
            RawRecord::from_value(context),
        )
        .unwrap()
    }

    fn template(value: Value) -> Template {
        Template::from_json(&value).unwrap()
    }

    #[test]
    fn test_absent_template_or_record() {
        let empty = Template::new();
        let null = Value::Null;
        let obj = json!({});

        assert_eq!(map(None, &null, &null), None);
        assert_eq!(map(None, &obj, &null), None);
        assert_eq!(map(None, &null, &obj), None);
        assert_eq!(map(None, &obj, &obj), None);
        assert_eq!(map(Some(&empty), &null, &null), Some(json!({})));
        assert_eq!(map(Some(&empty), &obj, &null), Some(json!({})));
        assert_eq!(map(Some(&empty), &null, &obj), Some(json!({})));
        assert_eq!(map(Some(&empty), &obj, &obj), Some(json!({})));

        let t = template(json!({"x": "to_map"}));
        assert_eq!(map(Some(&t), &null, &obj), None);
    }

    #[test]
    fn test_null_entry() {
        let t = template(json!({"x": null}));
        assert_eq!(map(Some(&t), &json!({}), &json!({})), Some(json!({"x": null})));
    }

    #[test]
    fn test_lookup() {
        let t = template(json!({"x": "to_map"}));
        assert_eq!(
            map(Some(&t), &json!({"to_map": 0}), &json!({})),
            Some(json!({"x": 0}))
        );
        assert_eq!(
            map(Some(&t), &json!({"to_map": null}), &json!({})),
            Some(json!({"x": null}))
        );
        assert_eq!(
            map(Some(&t), &json!({"to_map": "y"}), &json!({})),
            Some(json!({"x": "y"}))
        );
    }

    #[test]
    fn test_lookup_indirection_is_single_level() {
        let t = template(json!({"x": "a"}));
        let raw = json!({"a": "b", "b": "c", "c": "d"});
        assert_eq!(map(Some(&t), &raw, &json!({})), Some(json!({"x": "c"})));
    }

    #[test]
    fn test_literal_passthrough() {
        let t = template(json!({"x": 1}));
        assert_eq!(
            map(Some(&t), &json!({"not_mapped": "value"}), &json!({})),
            Some(json!({"x": 1}))
        );

        let t = template(json!({"x": 1.0}));
        assert_eq!(
            map(Some(&t), &json!({"not_mapped": "value"}), &json!({})),
            Some(json!({"x": 1.0}))
        );

        let t = Template::new().field("flags", TemplateValue::literal(json!(["a", "b"])));
        assert_eq!(
            map(Some(&t), &json!({"a": 1}), &json!({})),
            Some(json!({"flags": ["a", "b"]}))
        );
    }

    #[test]
    fn test_numeric_key() {
        let t = template(json!({"x": 1}));
        assert_eq!(map(Some(&t), &json!({"1": "y"}), &json!({})), Some(json!({"x": "y"})));

        let t = template(json!({"1.0": 1}));
        assert_eq!(
            map(Some(&t), &json!({"1": "y"}), &json!({})),
            Some(json!({"1.0": "y"}))
        );
    }

    #[test]
    fn test_derivation() {
        let t = Template::new().derive("x", |_, _| Ok(Value::Null));
        assert_eq!(map(Some(&t), &json!({"y": "z"}), &json!({})), Some(json!({"x": null})));

        let t = Template::new().derive("owner", |_, ctx| Ok(ctx.require("id")?.clone()));
        assert_eq!(
            map(Some(&t), &json!({}), &json!({"id": 1002})),
            Some(json!({"owner": 1002}))
        );
    }

    #[test]
    fn test_derivation_error_propagates() {
        let t = Template::new().derive("owner", |_, ctx| Ok(ctx.require("id")?.clone()));
        let raw = json!({});
        let result = map_schema(Some(&t), RawRecord::from_value(&raw), None);
        assert!(matches!(result, Err(MapperError::MissingKey(ref k)) if k == "id"));
    }

    #[test]
    fn test_nested() {
        let t = template(json!({"x": {"y": "to_map"}}));
        assert_eq!(
            map(Some(&t), &json!({"to_map": "z"}), &json!({})),
            Some(json!({"x": {"y": "z"}}))
        );

        let t = template(json!({"x": {"y": "absent"}}));
        assert_eq!(
            map(Some(&t), &json!({}), &json!({})),
            Some(json!({"x": {"y": "absent"}}))
        );
    }

    #[test]
    fn test_field_order_follows_template() {
        let t = Template::new()
            .field("z", "a")
            .field("a", "b")
            .field("m", "c");
        let result = map(Some(&t), &json!({"c": 3, "b": 2, "a": 1}), &json!({})).unwrap();
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_inputs_untouched() {
        let t = template(json!({"x": "to_map", "y": {"z": "to_map"}}));
        let raw = json!({"to_map": "v"});
        let before = raw.clone();
        map(Some(&t), &raw, &json!({}));
        assert_eq!(raw, before);
    }
}
