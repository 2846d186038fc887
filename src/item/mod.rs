//! Item database conversion

use crate::error::{MapperError, Result};
use crate::record::{as_integer, is_truthy, RawRecord};
use crate::template::{map_schema, Template, TemplateValue};
use once_cell::sync::Lazy;
use serde_json::Value;

/// Source weight is in whole units, the emulator counts tenths
pub const WEIGHT_SCALE: i64 = 10;

/// Copy an optional field, `null` when absent
pub(crate) fn optional(key: &'static str) -> TemplateValue {
    TemplateValue::derive(move |raw, _| Ok(raw.get(key).cloned().unwrap_or(Value::Null)))
}

fn weight(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    match raw.get_non_null("weight").and_then(as_integer) {
        Some(w) => w
            .checked_mul(WEIGHT_SCALE)
            .map(Value::from)
            .ok_or_else(|| MapperError::invalid("weight", "a weight in range")),
        None => Ok(Value::from(0)),
    }
}

fn refineable(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(Value::Bool(raw.get("refinable").map_or(false, is_truthy)))
}

/// Destination layout of an item entry
pub static ITEM_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new()
        .field("Id", "id")
        .field("AegisName", "aegisName")
        .field("Name", "name")
        .field("Buy", optional("price"))
        .derive("Weight", weight)
        .field("Attack", optional("attack"))
        .field("MagicAttack", optional("matk"))
        .field("Defense", optional("defense"))
        .field("Range", optional("range"))
        .field("Slots", optional("slots"))
        .field("EquipLevelMin", optional("requiredLevel"))
        .field("EquipLevelMax", optional("limitLevel"))
        .derive("Refineable", refineable)
        .null("View")
        .null("Script")
});

/// Map a source item. Error payloads are returned unchanged.
pub fn map_item(item: &Value) -> Result<Option<Value>> {
    let record = match RawRecord::from_value(item) {
        Some(r) => r,
        None => return Ok(None),
    };
    if record.is_error_payload() {
        return Ok(Some(item.clone()));
    }
    map_schema(Some(&*ITEM_TEMPLATE), Some(record), None)
}
