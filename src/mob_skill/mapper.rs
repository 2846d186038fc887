//! Monster skill list mapping

use crate::error::{MapperError, Result};
use crate::mob_skill::rules;
use crate::record::RawRecord;
use crate::template::{map_schema, Template};
use log::debug;
use once_cell::sync::Lazy;
use serde_json::Value;

/// Destination layout of one monster skill row
pub static MOB_SKILL_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new()
        .derive("id", rules::id)
        .derive("dummy_value", rules::dummy_value)
        .derive("status", rules::status)
        .derive("skill_id", rules::skill_id)
        .derive("level", rules::level)
        .derive("chance", rules::chance)
        .derive("casttime", rules::casttime)
        .derive("delay", rules::delay)
        .derive("interruptable", rules::interruptable)
        .derive("target", rules::target)
        .derive("condition", rules::condition)
        .derive("condition_value", rules::condition_value)
        .derive("val_1", |raw, ctx| rules::value_slot(raw, ctx, 1))
        .derive("val_2", |raw, ctx| rules::value_slot(raw, ctx, 2))
        .derive("val_3", |raw, ctx| rules::value_slot(raw, ctx, 3))
        .derive("val_4", |raw, ctx| rules::value_slot(raw, ctx, 4))
        .derive("val_5", |raw, ctx| rules::value_slot(raw, ctx, 5))
        .derive("send_emote", rules::send_emote)
        .derive("send_chat", rules::send_chat)
});

/// Map a single skill entry of `mob`
pub fn map_skill(skill: &Value, mob: &Value) -> Result<Option<Value>> {
    map_schema(
        Some(&*MOB_SKILL_TEMPLATE),
        RawRecord::from_value(skill),
        RawRecord::from_value(mob),
    )
}

/// Map every skill of a monster, in source order.
///
/// A `null` monster maps to `None`; an error payload is returned unchanged.
pub fn map_mob_skill(mob: &Value) -> Result<Option<Value>> {
    let record = match RawRecord::from_value(mob) {
        Some(r) => r,
        None => return Ok(None),
    };
    if record.is_error_payload() {
        debug!("passing error payload through: {}", mob);
        return Ok(Some(mob.clone()));
    }

    let skills = match record.require("skill")? {
        Value::Null => return Ok(Some(Value::Array(Vec::new()))),
        Value::Array(list) => list,
        _ => return Err(MapperError::invalid("skill", "a list")),
    };

    let mut rows = Vec::with_capacity(skills.len());
    for skill in skills {
        let row = map_schema(
            Some(&*MOB_SKILL_TEMPLATE),
            RawRecord::from_value(skill),
            Some(record),
        )?;
        rows.push(row.unwrap_or(Value::Null));
    }

    debug!("mapped {} skills of mob {:?}", rows.len(), record.get("id"));
    Ok(Some(Value::Array(rows)))
}
