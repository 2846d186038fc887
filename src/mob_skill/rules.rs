//! Derivation rules for monster skill fields
//!
//! Every rule receives the skill entry as the raw record and the owning
//! monster as the context record.

use crate::error::{MapperError, Result};
use crate::mob_skill::tables::*;
use crate::record::{as_integer, is_truthy, RawRecord};
use crate::skill::{self, NPC_EMOTION, UNKNOWN_SKILL};
use log::{debug, warn};
use serde_json::Value;

/// Number of extra value slots a skill row carries
pub const VALUE_SLOTS: usize = 5;

// ============================================================================
// Helper Functions
// ============================================================================

#[inline]
fn skill_id_of(raw: &RawRecord<'_>) -> Result<i64> {
    raw.require_i64("skillId")
}

fn send_type<'a>(raw: &RawRecord<'a>) -> Option<&'a str> {
    raw.get_non_null("sendType").and_then(Value::as_str)
}

fn condition_name<'a>(raw: &RawRecord<'a>) -> Option<&'a str> {
    raw.get_non_null("condition").and_then(Value::as_str)
}

/// Absent, `null`, `0` and `"0"` all mean "no condition"
fn has_no_condition(raw: &RawRecord<'_>) -> bool {
    match raw.get_non_null("condition") {
        None => true,
        Some(v) => as_integer(v) == Some(0),
    }
}

/// The owning monster's slave list; `null` counts as empty
fn slaves<'a>(ctx: &RawRecord<'a>) -> Result<&'a [Value]> {
    match ctx.require("slaves")? {
        Value::Null => Ok(&[]),
        Value::Array(list) => Ok(list.as_slice()),
        _ => Err(MapperError::invalid("slaves", "a list")),
    }
}

// ============================================================================
// Field Rules
// ============================================================================

/// Owning monster id
pub fn id(_raw: &RawRecord<'_>, ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(ctx.require("id")?.clone())
}

/// `"{monster name}@{skill name}"`
pub fn dummy_value(raw: &RawRecord<'_>, ctx: &RawRecord<'_>) -> Result<Value> {
    let name = match ctx.require("name")? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let skill_id = raw.require("skillId")?;
    let skill_name = match as_integer(skill_id).and_then(skill::skill_name) {
        Some(n) => n,
        None => {
            debug!("no name for skill id {}", skill_id);
            UNKNOWN_SKILL
        }
    };
    Ok(Value::from(format!("{}@{}", name, skill_name)))
}

/// Monster state the skill is used in
pub fn status(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let state = match raw.get_non_null("status") {
        None => return Ok(Value::from(ANY_STATUS)),
        Some(v) => v,
    };
    match state.as_str().and_then(map_status) {
        Some(mapped) => Ok(Value::from(mapped)),
        None => {
            warn!("unrecognized monster state {}", state);
            Ok(Value::Null)
        }
    }
}

pub fn skill_id(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(raw.require("skillId")?.clone())
}

/// Skill level; summon skills use the slave count instead
pub fn level(raw: &RawRecord<'_>, ctx: &RawRecord<'_>) -> Result<Value> {
    if skill::is_summon_skill(skill_id_of(raw)?) {
        return Ok(Value::from(slaves(ctx)?.len()));
    }
    Ok(raw.require("level")?.clone())
}

/// Source chance is in tenths of a percent, destination in hundredths.
/// Fractional chances are scaled as floats.
pub fn chance(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let value = raw.require("chance")?;
    if let Some(chance) = as_integer(value) {
        return chance
            .checked_mul(10)
            .map(Value::from)
            .ok_or_else(|| MapperError::invalid("chance", "a chance in range"));
    }
    value
        .as_f64()
        .map(|f| f * 10.0)
        .filter(|f| f.is_finite())
        .map(Value::from)
        .ok_or_else(|| MapperError::invalid("chance", "a number"))
}

pub fn casttime(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(raw.require("casttime")?.clone())
}

pub fn delay(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(raw.require("delay")?.clone())
}

pub fn interruptable(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let flag = if is_truthy(raw.require("interruptable")?) {
        "yes"
    } else {
        "no"
    };
    Ok(Value::from(flag))
}

pub fn target(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let condition = condition_name(raw);
    if condition.is_some_and(is_friend_condition) {
        return Ok(Value::from("friend"));
    }
    if condition == Some(IF_CONDITION) || skill::is_self_skill(skill_id_of(raw)?) {
        return Ok(Value::from("self"));
    }
    Ok(Value::from("target"))
}

/// Trigger condition; values without a known keyword pass through unchanged
pub fn condition(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    if has_no_condition(raw) {
        return Ok(Value::from(ALWAYS));
    }
    let value = raw.get_non_null("condition").cloned().unwrap_or(Value::Null);
    match value.as_str().and_then(map_condition) {
        Some(mapped) => Ok(Value::from(mapped)),
        None => {
            debug!("passing unmapped condition {} through", value);
            Ok(value)
        }
    }
}

pub fn condition_value(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let condition = condition_name(raw);
    if condition == Some(IF_HIDING) {
        return Ok(Value::from("hiding"));
    }

    let value = raw.get_non_null("conditionValue");
    if condition == Some(IF_SKILLUSE) {
        return Ok(match value {
            Some(Value::String(name)) => skill::skill_id(name)
                .map(Value::from)
                .unwrap_or_else(|| Value::from(name.as_str())),
            Some(other) => other.clone(),
            None => Value::from(0),
        });
    }

    if let Some(state) = value.and_then(Value::as_str).and_then(map_body_state) {
        return Ok(Value::from(state));
    }
    if has_no_condition(raw) {
        return Ok(Value::from(0));
    }
    Ok(value.cloned().unwrap_or_else(|| Value::from(0)))
}

/// Extra value `slot` (1-based) of an emoticon skill.
///
/// Summon skills fan out one slot per slave, holding the slave's 1-based
/// position. `NPC_EMOTION` carries its emote in the first slot.
pub fn value_slot(raw: &RawRecord<'_>, ctx: &RawRecord<'_>, slot: usize) -> Result<Value> {
    if send_type(raw) != Some(SEND_EMOTICON) {
        return Ok(Value::Null);
    }
    let skill_id = skill_id_of(raw)?;
    if skill::is_summon_skill(skill_id) {
        let count = slaves(ctx)?.len();
        return Ok(if (1..=count).contains(&slot) {
            Value::from(slot)
        } else {
            Value::Null
        });
    }
    if slot == 1 && skill_id == NPC_EMOTION {
        return Ok(raw.require("sendValue")?.clone());
    }
    Ok(Value::Null)
}

/// Emote shown when the skill is used, unless it already sits in a value slot
pub fn send_emote(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    if send_type(raw) != Some(SEND_EMOTICON) || skill_id_of(raw)? == NPC_EMOTION {
        return Ok(Value::Null);
    }
    Ok(raw.require("sendValue")?.clone())
}

pub fn send_chat(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    if send_type(raw) != Some(SEND_CHAT) {
        return Ok(Value::Null);
    }
    Ok(raw.require("sendValue")?.clone())
}
