//! Monster database conversion
//!
//! Most monster attributes live in the source's nested `stats` block, so the
//! template is mostly derivations reading from there.

use crate::error::Result;
use crate::record::{as_integer, RawRecord};
use crate::template::{map_schema, Template, TemplateValue};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

pub const SIZES: [&str; 3] = ["Small", "Medium", "Large"];

pub const RACES: [&str; 10] = [
    "Formless",
    "Undead",
    "Brute",
    "Plant",
    "Insect",
    "Fish",
    "Demon",
    "Demihuman",
    "Angel",
    "Dragon",
];

pub const ELEMENTS: [&str; 10] = [
    "Neutral", "Water", "Earth", "Fire", "Wind", "Poison", "Holy", "Dark", "Ghost", "Undead",
];

/// Packed element code: `level * ELEMENT_STRIDE + element`
pub const ELEMENT_STRIDE: i64 = 20;

static AI_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^MONSTER_TYPE_(\d+)$").expect("valid AI type pattern"));

/// Copy a value from the `stats` block, `null` when absent
fn stat(path: &'static [&'static str]) -> TemplateValue {
    TemplateValue::derive(move |raw, _| {
        let mut full = Vec::with_capacity(path.len() + 1);
        full.push("stats");
        full.extend_from_slice(path);
        Ok(raw.path(&full).cloned().unwrap_or(Value::Null))
    })
}

fn stat_code(raw: &RawRecord<'_>, name: &str) -> Option<i64> {
    raw.path(&["stats", name]).and_then(as_integer)
}

/// Name a stats code out of `table`
fn named(raw: &RawRecord<'_>, stat: &str, table: &[&'static str]) -> Value {
    match stat_code(raw, stat) {
        Some(code) => match usize::try_from(code).ok().and_then(|i| table.get(i)) {
            Some(name) => Value::from(*name),
            None => {
                warn!("unrecognized {} code {}", stat, code);
                Value::Null
            }
        },
        None => Value::Null,
    }
}

fn size(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(named(raw, "scale", &SIZES))
}

fn race(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(named(raw, "race", &RACES))
}

fn element(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let code = stat_code(raw, "element").map(|c| c.rem_euclid(ELEMENT_STRIDE));
    Ok(match code.and_then(|c| ELEMENTS.get(c as usize)) {
        Some(name) => Value::from(*name),
        None => Value::Null,
    })
}

fn element_level(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    Ok(stat_code(raw, "element")
        .map(|c| Value::from(c / ELEMENT_STRIDE))
        .unwrap_or(Value::Null))
}

/// `MONSTER_TYPE_02` → `"02"`; anything else passes through
fn ai(raw: &RawRecord<'_>, _ctx: &RawRecord<'_>) -> Result<Value> {
    let value = match raw.path(&["stats", "ai"]) {
        Some(v) => v,
        None => return Ok(Value::Null),
    };
    let code = value
        .as_str()
        .and_then(|s| AI_TYPE.captures(s))
        .and_then(|c| c.get(1))
        .map(|m| Value::from(m.as_str()));
    Ok(code.unwrap_or_else(|| value.clone()))
}

/// Destination layout of a monster entry
pub static MOB_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new()
        .field("Id", "id")
        .field("AegisName", "dbname")
        .field("Name", "name")
        .field("Level", stat(&["level"]))
        .field("Hp", stat(&["health"]))
        .field("Sp", stat(&["sp"]))
        .field("BaseExp", stat(&["baseExperience"]))
        .field("JobExp", stat(&["jobExperience"]))
        .field("Attack", stat(&["attack", "minimum"]))
        .field("Attack2", stat(&["attack", "maximum"]))
        .field("Defense", stat(&["defense"]))
        .field("MagicDefense", stat(&["magicDefense"]))
        .field("Str", stat(&["str"]))
        .field("Agi", stat(&["agi"]))
        .field("Vit", stat(&["vit"]))
        .field("Int", stat(&["int"]))
        .field("Dex", stat(&["dex"]))
        .field("Luk", stat(&["luk"]))
        .field("AttackRange", stat(&["attackRange"]))
        .field("SkillRange", stat(&["aggroRange"]))
        .field("ChaseRange", stat(&["escapeRange"]))
        .derive("Size", size)
        .derive("Race", race)
        .derive("Element", element)
        .derive("ElementLevel", element_level)
        .field("WalkSpeed", stat(&["movementSpeed"]))
        .field("AttackDelay", stat(&["attackSpeed"]))
        .field("AttackMotion", stat(&["attackedSpeed"]))
        .field("DamageMotion", stat(&["rechargeTime"]))
        .derive("Ai", ai)
});

/// Map a source monster. Error payloads are returned unchanged.
pub fn map_mob(mob: &Value) -> Result<Option<Value>> {
    let record = match RawRecord::from_value(mob) {
        Some(r) => r,
        None => return Ok(None),
    };
    if record.is_error_payload() {
        return Ok(Some(mob.clone()));
    }
    map_schema(Some(&*MOB_TEMPLATE), Some(record), None)
}
