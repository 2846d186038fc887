//! Skill database
//!
//! Maps skill ids to their internal (AEGIS) names and back. Only the skills
//! that show up in monster skill lists are listed here.

mod table;

pub use table::SKILLS;

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Placeholder used when a skill id has no known name
pub const UNKNOWN_SKILL: &str = "Unknown Skill";

pub const AL_TELEPORT: i64 = 26;
pub const NPC_SUMMONSLAVE: i64 = 196;
pub const NPC_EMOTION: i64 = 197;
pub const NPC_SUMMONMONSTER: i64 = 209;

static BY_ID: Lazy<AHashMap<i64, &'static str>> =
    Lazy::new(|| SKILLS.iter().map(|&(id, name)| (id, name)).collect());

static BY_NAME: Lazy<AHashMap<&'static str, i64>> =
    Lazy::new(|| SKILLS.iter().map(|&(id, name)| (name, id)).collect());

/// Internal name of a skill id
#[inline]
pub fn skill_name(id: i64) -> Option<&'static str> {
    BY_ID.get(&id).copied()
}

/// Skill id of an internal name
#[inline]
pub fn skill_id(name: &str) -> Option<i64> {
    BY_NAME.get(name).copied()
}

/// Skills whose extra values name the monster's slaves
#[inline]
pub fn is_summon_skill(id: i64) -> bool {
    matches!(id, NPC_SUMMONSLAVE | NPC_SUMMONMONSTER)
}

/// Skills a monster always casts on itself
pub fn is_self_skill(id: i64) -> bool {
    matches!(
        id,
        7 // SM_MAGNUM
            | 8 // SM_ENDURE
            | 24 // AL_RUWACH
            | AL_TELEPORT
            | 51 // TF_HIDING
            | 135 // AS_CLOAKING
            | 161..=169 // NPC_ATTRICHANGE, NPC_CHANGE*
            | 173 // NPC_SELFDESTRUCTION
            | 175 // NPC_SUICIDE
            | 193 // NPC_METAMORPHOSIS
            | 195 // NPC_SMOKING
            | NPC_SUMMONSLAVE
            | NPC_EMOTION
            | 198 // NPC_TRANSFORMATION
            | 201 // NPC_KEEPING
            | 203 // NPC_DARKBLESSING
            | 204 // NPC_BARRIER
            | 205 // NPC_DEFENDER
            | 208 // NPC_REBIRTH
            | NPC_SUMMONMONSTER
    )
}
