//! Source enumeration → destination keyword tables

pub const SEND_EMOTICON: &str = "SEND_EMOTICON";
pub const SEND_CHAT: &str = "SEND_CHAT";

pub const IF_COMRADEHP: &str = "IF_COMRADEHP";
pub const IF_COMRADECONDITION: &str = "IF_COMRADECONDITION";
pub const IF_CONDITION: &str = "IF_CONDITION";
pub const IF_HIDING: &str = "IF_HIDING";
pub const IF_SKILLUSE: &str = "IF_SKILLUSE";

/// Status used when the source does not restrict the state
pub const ANY_STATUS: &str = "any";
/// Condition used when the source has none
pub const ALWAYS: &str = "always";

/// Monster AI state
pub fn map_status(state: &str) -> Option<&'static str> {
    match state {
        "IDLE_ST" => Some("idle"),
        "RMOVE_ST" => Some("walk"),
        "MOVEITEM_ST" => Some("loot"),
        "BERSERK_ST" => Some("attack"),
        "DEAD_ST" => Some("dead"),
        _ => None,
    }
}

/// Skill trigger condition
pub fn map_condition(condition: &str) -> Option<&'static str> {
    match condition {
        "IF_HP" => Some("myhpltmaxrate"),
        IF_COMRADEHP => Some("friendhpltmaxrate"),
        IF_COMRADECONDITION => Some("friendstatuson"),
        IF_CONDITION => Some("mystatuson"),
        IF_HIDING => Some("mystatuson"),
        IF_SKILLUSE => Some("skillused"),
        "IF_RUDEATTACK" => Some("rudeattacked"),
        "IF_SLAVENUM" => Some("slavelt"),
        "IF_ENEMYCOUNT" => Some("attackpcgt"),
        "IF_RANGEATTACKED" => Some("longrangeattacked"),
        "IF_MAGICLOCKED" => Some("casttargeted"),
        _ => None,
    }
}

/// Body state named by a condition value
pub fn map_body_state(code: &str) -> Option<&'static str> {
    match code {
        "BODY_ALL" => Some("anybad"),
        "BODY_STONECURSE" => Some("stone"),
        "BODY_FREEZING" => Some("freeze"),
        "BODY_STUN" => Some("stun"),
        "BODY_SLEEP" => Some("sleep"),
        "BODY_POISON" => Some("poison"),
        "BODY_CURSE" => Some("curse"),
        "BODY_SILENCE" => Some("silence"),
        "BODY_CONFUSION" => Some("confusion"),
        "BODY_BLIND" => Some("blind"),
        _ => None,
    }
}

/// Whether a condition targets an ally rather than the caster's target
#[inline]
pub fn is_friend_condition(condition: &str) -> bool {
    matches!(condition, IF_COMRADEHP | IF_COMRADECONDITION)
}
