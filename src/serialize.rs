//! Turns live form values back into the flat settings payload.
//!
//! A control whose value fails its serializer is left out of the payload
//! entirely. The host reads a missing key as "keep the current setting",
//! so nothing here ever substitutes a default.

use crate::capability::CapabilitySet;
use crate::product::date_window_key;
use crate::registry::{OptionRegistry, Serializer};
use serde::ser::SerializeMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Int(i64),
    Text(String),
}

impl SettingValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(n) => Some(*n),
            SettingValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            SettingValue::Int(_) => None,
        }
    }
}

/// Storage key → value, kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultObject {
    entries: Vec<(String, SettingValue)>,
}

impl ResultObject {
    /// Inserts or replaces; a replaced key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: SettingValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for ResultObject {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Current value of every rendered control, keyed by storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    values: HashMap<String, String>,
}

impl FormSnapshot {
    /// What the page shows before the user touches anything.
    pub fn initial(registry: &OptionRegistry, caps: &CapabilitySet) -> Self {
        let values = registry
            .iter()
            .filter_map(|d| {
                d.initial_choice(caps)
                    .map(|c| (d.storage_key.clone(), c.value.to_string()))
            })
            .collect();
        Self { values }
    }

    pub fn set(&mut self, storage_key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(storage_key.into(), value.into());
    }

    pub fn get(&self, storage_key: &str) -> Option<&str> {
        self.values.get(storage_key).map(String::as_str)
    }

    /// Applies an `application/x-www-form-urlencoded` body. Names that match
    /// no rendered control are ignored. A repeated name keeps its first
    /// value, the same rule [`CapabilitySet::from_query`] follows.
    pub fn apply_form_body(&mut self, registry: &OptionRegistry, body: &str) {
        let mut seen = HashSet::new();
        for (name, value) in form_urlencoded::parse(body.as_bytes()) {
            if !registry.contains(&name) {
                debug!("Ignoring form field '{}' with no matching control", name);
                continue;
            }
            if !seen.insert(name.clone()) {
                debug!("Ignoring repeated form field '{}'", name);
                continue;
            }
            self.values.insert(name.into_owned(), value.into_owned());
        }
    }
}

/// Walks the registry in declaration order and keeps every value its
/// serializer accepts.
pub fn serialize(registry: &OptionRegistry, snapshot: &FormSnapshot) -> ResultObject {
    let mut result = ResultObject::default();
    for decl in registry {
        let Some(raw) = snapshot.get(&decl.storage_key) else {
            continue;
        };
        let value = match decl.serializer {
            Serializer::Integer => parse_int_prefix(raw).map(SettingValue::Int),
            Serializer::Text => (!raw.is_empty()).then(|| SettingValue::Text(raw.to_string())),
        };
        match value {
            Some(v) => result.insert(decl.storage_key.clone(), v),
            None => debug!("Omitting {} (value {:?} rejected)", decl.storage_key, raw),
        }
    }
    result
}

/// Leading base-10 integer of `raw`: leading whitespace and one sign are
/// allowed and anything after the digits is ignored. `None` when there
/// are no digits or the value does not fit in an `i64`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign_len, rest) = match s.as_bytes().first() {
        Some(b'-') | Some(b'+') => (1, &s[1..]),
        _ => (0, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Storage key of the hidden switch the developer unlock turns on.
pub const DEVELOPER_KEY: &str = "show_debug";
const UNLOCK_FIRST_WINDOW: i64 = 1;
const UNLOCK_SECOND_WINDOW: i64 = 8;
const UNLOCK_LANGUAGE: &str = "ta_IN";
const UNLOCK_DRAW_MODE: i64 = 1;

/// First date window on "Identify window", second on "am/pm", Tamil as
/// the display language and inverted colors together switch on the
/// developer options. Returns whether the combination matched.
pub fn apply_developer_unlock(caps: &CapabilitySet, result: &mut ResultObject) -> bool {
    let Some(keys) = caps.get("date_window_keys").filter(|k| !k.is_empty()) else {
        return false;
    };
    let mut letters = keys.chars();
    let (Some(first), Some(second)) = (letters.next(), letters.next()) else {
        return false;
    };

    let int_at = |key: &str| result.get(key).and_then(SettingValue::as_int);
    let matched = int_at(&date_window_key(first)) == Some(UNLOCK_FIRST_WINDOW)
        && int_at(&date_window_key(second)) == Some(UNLOCK_SECOND_WINDOW)
        && result.get("display_lang").and_then(SettingValue::as_str) == Some(UNLOCK_LANGUAGE)
        && int_at("draw_mode") == Some(UNLOCK_DRAW_MODE);

    if matched {
        info!("Developer options unlocked");
        result.insert(DEVELOPER_KEY, SettingValue::Int(1));
    }
    matched
}
