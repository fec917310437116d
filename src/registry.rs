//! Option declarations and the builder that collects them.
//!
//! Declaration order is significant twice over: it is the vertical order
//! of the rendered form and the order in which the serializer walks the
//! controls on submit.

use crate::capability::{coerce_number, CapabilitySet};
use crate::error::{CfResult, ConfigError};
use serde::Serialize;
use std::fmt;
use strum_macros::{Display, EnumString};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Int(i64),
    Text(String),
}

impl ChoiceValue {
    /// Loose equality against a raw query value: integer choices compare
    /// numerically after coercion, text choices compare verbatim.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ChoiceValue::Int(n) => coerce_number(raw).is_some_and(|v| v == *n as f64),
            ChoiceValue::Text(s) => s == raw,
        }
    }
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Int(n) => write!(f, "{}", n),
            ChoiceValue::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: ChoiceValue,
    pub text: String,
}

impl Choice {
    pub fn new(value: ChoiceValue, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }

    pub fn int(value: i64, text: impl Into<String>) -> Self {
        Self::new(ChoiceValue::Int(value), text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Serializer {
    #[default]
    Integer,
    Text,
}

/// `Slider` marks a plain two-way switch; anything with explicit choices
/// is a `Select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ControlRole {
    Slider,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDecl {
    /// Query parameter holding the current value.
    pub key: String,
    pub label: String,
    pub choices: Vec<Choice>,
    pub serializer: Serializer,
    /// Control id and payload key.
    pub storage_key: String,
    pub role: ControlRole,
}

impl OptionDecl {
    /// Index of the choice the rendered control starts on: the first
    /// choice matching the query value for `key`, else the first choice.
    pub fn initial_index(&self, caps: &CapabilitySet) -> usize {
        caps.get(&self.key)
            .and_then(|raw| self.choices.iter().position(|c| c.value.matches(raw)))
            .unwrap_or(0)
    }

    pub fn initial_choice(&self, caps: &CapabilitySet) -> Option<&Choice> {
        self.choices.get(self.initial_index(caps))
    }
}

/// Arguments of one `declare` call. Only `key` and `label` are required.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    key: String,
    label: String,
    choices: Option<Vec<Choice>>,
    serializer: Serializer,
    storage_key: Option<String>,
}

impl OptionSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            choices: None,
            serializer: Serializer::default(),
            storage_key: None,
        }
    }

    pub fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn serializer(mut self, serializer: Serializer) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = Some(storage_key.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct OptionRegistry {
    boolean_choices: [Choice; 2],
    decls: Vec<OptionDecl>,
}

impl OptionRegistry {
    /// `off` and `on` are the texts of the default two-way choice list.
    pub fn new(off: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            boolean_choices: [Choice::int(0, off), Choice::int(1, on)],
            decls: Vec::new(),
        }
    }

    pub fn declare(&mut self, spec: OptionSpec) -> CfResult<&OptionDecl> {
        let storage_key = spec.storage_key.unwrap_or_else(|| spec.key.clone());
        if self.contains(&storage_key) {
            return Err(ConfigError::DuplicateKey(storage_key));
        }

        let (choices, role) = match spec.choices {
            Some(c) => (c, ControlRole::Select),
            None => (self.boolean_choices.to_vec(), ControlRole::Slider),
        };

        debug!(
            "declare {} ({} choices, {})",
            storage_key,
            choices.len(),
            spec.serializer
        );

        self.decls.push(OptionDecl {
            key: spec.key,
            label: spec.label,
            choices,
            serializer: spec.serializer,
            storage_key,
            role,
        });
        Ok(&self.decls[self.decls.len() - 1])
    }

    pub fn contains(&self, storage_key: &str) -> bool {
        self.decls.iter().any(|d| d.storage_key == storage_key)
    }

    pub fn get(&self, storage_key: &str) -> Option<&OptionDecl> {
        self.decls.iter().find(|d| d.storage_key == storage_key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionDecl> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn storage_keys(&self) -> Vec<&str> {
        self.decls.iter().map(|d| d.storage_key.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a OptionRegistry {
    type Item = &'a OptionDecl;
    type IntoIter = std::slice::Iter<'a, OptionDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
