//! Read-only view over the configuration page's query string.
//!
//! The host opens the page with a query string that carries two kinds of
//! parameters: capability flags describing the watch-face build, and the
//! current value of every setting. Both are read through [`CapabilitySet`].

use crate::error::CfResult;
use std::collections::HashMap;
use url::{form_urlencoded, Url};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    params: HashMap<String, String>,
}

impl CapabilitySet {
    /// Parses a bare query string. A leading `?` is tolerated.
    /// When a parameter repeats, the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = HashMap::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            params.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
        Self { params }
    }

    pub fn from_url(url: &str) -> CfResult<Self> {
        let parsed = Url::parse(url)?;
        Ok(Self::from_query(parsed.query().unwrap_or("")))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Present, possibly empty.
    pub fn is_defined(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Present and non-empty. Note that `"0"` counts as set.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(coerce_number)
    }

    /// Non-negative integral bound, truncated toward zero. Absent or
    /// non-numeric values count as zero; `inf` saturates to `usize::MAX`
    /// so callers clamp it like any other oversized bound.
    pub fn count(&self, name: &str) -> usize {
        match self.number(name) {
            Some(n) if n > 0.0 => n.trunc() as usize,
            _ => 0,
        }
    }

    /// Number of whole steps `0, 1, 2, ...` that stay below the value, i.e.
    /// the bound rounded up. Same saturation as [`CapabilitySet::count`].
    pub fn steps_below(&self, name: &str) -> usize {
        match self.number(name) {
            Some(n) if n > 0.0 => n.ceil() as usize,
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Loose numeric coercion of a query value: surrounding whitespace is
/// ignored and an empty value reads as zero.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_nan() => Some(n),
        _ => None,
    }
}
