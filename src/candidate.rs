//! Candidate normalization
//!
//! Choices arrive loosely shaped: plain values (`"red"`, `42`) or partial
//! records (`{"title": "Red", "disabled": true}`). Everything downstream works
//! on the fixed-shape [`Candidate`], so normalization happens once at every
//! ingestion boundary: initial choices, the fallback, and matcher results.

use serde::Deserialize;
use serde_json::{Map, Value};

const RECORD_KEYS: [&str; 4] = ["title", "value", "description", "disabled"];

/// Partial choice record; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceRecord {
    pub title: Option<String>,
    pub value: Option<Value>,
    pub description: Option<String>,
    pub disabled: bool,
}

/// A choice as supplied by configuration, input files or a matcher
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawChoice {
    /// A bare value used as both title and value
    Plain(Value),
    /// A record where missing fields are derived from the others
    Record(ChoiceRecord),
}

/// A normalized entry of the suggestion list
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub title: String,
    pub value: Value,
    pub description: Option<String>,
    pub disabled: bool,
}

impl Candidate {
    /// Create an enabled candidate whose value is its title
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            value: Value::String(title.clone()),
            title,
            description: None,
            disabled: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Normalize a raw choice
    ///
    /// Precedence: `value = raw.value ?? raw.title ?? raw` and
    /// `title = raw.title ?? raw.value ?? raw`. Never fails.
    pub fn from_raw(raw: RawChoice) -> Self {
        match raw {
            RawChoice::Plain(value) => Self {
                title: display_value(&value),
                value,
                description: None,
                disabled: false,
            },
            RawChoice::Record(record) => {
                let title = record
                    .title
                    .clone()
                    .or_else(|| record.value.as_ref().map(display_value))
                    .unwrap_or_default();
                let value = record
                    .value
                    .or_else(|| record.title.map(Value::String))
                    .unwrap_or(Value::Null);
                Self {
                    title,
                    value,
                    description: record.description,
                    disabled: record.disabled,
                }
            }
        }
    }

    /// Whether the candidate's title or string value equals `text`
    pub fn matches_text(&self, text: &str) -> bool {
        self.title == text || self.value.as_str() == Some(text)
    }
}

impl From<RawChoice> for Candidate {
    fn from(raw: RawChoice) -> Self {
        Candidate::from_raw(raw)
    }
}

/// Normalize a whole batch of raw choices, preserving order
pub fn normalize_all<I>(raw: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = RawChoice>,
{
    raw.into_iter().map(Candidate::from_raw).collect()
}

/// Render a JSON value as display text: strings unquoted, the rest as compact JSON
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<Value> for RawChoice {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) if RECORD_KEYS.iter().any(|key| map.contains_key(*key)) => {
                RawChoice::Record(record_from_map(map))
            }
            other => RawChoice::Plain(other),
        }
    }
}

fn record_from_map(map: Map<String, Value>) -> ChoiceRecord {
    let non_null = |key: &str| map.get(key).filter(|v| !v.is_null()).cloned();

    let title = non_null("title").map(|v| display_value(&v));
    let mut value = non_null("value");
    let description = non_null("description").map(|v| display_value(&v));
    let disabled = map
        .get("disabled")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    // Neither title nor value: the record itself stands in for both
    if title.is_none() && value.is_none() {
        value = Some(Value::Object(map));
    }

    ChoiceRecord {
        title,
        value,
        description,
        disabled,
    }
}

impl From<&str> for RawChoice {
    fn from(s: &str) -> Self {
        RawChoice::Plain(Value::String(s.to_string()))
    }
}

impl From<String> for RawChoice {
    fn from(s: String) -> Self {
        RawChoice::Plain(Value::String(s))
    }
}

impl From<ChoiceRecord> for RawChoice {
    fn from(record: ChoiceRecord) -> Self {
        RawChoice::Record(record)
    }
}

impl From<Candidate> for RawChoice {
    fn from(candidate: Candidate) -> Self {
        RawChoice::Record(ChoiceRecord {
            title: Some(candidate.title),
            value: Some(candidate.value),
            description: candidate.description,
            disabled: candidate.disabled,
        })
    }
}

#[cfg(test)]
#[path = "candidate_tests.rs"]
mod candidate_tests;
