use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stored answers for one checklist, keyed by field id.
pub type AnswerMap = BTreeMap<String, AnswerValue>;

/// A single stored answer.
///
/// Answer documents are free-form JSON shaped by whatever schema was current
/// at write time, so every shape the store can hand back must be
/// representable. Scoring never fails on an unexpected shape; the coercion
/// helpers below give a conservative reading instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<AnswerValue>),
    Map(AnswerMap),
}

impl AnswerValue {
    /// Best-effort stringification, mirroring how the answer would render.
    /// Maps have no sensible text form and read as empty (incomplete).
    pub fn display_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(AnswerValue::display_text)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Map(_) => String::new(),
        }
    }

    /// Read this value as a version number: a whole number >= 1.
    pub fn as_version(&self) -> Option<u32> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && *n >= 1.0 && *n <= f64::from(u32::MAX) => {
                Some(*n as u32)
            }
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AnswerValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&AnswerMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}
