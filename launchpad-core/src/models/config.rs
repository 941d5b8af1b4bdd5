use serde::{Deserialize, Serialize};

use super::value::AnswerValue;

/// Input kinds a leaf field can take. Groups are a separate type so the
/// schema can only ever nest one level deep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeafKind {
    Text,
    Textarea,
    Url,
    Checkbox,
    Select,
    MultiInput,
}

impl LeafKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Url => "url",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::MultiInput => "multi_input",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "textarea" => Some(Self::Textarea),
            "url" => Some(Self::Url),
            "checkbox" => Some(Self::Checkbox),
            "select" => Some(Self::Select),
            "multi_input" => Some(Self::MultiInput),
            _ => None,
        }
    }
}

/// A single non-group form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeafField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: LeafKind,
    #[serde(default)]
    pub optional: bool,
    /// Choices for `select` fields; empty for every other kind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Marker so group documents keep their `"type": "group"` discriminator
/// while the Rust side stays a two-variant enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Group,
}

/// A named bundle of leaf fields stored under one id. The group itself is
/// never scored as a unit; each sub-field counts individually against the
/// group's stored sub-map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
    pub fields: Vec<LeafField>,
}

/// One schema node. Sub-fields are `LeafField` by construction, so a group
/// can never contain another group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldConfig {
    Group(GroupField),
    Leaf(LeafField),
}

impl FieldConfig {
    pub fn id(&self) -> &str {
        match self {
            Self::Group(group) => &group.id,
            Self::Leaf(leaf) => &leaf.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Group(group) => &group.label,
            Self::Leaf(leaf) => &leaf.label,
        }
    }
}

/// The configurable field schema driving both checklists. Read on every
/// project load and replaced wholesale from the admin settings screen, so
/// what counts as "complete" for existing projects follows the schema
/// current at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistConfig {
    pub version: String,
    pub sales: Vec<FieldConfig>,
    pub launch: Vec<FieldConfig>,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        crate::checklist::default_config()
    }
}

impl LeafKind {
    /// Whether `value` counts as a filled-in answer for this input kind.
    pub fn is_complete(&self, value: Option<&AnswerValue>) -> bool {
        match self {
            Self::Checkbox => matches!(value, Some(AnswerValue::Bool(true))),
            Self::MultiInput => {
                matches!(value, Some(AnswerValue::List(items)) if !items.is_empty())
            }
            // Anything text-shaped: present and non-blank after coercion.
            _ => value.is_some_and(|v| !v.display_text().trim().is_empty()),
        }
    }
}

impl LeafField {
    pub fn is_complete(&self, value: Option<&AnswerValue>) -> bool {
        self.kind.is_complete(value)
    }
}
