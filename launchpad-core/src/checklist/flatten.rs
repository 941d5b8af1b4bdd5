use serde::{Deserialize, Serialize};

use crate::models::{FieldConfig, LeafKind};

/// A schema field with any grouping expanded away, for status tables and
/// other flat renderings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlattenedField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: LeafKind,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(default)]
    pub is_sub_field: bool,
}

/// Expand groups in place: each sub-field becomes one entry tagged with its
/// parent's id and label, everything else passes through. Order preserved.
pub fn flatten(fields: &[FieldConfig]) -> Vec<FlattenedField> {
    let mut out = Vec::new();
    for field in fields {
        match field {
            FieldConfig::Group(group) => {
                for sub in &group.fields {
                    out.push(FlattenedField {
                        id: sub.id.clone(),
                        label: sub.label.clone(),
                        kind: sub.kind,
                        optional: sub.optional,
                        group_id: Some(group.id.clone()),
                        group_label: Some(group.label.clone()),
                        is_sub_field: true,
                    });
                }
            }
            FieldConfig::Leaf(leaf) => {
                out.push(FlattenedField {
                    id: leaf.id.clone(),
                    label: leaf.label.clone(),
                    kind: leaf.kind,
                    optional: leaf.optional,
                    group_id: None,
                    group_label: None,
                    is_sub_field: false,
                });
            }
        }
    }
    out
}
