use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value::AnswerMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub brand_name: String,
    pub collab_code: Option<String>,
    pub design_refs: Option<String>,
    pub payment_info: Option<String>,
    pub poc: Option<String>,
    pub status: ProjectStatus,
    /// Current iteration of the launch deliverables, starting at 1.
    pub version: u32,
    /// Ascending, duplicate-free; always contains 1..=version. Rebuilt by
    /// the reconciler on read, so the stored copy is a cache.
    #[serde(default)]
    pub version_history: Vec<u32>,
    #[serde(default)]
    pub checklists: Checklists,
    /// Display cache only; recomputed from answers + current config on
    /// every read and after every write.
    #[serde(default)]
    pub progress: Progress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Checklists {
    #[serde(default)]
    pub sales: AnswerMap,
    #[serde(default)]
    pub launch: AnswerMap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub sales_completion: u8,
    pub launch_completion: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On HOLD")]
    OnHold,
    Completed,
    Live,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::OnHold => "On HOLD",
            Self::Completed => "Completed",
            Self::Live => "Live",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Not Started" => Some(Self::NotStarted),
            "In Progress" => Some(Self::InProgress),
            "On HOLD" => Some(Self::OnHold),
            "Completed" => Some(Self::Completed),
            "Live" => Some(Self::Live),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub brand_name: String,
    pub collab_code: Option<String>,
    pub design_refs: Option<String>,
    pub payment_info: Option<String>,
    pub poc: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Partial update; set fields replace stored ones, unset fields are left
/// alone (last-write-wins merge, no concurrency token).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectInput {
    pub brand_name: Option<String>,
    pub collab_code: Option<String>,
    pub design_refs: Option<String>,
    pub payment_info: Option<String>,
    pub poc: Option<String>,
    pub status: Option<ProjectStatus>,
    pub version: Option<u32>,
    pub version_history: Option<Vec<u32>>,
    pub sales: Option<AnswerMap>,
    pub launch: Option<AnswerMap>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_display_strings() {
        let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
        assert_eq!(json, r#""On HOLD""#);
        let back: ProjectStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectStatus::OnHold);
        assert_eq!(ProjectStatus::from_str("Not Started"), Some(ProjectStatus::NotStarted));
        assert_eq!(ProjectStatus::from_str("not started"), None);
    }
}
