use serde::{Deserialize, Serialize};

use super::flatten::flatten;
use crate::models::{AnswerMap, AnswerValue, FieldConfig, Project};

/// A follow-up email asking the merchant for whatever is still missing.
/// The dashboard shows this as an editable draft; nothing is sent from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

/// Draft a "missing information" email from the unfilled required fields of
/// one checklist. Grouped sub-fields are listed under their group label.
pub fn missing_info_email(
    project: &Project,
    checklist_name: &str,
    fields: &[FieldConfig],
    answers: &AnswerMap,
) -> EmailDraft {
    let mut missing = Vec::new();
    for flat in flatten(fields) {
        if flat.optional {
            continue;
        }
        let value = match &flat.group_id {
            Some(group_id) => answers
                .get(group_id)
                .and_then(AnswerValue::as_map)
                .and_then(|m| m.get(&flat.id)),
            None => answers.get(&flat.id),
        };
        if !flat.kind.is_complete(value) {
            match &flat.group_label {
                Some(group_label) => missing.push(format!("- {}: {}", group_label, flat.label)),
                None => missing.push(format!("- {}", flat.label)),
            }
        }
    }

    let greeting = match project.poc.as_deref() {
        Some(poc) if !poc.trim().is_empty() => format!("Hi {},", poc.trim()),
        _ => "Hi there,".to_string(),
    };

    let body = if missing.is_empty() {
        format!(
            "{greeting}\n\nGood news: the {checklist_name} checklist for {brand} is complete. \
             We'll follow up with next steps shortly.\n\nThanks!",
            brand = project.brand_name,
        )
    } else {
        format!(
            "{greeting}\n\nWe're still missing a few details for {brand}'s {checklist_name} \
             checklist:\n\n{items}\n\nCould you send these over when you get a chance?\n\nThanks!",
            brand = project.brand_name,
            items = missing.join("\n"),
        )
    };

    EmailDraft {
        subject: format!("Missing information for {}", project.brand_name),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Checklists, Progress, ProjectStatus};
    use chrono::Utc;
    use uuid::Uuid;

    fn project(poc: Option<&str>) -> Project {
        Project {
            id: Uuid::new_v4(),
            brand_name: "Acme".into(),
            collab_code: None,
            design_refs: None,
            payment_info: None,
            poc: poc.map(Into::into),
            status: ProjectStatus::InProgress,
            version: 1,
            version_history: vec![1],
            checklists: Checklists::default(),
            progress: Progress::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fields() -> Vec<FieldConfig> {
        serde_json::from_str(
            r#"[
                {"id": "contract", "label": "Contract signed", "type": "checkbox"},
                {"id": "assets", "label": "Brand assets", "type": "url"},
                {"id": "notes", "label": "Notes", "type": "textarea", "optional": true},
                {"id": "contact", "label": "Point of contact", "type": "group", "fields": [
                    {"id": "email", "label": "Email", "type": "text"}
                ]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn lists_only_required_unfilled_fields() {
        let answers: AnswerMap = serde_json::from_str(r#"{"contract": true}"#).unwrap();
        let draft = missing_info_email(&project(Some("Dana")), "sales", &fields(), &answers);
        assert_eq!(draft.subject, "Missing information for Acme");
        assert!(draft.body.starts_with("Hi Dana,"));
        assert!(draft.body.contains("- Brand assets"));
        assert!(draft.body.contains("- Point of contact: Email"));
        assert!(!draft.body.contains("Contract signed"));
        assert!(!draft.body.contains("Notes"));
    }

    #[test]
    fn complete_checklist_gets_the_all_clear() {
        let answers: AnswerMap = serde_json::from_str(
            r#"{"contract": true, "assets": "https://x", "contact": {"email": "a@b.c"}}"#,
        )
        .unwrap();
        let draft = missing_info_email(&project(None), "sales", &fields(), &answers);
        assert!(draft.body.starts_with("Hi there,"));
        assert!(draft.body.contains("complete"));
        assert!(!draft.body.contains("- "));
    }
}
