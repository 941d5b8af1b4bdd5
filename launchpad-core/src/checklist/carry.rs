use crate::models::{AnswerMap, AnswerValue};

/// Field id shared by the sales and launch checklists.
pub const INTEGRATIONS_FIELD: &str = "integrations";

/// Seed the launch integrations list from sales when launch has none yet.
///
/// Read-time default only: the copy lands in the launch answer map handed to
/// the form, and is persisted only when the user saves that form. Never
/// fires once the launch side holds anything (so user-entered launch data is
/// never overwritten), and copies by value so edits to the launch list leave
/// the sales record untouched.
pub fn carry_forward_integrations(sales: &AnswerMap, launch: &mut AnswerMap) {
    let Some(AnswerValue::List(items)) = sales.get(INTEGRATIONS_FIELD) else {
        return;
    };
    if items.is_empty() {
        return;
    }

    let destination_empty = match launch.get(INTEGRATIONS_FIELD) {
        None | Some(AnswerValue::Null) => true,
        Some(AnswerValue::List(existing)) => existing.is_empty(),
        Some(_) => false,
    };
    if destination_empty {
        launch.insert(
            INTEGRATIONS_FIELD.to_string(),
            AnswerValue::List(items.clone()),
        );
    }
}
