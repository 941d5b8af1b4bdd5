use crate::models::{AnswerMap, AnswerValue, ChecklistConfig, Checklists, FieldConfig, Progress};

/// Completion percentage for one checklist: filled required units over all
/// required units, rounded. Optional fields count toward neither side.
/// Group sub-fields are independent units scored against the group's stored
/// sub-map; the group itself contributes nothing.
///
/// `require_checks` is reserved for per-field validation rules on the launch
/// checklist; callers pass `true` for launch and `false` elsewhere, but
/// scoring does not yet branch on it.
pub fn compute_progress(
    answers: Option<&AnswerMap>,
    fields: &[FieldConfig],
    require_checks: bool,
) -> u8 {
    let _ = require_checks;

    let mut total = 0u32;
    let mut completed = 0u32;

    for field in fields {
        match field {
            FieldConfig::Group(group) => {
                let sub_map = answers
                    .and_then(|a| a.get(&group.id))
                    .and_then(AnswerValue::as_map);
                for sub in &group.fields {
                    if sub.optional {
                        continue;
                    }
                    total += 1;
                    if sub.is_complete(sub_map.and_then(|m| m.get(&sub.id))) {
                        completed += 1;
                    }
                }
            }
            FieldConfig::Leaf(leaf) => {
                if leaf.optional {
                    continue;
                }
                total += 1;
                if leaf.is_complete(answers.and_then(|a| a.get(&leaf.id))) {
                    completed += 1;
                }
            }
        }
    }

    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(completed) / f64::from(total)).round() as u8
}

/// Both checklist percentages plus the overall figure (mean of the two).
pub fn checklist_progress(checklists: &Checklists, config: &ChecklistConfig) -> Progress {
    let sales = compute_progress(Some(&checklists.sales), &config.sales, false);
    let launch = compute_progress(Some(&checklists.launch), &config.launch, true);
    Progress {
        sales_completion: sales,
        launch_completion: launch,
        overall: ((f64::from(sales) + f64::from(launch)) / 2.0).round() as u8,
    }
}
