use std::collections::BTreeSet;

use crate::models::{AnswerMap, AnswerValue};

/// Launch fields whose values are lists of versioned sub-records.
pub const VERSIONED_LIST_FIELDS: &[&str] = &["feature_builds", "design_revisions"];

/// (group id, sub-field id) pairs holding versioned lists one level down.
pub const VERSIONED_GROUP_FIELDS: &[(&str, &str)] = &[("deliverables", "builds")];

/// Side map of per-item version overrides, keyed by item id.
pub const VERSION_OVERRIDES_FIELD: &str = "item_versions";

/// Rebuild the authoritative version history for a project.
///
/// Starts from whatever history was persisted, folds in every version marker
/// embedded in the allow-listed launch answers and the per-item override
/// map, then guarantees 1..=`current` is contiguous. Records predating
/// explicit version tracking stay reachable from version-filtered views this
/// way, with no migration pass over historical answers.
///
/// Gaps above `current` are left alone: markers `{5}` at version 2 yield
/// `[1, 2, 5]`, not `[1..=5]`. Below `current`, gaps are always filled even
/// if no data ever existed for an intermediate version; the dashboard
/// prefers overstating available versions to understating them.
pub fn reconcile_versions(
    current: u32,
    launch: Option<&AnswerMap>,
    existing: &[u32],
) -> Vec<u32> {
    let current = current.max(1);
    let mut versions: BTreeSet<u32> = existing.iter().copied().collect();

    if let Some(answers) = launch {
        for id in VERSIONED_LIST_FIELDS {
            collect_list_versions(answers.get(*id), &mut versions);
        }
        for (group_id, sub_id) in VERSIONED_GROUP_FIELDS {
            let nested = answers
                .get(*group_id)
                .and_then(AnswerValue::as_map)
                .and_then(|m| m.get(*sub_id));
            collect_list_versions(nested, &mut versions);
        }
        if let Some(AnswerValue::Map(overrides)) = answers.get(VERSION_OVERRIDES_FIELD) {
            versions.extend(overrides.values().filter_map(AnswerValue::as_version));
        }
    }

    versions.extend(1..=current);

    versions.into_iter().collect()
}

/// Pull `version` markers out of a list of structured records. Anything
/// that is not a list, or any element without a usable marker, is skipped.
fn collect_list_versions(value: Option<&AnswerValue>, out: &mut BTreeSet<u32>) {
    let Some(AnswerValue::List(items)) = value else {
        return;
    };
    for item in items {
        let marker = item
            .as_map()
            .and_then(|m| m.get("version"))
            .and_then(AnswerValue::as_version);
        if let Some(version) = marker {
            out.insert(version);
        }
    }
}
