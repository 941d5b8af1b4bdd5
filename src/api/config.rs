use axum::extract::State;
use axum::Json;

use launchpad_core::models::ChecklistConfig;
use launchpad_core::Database;

use super::ApiResult;

pub async fn get(State(db): State<Database>) -> ApiResult<Json<ChecklistConfig>> {
    Ok(Json(db.get_checklist_config()?))
}

/// Replace the field schema wholesale. Takes effect for every project on
/// the next read; no answers are migrated.
pub async fn put(
    State(db): State<Database>,
    Json(config): Json<ChecklistConfig>,
) -> ApiResult<Json<ChecklistConfig>> {
    db.put_checklist_config(&config)?;
    tracing::info!(version = %config.version, "Checklist config replaced");
    Ok(Json(config))
}
