use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use launchpad_core::checklist::{
    carry_forward_integrations, missing_info_email, reconcile_versions, EmailDraft,
};
use launchpad_core::models::{CreateProjectInput, Project, UpdateProjectInput};
use launchpad_core::Database;

use super::{ApiError, ApiResult};

pub async fn list(State(db): State<Database>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(db.list_projects()?))
}

pub async fn create(
    State(db): State<Database>,
    Json(input): Json<CreateProjectInput>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    if input.brand_name.trim().is_empty() {
        return Err(ApiError::BadRequest("brand_name must not be empty".into()));
    }
    let project = db.create_project(input)?;
    tracing::info!(id = %project.id, brand = %project.brand_name, "Created project");
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Project>> {
    let mut project = db.get_project(id)?.ok_or(ApiError::NotFound)?;

    // Rebuild the version history on every read; persist it back only when
    // it was never stored. The repair write is fire-and-forget: a failure
    // is logged and the in-memory result is served regardless.
    let needs_repair = project.version_history.is_empty();
    project.version_history = reconcile_versions(
        project.version,
        Some(&project.checklists.launch),
        &project.version_history,
    );
    if needs_repair {
        let db = db.clone();
        let history = project.version_history.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = db.save_version_history(id, &history) {
                tracing::warn!(id = %id, "Failed to persist repaired version history: {e}");
            }
        });
    }

    // Read-time default: sales integrations seed the launch list until the
    // launch form is actually saved.
    let sales = project.checklists.sales.clone();
    carry_forward_integrations(&sales, &mut project.checklists.launch);

    Ok(Json(project))
}

pub async fn update(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateProjectInput>,
) -> ApiResult<Json<Project>> {
    let project = db.update_project(id, input)?.ok_or(ApiError::NotFound)?;
    tracing::debug!(id = %id, "Updated project");
    Ok(Json(project))
}

pub async fn delete(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if db.delete_project(id)? {
        tracing::info!(id = %id, "Deleted project");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailDraftQuery {
    #[serde(default = "default_checklist")]
    pub checklist: String,
}

fn default_checklist() -> String {
    "sales".into()
}

pub async fn email_draft(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Query(query): Query<EmailDraftQuery>,
) -> ApiResult<Json<EmailDraft>> {
    let project = db.get_project(id)?.ok_or(ApiError::NotFound)?;
    let config = db.get_checklist_config()?;

    let draft = match query.checklist.as_str() {
        "sales" => missing_info_email(
            &project,
            "sales",
            &config.sales,
            &project.checklists.sales,
        ),
        "launch" => missing_info_email(
            &project,
            "launch",
            &config.launch,
            &project.checklists.launch,
        ),
        other => {
            return Err(ApiError::BadRequest(format!(
                "unknown checklist '{other}', expected 'sales' or 'launch'"
            )))
        }
    };

    Ok(Json(draft))
}
