use super::{ApiError, AppState};
use crate::domain::model::{Project, ProjectDraft, ProjectList};
use crate::domain::ports::Storage;
use crate::utils::error::FolioError;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

pub async fn get_projects<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<ProjectList>, ApiError> {
    let list = state.docs.load_projects().await.map_err(|e| {
        tracing::error!("❌ Reading projects document failed: {}", e);
        ApiError::internal("Failed to load projects")
    })?;

    Ok(Json(list))
}

/// 新增專案。id 由伺服器配發,body 裡的 id 一律忽略。
pub async fn post_project<S: Storage>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<Project>, ApiError> {
    let draft: ProjectDraft = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Invalid project payload: {}", e);
        ApiError::internal("Failed to save project")
    })?;

    let created = state.docs.add_project(draft).await.map_err(|e| {
        tracing::error!("❌ Saving new project failed: {}", e);
        ApiError::internal("Failed to save project")
    })?;

    tracing::info!("✅ Project {} created: {}", created.id, created.title);
    Ok(Json(created))
}

/// 以 body 裡的 id 整筆替換;id 不存在回 404。
pub async fn put_project<S: Storage>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<Project>, ApiError> {
    let project: Project = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Invalid project payload: {}", e);
        ApiError::internal("Failed to update project")
    })?;

    match state.docs.replace_project(project).await {
        Ok(updated) => {
            tracing::info!("✅ Project {} updated", updated.id);
            Ok(Json(updated))
        }
        Err(FolioError::ProjectNotFound { id }) => {
            tracing::warn!("Project {} not found for update", id);
            Err(ApiError::not_found("Project not found"))
        }
        Err(e) => {
            tracing::error!("❌ Updating project failed: {}", e);
            Err(ApiError::internal("Failed to update project"))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeleteRequest {
    id: Option<i64>,
}

/// 刪除 body 指定 id 的專案。id 不存在照樣回成功,
/// 沒帶 id 則什麼都不刪 (與前端行為相容)。
pub async fn delete_project<S: Storage>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: DeleteRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Invalid delete payload: {}", e);
        ApiError::internal("Failed to delete project")
    })?;

    if let Some(id) = request.id {
        state.docs.remove_project(id).await.map_err(|e| {
            tracing::error!("❌ Deleting project {} failed: {}", id, e);
            ApiError::internal("Failed to delete project")
        })?;
        tracing::info!("✅ Project {} deleted", id);
    }

    Ok(Json(json!({ "success": true })))
}
