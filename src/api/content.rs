use super::{ApiError, AppState};
use crate::domain::model::SiteContent;
use crate::domain::ports::Storage;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

pub async fn get_content<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<SiteContent>, ApiError> {
    let content = state.docs.load_content().await.map_err(|e| {
        tracing::error!("❌ Reading content document failed: {}", e);
        ApiError::internal("Failed to load content")
    })?;

    Ok(Json(content))
}

/// 整份覆寫並回傳存入的內容。手動解析 body:
/// 解析失敗視同寫入失敗 (500),不走 400。
pub async fn put_content<S: Storage>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<SiteContent>, ApiError> {
    let content: SiteContent = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Invalid content payload: {}", e);
        ApiError::internal("Failed to update content")
    })?;

    state.docs.save_content(&content).await.map_err(|e| {
        tracing::error!("❌ Writing content document failed: {}", e);
        ApiError::internal("Failed to update content")
    })?;

    tracing::info!("✅ Content document updated");
    Ok(Json(content))
}
