use super::{ApiError, AppState};
use crate::domain::model::Theme;
use crate::domain::ports::Storage;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

pub async fn get_theme<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<Theme>, ApiError> {
    let theme = state.docs.load_theme().await.map_err(|e| {
        tracing::error!("❌ Reading theme document failed: {}", e);
        ApiError::internal("Failed to load theme")
    })?;

    Ok(Json(theme))
}

pub async fn put_theme<S: Storage>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<Theme>, ApiError> {
    let theme: Theme = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("❌ Invalid theme payload: {}", e);
        ApiError::internal("Failed to update theme")
    })?;

    state.docs.save_theme(&theme).await.map_err(|e| {
        tracing::error!("❌ Writing theme document failed: {}", e);
        ApiError::internal("Failed to update theme")
    })?;

    tracing::info!("✅ Theme document updated");
    Ok(Json(theme))
}
