pub mod content;
pub mod projects;
pub mod status;
pub mod theme;

use crate::domain::ports::Storage;
use crate::store::DocumentStore;
use crate::utils::monitor::SystemMonitor;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// 所有處理函式共用的狀態。
pub struct AppState<S: Storage> {
    pub docs: Arc<DocumentStore<S>>,
    pub monitor: Arc<SystemMonitor>,
    pub public_url: Option<String>,
}

impl<S: Storage> AppState<S> {
    pub fn new(storage: S, monitor: SystemMonitor, public_url: Option<String>) -> Self {
        Self {
            docs: Arc::new(DocumentStore::new(storage)),
            monitor: Arc::new(monitor),
            public_url,
        }
    }
}

// 手寫 Clone:S 本身不需要 Clone,共享的是 Arc。
impl<S: Storage> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            docs: Arc::clone(&self.docs),
            monitor: Arc::clone(&self.monitor),
            public_url: self.public_url.clone(),
        }
    }
}

/// API 錯誤回應:對外只送固定文案,完整原因進日誌。
/// 格式與前端編輯器預期的 `{"error": "..."}` 一致。
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }

    pub fn not_found(message: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
