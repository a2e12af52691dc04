use super::{ApiError, AppState};
use crate::domain::ports::Storage;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// 管理後台儀表板吃的健康狀態回報。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub public_url: Option<String>,
    pub documents: Vec<DocumentReport>,
    pub process: Option<ProcessReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub name: String,
    pub present: bool,
    pub size_bytes: Option<u64>,
    pub modified: Option<String>,
}

/// 只有啟動時開了 --monitor 才會出現。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    pub cpu_usage: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
}

pub async fn get_status<S: Storage>(
    State(state): State<AppState<S>>,
) -> Result<Json<StatusReport>, ApiError> {
    let stats = state.docs.document_stats().await.map_err(|e| {
        tracing::error!("❌ Reading document metadata failed: {}", e);
        ApiError::internal("Failed to load status")
    })?;

    let documents = stats
        .into_iter()
        .map(|info| {
            let (size_bytes, modified) = match &info.stat {
                Some(stat) => (
                    Some(stat.size),
                    stat.modified
                        .map(|t| DateTime::<Utc>::from(t).to_rfc3339()),
                ),
                None => (None, None),
            };
            DocumentReport {
                name: info.name.to_string(),
                present: size_bytes.is_some(),
                size_bytes,
                modified,
            }
        })
        .collect();

    let process = state.monitor.get_stats().map(|stats| ProcessReport {
        cpu_usage: stats.cpu_usage,
        memory_mb: stats.memory_usage_mb,
        peak_memory_mb: stats.peak_memory_mb,
    });

    Ok(Json(StatusReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.monitor.uptime().as_secs(),
        public_url: state.public_url.clone(),
        documents,
        process,
    }))
}
