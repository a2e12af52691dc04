//! HTTP 伺服器:組裝路由、記錄請求並執行服務迴圈
//!
//! 路由分為三組:`/api/*` 的文件端點、`/admin*` 的管理頁面,
//! 以及公開頁面與靜態資源。伺服器收到 Ctrl+C 後優雅關閉。

use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::api::{content, projects, status, theme, AppState};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{FolioError, Result};
use crate::web;

pub fn build_router<S: Storage + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route(
            "/api/content",
            get(content::get_content::<S>).put(content::put_content::<S>),
        )
        .route(
            "/api/projects",
            get(projects::get_projects::<S>)
                .post(projects::post_project::<S>)
                .put(projects::put_project::<S>)
                .delete(projects::delete_project::<S>),
        )
        .route(
            "/api/theme",
            get(theme::get_theme::<S>).put(theme::put_theme::<S>),
        )
        .route("/api/status", get(status::get_status::<S>))
        .route("/", get(web::index_page))
        .route("/admin", get(web::admin_page))
        .route("/admin/content", get(web::admin_content_page))
        .route("/admin/projects", get(web::admin_projects_page))
        .route("/admin/projects/new", get(web::admin_project_form_page))
        .route("/admin/projects/edit/:id", get(web::admin_project_form_page))
        .route("/admin/theme", get(web::admin_theme_page))
        .route("/admin/navbar", get(web::admin_navbar_page))
        .route("/assets/site.css", get(web::site_css))
        .route("/assets/site.js", get(web::site_js))
        .route("/assets/admin.js", get(web::admin_js))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// 記錄每個請求的方法、路徑、狀態碼與耗時
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(
            "❌ {} {} -> {} ({:?})",
            method,
            path,
            status,
            started.elapsed()
        );
    } else {
        tracing::debug!("{} {} -> {} ({:?})", method, path, status, started.elapsed());
    }
    response
}

pub async fn run<S, C>(config: &C, state: AppState<S>) -> Result<()>
where
    S: Storage + 'static,
    C: ConfigProvider,
{
    let monitor = Arc::clone(&state.monitor);
    let app = build_router(state);

    let listener =
        TcpListener::bind(config.bind_addr())
            .await
            .map_err(|e| FolioError::ServerError {
                message: format!("failed to bind {}: {}", config.bind_addr(), e),
            })?;
    let addr = listener.local_addr().map_err(|e| FolioError::ServerError {
        message: format!("failed to read local address: {}", e),
    })?;

    tracing::info!("🚀 Serving portfolio on http://{}", addr);
    if let Some(public_url) = config.public_url() {
        tracing::info!("Public URL: {}", public_url);
    }
    monitor.log_stats("Server started.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::ServerError {
            message: format!("server failed: {}", e),
        })?;

    monitor.log_final_stats();
    tracing::info!("✅ Server stopped cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
