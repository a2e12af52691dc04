//! 網頁層：提供公開頁面、管理頁面與內嵌靜態資源
//!
//! 所有頁面都編譯進執行檔，交給瀏覽器端的 JavaScript 透過 `/api/*`
//! 取得文件內容後渲染。

pub mod assets;

use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};

pub async fn index_page() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

pub async fn admin_page() -> Html<&'static str> {
    Html(assets::ADMIN_HTML)
}

pub async fn admin_content_page() -> Html<&'static str> {
    Html(assets::ADMIN_CONTENT_HTML)
}

pub async fn admin_projects_page() -> Html<&'static str> {
    Html(assets::ADMIN_PROJECTS_HTML)
}

pub async fn admin_project_form_page() -> Html<&'static str> {
    Html(assets::ADMIN_PROJECT_FORM_HTML)
}

pub async fn admin_theme_page() -> Html<&'static str> {
    Html(assets::ADMIN_THEME_HTML)
}

pub async fn admin_navbar_page() -> Html<&'static str> {
    Html(assets::ADMIN_NAVBAR_HTML)
}

pub async fn site_css() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], assets::SITE_CSS)
}

pub async fn site_js() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/javascript; charset=utf-8")],
        assets::SITE_JS,
    )
}

pub async fn admin_js() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/javascript; charset=utf-8")],
        assets::ADMIN_JS,
    )
}
