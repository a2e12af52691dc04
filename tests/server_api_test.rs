use folio::api::AppState;
use folio::server;
use folio::utils::monitor::SystemMonitor;
use folio::LocalStorage;
use std::net::SocketAddr;
use tempfile::TempDir;

/// Boot the real server on an ephemeral port and return its address.
async fn spawn_app(data_dir: &str, public_url: Option<String>) -> SocketAddr {
    let storage = LocalStorage::new(data_dir.to_string());
    let state = AppState::new(storage, SystemMonitor::new(false), public_url);
    state.docs.seed_missing().await.unwrap();

    let app = server::build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_get_content_serves_seeded_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(temp_dir.path().to_str().unwrap(), None).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/content", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let content: serde_json::Value = response.json().await.unwrap();
    assert_eq!(content["hero"]["title"]["part1"], "Building Dreams,");
    assert_eq!(content["about"]["name"], "Sandhya Thapa");
    assert_eq!(content["contact"]["email"], "sandhuthapa77@gmail.com");
    // Wire format is camelCase throughout
    assert!(content["skills"]["technicalProficiencies"]["categories"].is_array());
}

#[tokio::test]
async fn test_put_content_round_trips_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(temp_dir.path().to_str().unwrap(), None).await;
    let client = reqwest::Client::new();

    let mut content: serde_json::Value = client
        .get(format!("http://{}/api/content", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    content["hero"]["title"]["part1"] = serde_json::json!("Designing Cities,");
    content["about"]["location"] = serde_json::json!("Kathmandu");

    let updated: serde_json::Value = client
        .put(format!("http://{}/api/content", addr))
        .json(&content)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["hero"]["title"]["part1"], "Designing Cities,");

    // A fresh GET reads from disk, not from any cache
    let reloaded: serde_json::Value = client
        .get(format!("http://{}/api/content", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reloaded, content);

    // The stored file is pretty-printed
    let raw = std::fs::read_to_string(temp_dir.path().join("content.json")).unwrap();
    assert!(raw.starts_with("{\n  "));
}

#[tokio::test]
async fn test_theme_round_trip_and_palette() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(temp_dir.path().to_str().unwrap(), None).await;
    let client = reqwest::Client::new();

    let theme: serde_json::Value = client
        .get(format!("http://{}/api/theme", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(theme["colors"]["primary"], "#7c3aed");
    assert_eq!(theme["fonts"]["heading"], "Poppins");

    let mut theme = theme;
    theme["colors"]["primary"] = serde_json::json!("#0ea5e9");
    let updated: serde_json::Value = client
        .put(format!("http://{}/api/theme", addr))
        .json(&theme)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["colors"]["primary"], "#0ea5e9");

    let reloaded: serde_json::Value = client
        .get(format!("http://{}/api/theme", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reloaded["colors"]["primary"], "#0ea5e9");
}

#[tokio::test]
async fn test_corrupt_document_yields_fixed_error_body() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(temp_dir.path().to_str().unwrap(), None).await;
    let client = reqwest::Client::new();

    std::fs::write(temp_dir.path().join("content.json"), "{ not json").unwrap();

    let response = client
        .get(format!("http://{}/api/content", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to load content");
}

#[tokio::test]
async fn test_unparseable_put_body_yields_update_error() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(temp_dir.path().to_str().unwrap(), None).await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("http://{}/api/theme", addr))
        .header("Content-Type", "application/json")
        .body("][")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to update theme");

    // The document on disk is untouched after the failed update
    let raw = std::fs::read_to_string(temp_dir.path().join("theme.json")).unwrap();
    let theme: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(theme["colors"]["primary"], "#7c3aed");
}

#[tokio::test]
async fn test_status_reports_documents_and_public_url() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(
        temp_dir.path().to_str().unwrap(),
        Some("https://folio.example.com".to_string()),
    )
    .await;
    let client = reqwest::Client::new();

    let status: serde_json::Value = client
        .get(format!("http://{}/api/status", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(status["status"], "ok");
    assert_eq!(status["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(status["publicUrl"], "https://folio.example.com");
    assert!(status["uptimeSeconds"].is_u64());
    // Monitoring is off, so no process block
    assert!(status["process"].is_null());

    let documents = status["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 3);
    for doc in documents {
        assert_eq!(doc["present"], true);
        assert!(doc["sizeBytes"].as_u64().unwrap() > 0);
        assert!(doc["modified"].is_string());
    }
    let names: Vec<&str> = documents
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["content.json", "projects.json", "theme.json"]);
}

#[tokio::test]
async fn test_pages_and_assets_are_served() {
    let temp_dir = TempDir::new().unwrap();
    let addr = spawn_app(temp_dir.path().to_str().unwrap(), None).await;
    let client = reqwest::Client::new();

    let home = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(home.status(), 200);
    assert!(home.text().await.unwrap().contains("/assets/site.js"));

    let css = client
        .get(format!("http://{}/assets/site.css", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(css.status(), 200);
    assert!(css
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));

    // The edit form is served for any project id; the id is read client-side
    let edit = client
        .get(format!("http://{}/admin/projects/edit/7", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(edit.status(), 200);

    let missing = client
        .get(format!("http://{}/no-such-page", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
}
