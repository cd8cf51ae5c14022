//! API integration tests for config file retrieval and error handling.
//!
//! Tests verify:
//! - Each configuration route returns the file bytes as JSON
//! - Missing files produce 404 with a fixed body
//! - `/ping` is independent of filesystem state
//! - Unknown paths and methods fall through to the default responses

use axum::http::StatusCode;

use serve_config::{ConfigName, CONFIG_DIR_NAME, NOT_FOUND_BODY};

use super::test_utils::{get, sample_json, send, TestContentRoot};

// =============================================================================
// Config Retrieval
// =============================================================================

#[tokio::test]
async fn test_all_config_routes_serve_file_bytes() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    for name in ConfigName::ALL {
        let (status, content_type, body) = get(&router, name.route()).await;

        assert_eq!(status, StatusCode::OK, "route {}", name.route());
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, sample_json(name).into_bytes());
    }
}

#[tokio::test]
async fn test_body_is_byte_for_byte_identical() {
    // Not valid JSON and not UTF-8; served untouched regardless
    let raw: &[u8] = b"{\"a\":1}\n\xff\x00trailing";
    let root = TestContentRoot::new().with_file(ConfigName::PicoIot, raw);
    let router = root.router();

    let (status, content_type, body) = get(&router, "/pico_iot_config.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_empty_file_is_served() {
    let root = TestContentRoot::new().with_file(ConfigName::Cooker, b"");
    let router = root.router();

    let (status, _, body) = get(&router, "/cooker_config.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_routes_do_not_cross_files() {
    let root = TestContentRoot::new().with_file(ConfigName::Cooker, br#"{"cooker":true}"#);
    let router = root.router();

    let (status, _, _) = get(&router, "/cooker_config.json").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = get(&router, "/eiot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(&router, "/pico_iot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_head_request_on_config_route() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    let (status, content_type, body) = send(&router, "HEAD", "/eiot_config.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert!(body.is_empty());
}

// =============================================================================
// Missing Files
// =============================================================================

#[tokio::test]
async fn test_missing_files_return_404() {
    let root = TestContentRoot::new();
    let router = root.router();

    for name in ConfigName::ALL {
        let (status, _, body) = get(&router, name.route()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "route {}", name.route());
        assert_eq!(body, NOT_FOUND_BODY.as_bytes());
    }
}

#[tokio::test]
async fn test_missing_config_directory_returns_404() {
    let root = TestContentRoot::without_config_dir();
    let router = root.router();

    let (status, _, body) = get(&router, "/eiot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_config_directory_replaced_by_file_returns_404() {
    let root = TestContentRoot::without_config_dir();
    std::fs::write(root.path().join(CONFIG_DIR_NAME), b"not a directory").unwrap();
    let router = root.router();

    for name in ConfigName::ALL {
        let (status, _, body) = get(&router, name.route()).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "route {}", name.route());
        assert_eq!(body, NOT_FOUND_BODY.as_bytes());
    }
}

#[tokio::test]
async fn test_404_body_does_not_leak_paths() {
    let root = TestContentRoot::new();
    let router = root.router();

    let (_, _, body) = get(&router, "/cooker_config.json").await;
    let body = String::from_utf8(body).unwrap();
    assert!(!body.contains(root.path().to_str().unwrap()));
    assert!(!body.contains("config_files"));
}

#[tokio::test]
async fn test_file_deleted_between_requests() {
    let root = TestContentRoot::new().with_file(ConfigName::Eiot, br#"{"mode":"auto"}"#);
    let router = root.router();

    let (status, content_type, body) = get(&router, "/eiot_config.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, br#"{"mode":"auto"}"#);

    root.remove(ConfigName::Eiot);

    let (status, _, body) = get(&router, "/eiot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Config file not found");
}

#[tokio::test]
async fn test_file_created_after_startup_is_served() {
    let root = TestContentRoot::new();
    let router = root.router();

    let (status, _, _) = get(&router, "/pico_iot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    root.write(ConfigName::PicoIot, br#"{"led":"on"}"#);

    let (status, _, body) = get(&router, "/pico_iot_config.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"led":"on"}"#);
}

#[tokio::test]
async fn test_updated_file_is_served_without_restart() {
    let root = TestContentRoot::new().with_file(ConfigName::Cooker, br#"{"v":1}"#);
    let router = root.router();

    let (_, _, body) = get(&router, "/cooker_config.json").await;
    assert_eq!(body, br#"{"v":1}"#);

    root.write(ConfigName::Cooker, br#"{"v":2}"#);

    let (_, _, body) = get(&router, "/cooker_config.json").await;
    assert_eq!(body, br#"{"v":2}"#);
}

#[tokio::test]
async fn test_directory_in_place_of_file_returns_404() {
    let root = TestContentRoot::new();
    std::fs::create_dir(root.file_path(ConfigName::Cooker)).unwrap();
    let router = root.router();

    let (status, _, body) = get(&router, "/cooker_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

// =============================================================================
// Idempotence
// =============================================================================

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    let first = get(&router, "/eiot_config.json").await;
    let second = get(&router, "/eiot_config.json").await;
    assert_eq!(first, second);

    let on_disk = std::fs::read(root.file_path(ConfigName::Eiot)).unwrap();
    assert_eq!(on_disk, sample_json(ConfigName::Eiot).into_bytes());
}

#[tokio::test]
async fn test_repeated_missing_requests_are_identical() {
    let root = TestContentRoot::new();
    let router = root.router();

    let first = get(&router, "/cooker_config.json").await;
    let second = get(&router, "/cooker_config.json").await;
    assert_eq!(first, second);
    assert!(!root.file_path(ConfigName::Cooker).exists());
}

// =============================================================================
// Ping
// =============================================================================

#[tokio::test]
async fn test_ping_returns_pong() {
    let root = TestContentRoot::new();
    let router = root.router();

    let (status, content_type, body) = get(&router, "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(body, b"pong");
}

#[tokio::test]
async fn test_ping_independent_of_filesystem() {
    let root = TestContentRoot::without_config_dir();
    let router = root.router();

    let (status, _, body) = get(&router, "/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"pong");
}

// =============================================================================
// Unmapped Routes
// =============================================================================

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    let (status, _, body) = get(&router, "/nonexistent.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_routes_are_case_sensitive() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    let (status, _, _) = get(&router, "/COOKER_CONFIG.JSON").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(&router, "/PING").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_path_traversal_is_not_routed() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    let (status, _, _) = get(&router, "/config_files/eiot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(&router, "/../config_files/eiot_config.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_returns_method_not_allowed() {
    let root = TestContentRoot::new().with_all_files();
    let router = root.router();

    let (status, _, _) = send(&router, "POST", "/cooker_config.json").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _, _) = send(&router, "DELETE", "/ping").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    // The file is untouched by rejected methods
    assert!(root.file_path(ConfigName::Cooker).exists());
}
