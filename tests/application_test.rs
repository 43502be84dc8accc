use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use student_info::config::toml_config::TomlConfig;
use student_info::{Application, CliConfig};
use tempfile::TempDir;
use tower::ServiceExt;

#[tokio::test]
async fn test_build_from_toml_with_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("students.json");
    let normalized_path = data_file.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start();
    let college_mock = server.mock(|when, then| {
        when.method(GET).path("/college/42");
        then.status(200).json_body(serde_json::json!({
            "id": 42,
            "collegeName": "COEP",
            "address": "Shivajinagar",
            "university": "SPPU"
        }));
    });

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[server]
bind = "127.0.0.1:0"

[college_service]
base_url = "{}"
timeout_seconds = 5

[store]
data_file = "{}"
"#,
        server.base_url(),
        normalized_path
    ))
    .unwrap();

    let app = Application::build(&config).await.unwrap().router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/student/")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"{"name":"Asha","address":"Pune","age":"20","collegeId":"42"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/student/std/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let pairs: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(pairs[0]["college"]["collegeName"], "COEP");
    college_mock.assert();

    // the student was written through to disk
    let raw = std::fs::read_to_string(&data_file).unwrap();
    assert!(raw.contains("\"Asha\""));
}

#[tokio::test]
async fn test_build_rejects_invalid_college_url() {
    let cli = CliConfig {
        college_service_url: Some("not a url".to_string()),
        ..Default::default()
    };

    assert!(Application::build(&cli).await.is_err());
}

#[tokio::test]
async fn test_build_with_defaults_uses_memory_store() {
    let cli = CliConfig {
        bind: Some("127.0.0.1:0".to_string()),
        ..Default::default()
    };

    let app = Application::build(&cli).await.unwrap().router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/student/api/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
