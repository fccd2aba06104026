// Integration tests for the theme endpoints
// These tests verify:
// 1. Create then fetch round-trips the submitted colors
// 2. Listing returns every record in creation order
// 3. Unknown ids are 404
// 4. Missing/empty fields are 400 and leave the store untouched
// 5. Repeated reads are byte-identical

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::{json, Value};

use test_helpers::*;

#[tokio::test]
async fn test_create_returns_full_record() {
    let (server, store) = setup_test_server();

    let response = server
        .post("/api/themes")
        .json(&json!({"accentColor": "#3b82f6", "primaryColor": "#000000"}))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["accentColor"], "#3b82f6");
    assert_eq!(body["primaryColor"], "#000000");
    let id = body["id"].as_str().expect("id should be a string");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id should be a UUID: {}", id);
    let saved_at = body["savedAt"].as_str().expect("savedAt should be a string");
    assert!(
        chrono::DateTime::parse_from_rfc3339(saved_at).is_ok(),
        "savedAt should be ISO-8601: {}",
        saved_at
    );
    assert!(saved_at.ends_with('Z'));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_then_get_by_id_is_identical() {
    let (server, _) = setup_test_server();
    let created = create_test_theme(&server, "#3b82f6", "#000000").await;
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/api/themes/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);

    let list = server.get("/api/themes").await.json::<Vec<Value>>();
    assert!(list.contains(&created));
}

#[tokio::test]
async fn test_create_preserves_arbitrary_color_strings() {
    let (server, _) = setup_test_server();
    for (accent, primary) in [
        ("rebeccapurple", "hsl(210 40% 50%)"),
        ("#ABC", "rgb(0, 0, 0)"),
        ("  #3b82f6  ", "not-a-color"),
    ] {
        let created = create_test_theme(&server, accent, primary).await;
        let fetched = server
            .get(&format!("/api/themes/{}", created["id"].as_str().unwrap()))
            .await
            .json::<Value>();
        assert_eq!(fetched["accentColor"], accent);
        assert_eq!(fetched["primaryColor"], primary);
    }
}

#[tokio::test]
async fn test_list_returns_records_in_creation_order() {
    let (server, _) = setup_test_server();
    assert_eq!(list_count(&server).await, 0);

    let colors = ["#3b82f6", "#10b981", "#8b5cf6", "#ef4444", "#f59e0b"];
    let mut ids = Vec::new();
    for color in colors {
        let created = create_test_theme(&server, color, "#000000").await;
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let list = server.get("/api/themes").await.json::<Vec<Value>>();
    assert_eq!(list.len(), colors.len());
    let listed_ids: Vec<&str> = list.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(listed_ids, ids);
    let listed_colors: Vec<&str> = list.iter().map(|r| r["accentColor"].as_str().unwrap()).collect();
    assert_eq!(listed_colors, colors);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (server, _) = setup_test_server();
    create_test_theme(&server, "#3b82f6", "#000000").await;

    let response = server
        .get(&format!("/api/themes/{}", uuid::Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({"error": "Theme not found"}));

    let response = server.get("/api/themes/k3j9x").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_spellings_of_an_id_are_not_found() {
    let (server, _) = setup_test_server();
    let created = create_test_theme(&server, "#3b82f6", "#000000").await;
    let id = created["id"].as_str().unwrap().to_string();

    for other in [
        id.to_uppercase(),
        id.replace('-', ""),
        format!("urn:uuid:{}", id),
        format!("%7B{}%7D", id),
        format!("%20{}", id),
    ] {
        let response = server.get(&format!("/api/themes/{}", other)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    server
        .get(&format!("/api/themes/{}", id))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_create_accepts_json_without_content_type() {
    let (server, store) = setup_test_server();

    let response = server
        .post("/api/themes")
        .bytes(Bytes::from_static(
            br##"{"accentColor":"#3b82f6","primaryColor":"#000000"}"##,
        ))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["accentColor"], "#3b82f6");

    let response = server
        .post("/api/themes")
        .text(r##"{"accentColor":"#10b981","primaryColor":"#64748b"}"##)
        .await;
    response.assert_status(StatusCode::CREATED);

    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_empty_accent_is_rejected_without_mutation() {
    let (server, store) = setup_test_server();
    create_test_theme(&server, "#3b82f6", "#000000").await;

    let response = server
        .post("/api/themes")
        .json(&json!({"accentColor": "", "primaryColor": "#000000"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Missing required fields: accentColor, primaryColor"})
    );

    assert_eq!(list_count(&server).await, 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_missing_or_malformed_fields_are_rejected() {
    let (server, store) = setup_test_server();

    for body in [
        json!({"primaryColor": "#000000"}),
        json!({"accentColor": "#3b82f6"}),
        json!({"accentColor": "#3b82f6", "primaryColor": ""}),
        json!({}),
        json!({"accentColor": 42, "primaryColor": "#000000"}),
        json!("#3b82f6"),
    ] {
        let response = server.post("/api/themes").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());
    }

    let response = server.post("/api/themes").text("accentColor=#3b82f6").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_get_by_id_is_idempotent() {
    let (server, _) = setup_test_server();
    let created = create_test_theme(&server, "#ec4899", "#06b6d4").await;
    let path = format!("/api/themes/{}", created["id"].as_str().unwrap());

    let first = server.get(&path).await;
    let second = server.get(&path).await;
    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_health_and_docs() {
    let (server, _) = setup_test_server();

    let health = server.get("/health").await;
    health.assert_status_ok();
    health.assert_text("OK");

    let docs = server.get("/api-docs").await;
    docs.assert_status_ok();
    assert!(docs.text().contains("POST /api/themes"));
    assert!(docs.text().contains("GET /api/themes/:id"));
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let (server, _) = setup_test_server();
    let response = server.get("/api/themes").await;

    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert_eq!(response.header("x-frame-options"), "DENY");
    assert!(response
        .header("content-security-policy")
        .to_str()
        .unwrap()
        .contains("default-src 'self'"));
}
