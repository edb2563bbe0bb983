//! API endpoint tests
//!
//! Drive the full axum router with an in-memory repository: submission,
//! listing, preflight, form validation and error mapping.


use axum::http::{header, Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use portfolio_contact::Config;
use test_fixtures::{body_json, json_request, setup_test_router, valid_submission};

#[tokio::test]
async fn test_submit_valid_contact_is_created() {
    let (app, repo) = setup_test_router(Config::default());

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact", Some(valid_submission())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["data"]["first_name"], "John");
    assert_eq!(body["data"]["salutation"], "Mr");
    assert!(body["data"]["company"].is_null());
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_invalid_mobile_prefix_is_rejected() {
    let (app, repo) = setup_test_router(Config::default());
    let mut payload = valid_submission();
    payload["mobile"] = json!("1234567890");

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact", Some(payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("prefix"));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_short_message_is_rejected() {
    let (app, repo) = setup_test_router(Config::default());
    let mut payload = valid_submission();
    payload["message"] = json!("short");

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact", Some(payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("too short"));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_preflight_returns_cors_without_body() {
    let (app, _repo) = setup_test_router(Config::default());

    let response = app
        .oneshot(json_request(Method::OPTIONS, "/api/contact", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers().clone();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert!(body_json(response).await.is_null());
}

#[tokio::test]
async fn test_list_returns_newest_first() {
    let (app, _repo) = setup_test_router(Config::default());

    let mut second = valid_submission();
    second["firstName"] = json!("Jane");
    second["lastName"] = json!("Smith");

    for payload in [valid_submission(), second] {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/contact", Some(payload)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(json_request(Method::GET, "/api/contacts", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, OPTIONS"
    );
    let body = body_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["first_name"], "Jane");
    assert_eq!(body["data"][1]["first_name"], "John");
}

#[tokio::test]
async fn test_identical_submissions_create_distinct_records() {
    let (app, repo) = setup_test_router(Config::default());
    let mut ids = Vec::new();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/contact", Some(valid_submission())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(body_json(response).await["data"]["id"].as_i64().unwrap());
    }

    assert_ne!(ids[0], ids[1]);
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn test_submission_is_trimmed_and_enriched() {
    let (app, _repo) = setup_test_router(Config::default());
    let payload = json!({
        "salutation": " Ms ",
        "firstName": "  Jane ",
        "lastName": "Smith  ",
        "email": " jane@example.com ",
        "mobile": "9123456780",
        "company": "   ",
        "message": "  Looking forward to working together  ",
        "userAgent": "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        "language": "en-IN",
        "timezone": "Asia/Kolkata"
    });

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .header("x-real-ip", "198.51.100.23")
        .body(axum::body::Body::from(payload.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["salutation"], "Ms");
    assert_eq!(data["first_name"], "Jane");
    assert_eq!(data["last_name"], "Smith");
    assert_eq!(data["email"], "jane@example.com");
    assert_eq!(data["message"], "Looking forward to working together");
    assert!(data["company"].is_null());
    assert_eq!(data["ip_address"], "198.51.100.23");
    assert_eq!(data["device_type"], "mobile");
    assert_eq!(data["language"], "en-IN");
    assert!(data["referrer"].is_null());
}

#[tokio::test]
async fn test_salutation_optional_when_configured() {
    let config = Config {
        require_salutation: false,
        ..Config::default()
    };
    let (app, _repo) = setup_test_router(config);
    let mut payload = valid_submission();
    payload.as_object_mut().unwrap().remove("salutation");

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact", Some(payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["data"]["salutation"].is_null());
}

#[tokio::test]
async fn test_missing_salutation_rejected_by_default() {
    let (app, _repo) = setup_test_router(Config::default());
    let mut payload = valid_submission();
    payload["salutation"] = json!("");

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact", Some(payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Please fill in all required fields"
    );
}

#[tokio::test]
async fn test_persistence_failure_is_500_with_details() {
    let (app, repo) = setup_test_router(Config::default());
    repo.fail_with("connection reset");

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact", Some(valid_submission())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to submit contact form");
    assert!(body["details"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_persistence_failure_details_can_be_hidden() {
    let config = Config {
        expose_error_details: false,
        ..Config::default()
    };
    let (app, repo) = setup_test_router(config);
    repo.fail_with("connection reset");

    let response = app
        .oneshot(json_request(Method::GET, "/api/contacts", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch contacts");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_malformed_json_is_500() {
    let (app, repo) = setup_test_router(Config::default());
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"firstName\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["success"], false);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let (app, _repo) = setup_test_router(Config::default());

    let response = app
        .oneshot(json_request(Method::GET, "/api/contact", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_validate_endpoint_accumulates_field_errors() {
    let (app, repo) = setup_test_router(Config::default());
    let payload = json!({
        "salutation": "Mr",
        "firstName": "John1",
        "lastName": "Do",
        "email": "john@example",
        "mobile": "5123456789",
        "message": "Hello, I would like to connect."
    });

    let response = app
        .oneshot(json_request(Method::POST, "/api/contact/validate", Some(payload)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
    let fields: Vec<&str> = body["field_errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["firstName", "lastName", "email", "mobile"]);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_health() {
    let (app, _repo) = setup_test_router(Config::default());

    let response = app
        .oneshot(json_request(Method::GET, "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _repo) = setup_test_router(Config::default());

    let response = app
        .oneshot(json_request(Method::GET, "/api-docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"].get("/api/contact").is_some());
    assert!(body["paths"].get("/api/contacts").is_some());
}
