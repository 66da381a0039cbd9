//! Integration tests for seam-client
//!
//! Each test serves a small axum router standing in for the Seam API and
//! drives it through the public client, so headers, query strings, bodies
//! and error envelopes are checked on the wire.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

use seam_client::testing::{test_options, TestServer, TEST_API_KEY};
use seam_client::{
    ApiResponse, ClientSessionTokenOptions, ConnectWebviewRequest, CreateAccessCodeRequest,
    CreateClientSessionRequest, DeviceSelector, EnvDefaults, ListDevicesRequest, Method,
    RequestDescriptor, RetryConfig, SeamClient, SeamClientOptions, SeamError,
    UpdateClimateSettingScheduleRequest, UpdateDeviceRequest, UpdateNoiseThresholdRequest,
};

// =============================================================================
// Fixtures
// =============================================================================

fn device_json(id: &str) -> Value {
    json!({
        "device_id": id,
        "device_type": "august_lock",
        "capabilities_supported": ["access_code", "lock"],
        "properties": {"name": "Front Door", "online": true, "locked": false},
        "connected_account_id": "ca_1",
        "workspace_id": "ws_1",
        "created_at": "2024-05-01T10:00:00.000Z",
        "errors": [],
        "warnings": []
    })
}

fn action_attempt_json(status: &str) -> Value {
    json!({
        "action_attempt_id": "aa_1",
        "action_type": "LOCK_DOOR",
        "status": status,
        "result": null,
        "error": null
    })
}

fn query_pairs(query: Option<String>) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Counts calls and answers with a fixed status and body
async fn counting_handler(
    State((hits, status, body)): State<(Arc<AtomicUsize>, StatusCode, Value)>,
) -> (StatusCode, Json<Value>) {
    hits.fetch_add(1, Ordering::SeqCst);
    (status, Json(body))
}

/// Accepts connections, reads the request, then hangs up without answering.
/// Returns the endpoint URL and the accept counter.
async fn hang_up_listener() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepts = Arc::new(AtomicUsize::new(0));

    let counter = accepts.clone();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
        }
    });

    (format!("http://{}", addr), accepts)
}

fn client_for(endpoint: &str) -> SeamClient {
    SeamClient::with_options_and_env(test_options().endpoint(endpoint), &EnvDefaults::default())
        .unwrap()
}

// =============================================================================
// Authentication and request shape
// =============================================================================

#[tokio::test]
async fn test_list_devices_sends_bearer_and_query() {
    let router = Router::new().route(
        "/devices/list",
        get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
            assert_eq!(
                header(&headers, "authorization").as_deref(),
                Some("Bearer seam_test_api_key")
            );
            assert_eq!(header(&headers, "seam-workspace"), None);
            assert!(header(&headers, "user-agent")
                .unwrap_or_default()
                .starts_with("Rust SDK v"));

            let pairs = query_pairs(query);
            assert_eq!(
                pairs,
                vec![
                    ("connected_account_id".to_string(), "ca_1".to_string()),
                    ("device_ids[]".to_string(), "dev_1".to_string()),
                    ("device_ids[]".to_string(), "dev_2".to_string()),
                    ("limit".to_string(), "10".to_string()),
                ]
            );

            Json(json!({"ok": true, "devices": [device_json("dev_1"), device_json("dev_2")]}))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let params = ListDevicesRequest {
        connected_account_id: Some("ca_1".into()),
        device_ids: Some(vec!["dev_1".into(), "dev_2".into()]),
        limit: Some(10),
        ..Default::default()
    };
    let devices = server.client.list_devices(&params).await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].device_id, "dev_1");
    assert_eq!(devices[0].name(), Some("Front Door"));
    assert_eq!(devices[0].is_online(), Some(true));
}

#[tokio::test]
async fn test_client_session_token_sends_workspace_header() {
    let router = Router::new().route(
        "/workspaces/get",
        get(|headers: HeaderMap| async move {
            assert_eq!(
                header(&headers, "authorization").as_deref(),
                Some("Bearer seam_cst_token")
            );
            assert_eq!(header(&headers, "seam-workspace").as_deref(), Some("ws_1"));
            Json(json!({
                "ok": true,
                "workspace": {"workspace_id": "ws_1", "name": "Sandbox", "is_sandbox": true}
            }))
        }),
    );
    let options = SeamClientOptions::new()
        .client_session_token("seam_cst_token")
        .workspace_id("ws_1")
        .retry(RetryConfig::disabled());
    let server = TestServer::start_with_options(router, options).await.unwrap();

    let workspace = server.client.get_workspace().await.unwrap();
    assert_eq!(workspace.workspace_id, "ws_1");
    assert!(workspace.is_sandbox);
}

#[tokio::test]
async fn test_custom_headers_and_user_agent() {
    let router = Router::new().route(
        "/workspaces/list",
        get(|headers: HeaderMap| async move {
            assert_eq!(header(&headers, "x-trace").as_deref(), Some("abc"));
            assert_eq!(header(&headers, "user-agent").as_deref(), Some("my-app/1.0"));
            // Extra headers never replace the credential
            assert_eq!(
                header(&headers, "authorization").as_deref(),
                Some("Bearer seam_test_api_key")
            );
            Json(json!({"ok": true, "workspaces": []}))
        }),
    );
    let options = test_options()
        .header("x-trace", "abc")
        .header("authorization", "Bearer spoofed")
        .user_agent("my-app/1.0");
    let server = TestServer::start_with_options(router, options).await.unwrap();

    let workspaces = server.client.list_workspaces().await.unwrap();
    assert!(workspaces.is_empty());
}

#[tokio::test]
async fn test_endpoint_path_prefix_is_kept() {
    let api = Router::new().route(
        "/devices/get",
        get(|RawQuery(query): RawQuery| async move {
            assert_eq!(
                query_pairs(query),
                vec![("name".to_string(), "Front Door".to_string())]
            );
            Json(json!({"ok": true, "device": device_json("dev_1")}))
        }),
    );
    let router = Router::new().nest("/api", api);
    let server = TestServer::start(router).await.unwrap();

    let client = SeamClient::with_options_and_env(
        test_options().endpoint(format!("{}/api", server.base_url())),
        &EnvDefaults::default(),
    )
    .unwrap();

    let device = client
        .get_device(&DeviceSelector::name("Front Door"))
        .await
        .unwrap();
    assert_eq!(device.device_id, "dev_1");
}

#[tokio::test]
async fn test_scheduled_access_code_body() {
    let router = Router::new().route(
        "/access_codes/create",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(
                body,
                json!({
                    "device_id": "dev_1",
                    "name": "Guest",
                    "starts_at": "2024-06-01T15:00:00Z",
                    "ends_at": "2024-06-03T11:00:00Z"
                })
            );
            Json(json!({
                "ok": true,
                "access_code": {
                    "access_code_id": "ac_1",
                    "device_id": "dev_1",
                    "name": "Guest",
                    "code": "4821",
                    "type": "time_bound",
                    "status": "setting",
                    "starts_at": "2024-06-01T15:00:00.000Z",
                    "ends_at": "2024-06-03T11:00:00.000Z"
                }
            }))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let request = CreateAccessCodeRequest::scheduled(
        "dev_1",
        "2024-06-01T15:00:00Z",
        "2024-06-03T11:00:00Z",
    )
    .with_name("Guest");
    let code = server.client.create_access_code(&request).await.unwrap();

    assert_eq!(code.access_code_id, "ac_1");
    assert_eq!(code.code.as_deref(), Some("4821"));
    assert_eq!(code.code_type.as_deref(), Some("time_bound"));
}

#[tokio::test]
async fn test_methods_per_operation() {
    let router = Router::new()
        .route(
            "/connect_webviews/delete",
            delete(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"connect_webview_id": "cw_1"}));
                Json(json!({"ok": true}))
            }),
        )
        .route(
            "/noise_sensors/noise_thresholds/update",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body["noise_threshold_id"], "nt_1");
                assert_eq!(body["noise_threshold_decibels"], 60.0);
                Json(json!({"ok": true, "action_attempt": action_attempt_json("pending")}))
            }),
        )
        .route(
            "/thermostats/climate_setting_schedules/update",
            patch(|Json(body): Json<Value>| async move {
                assert_eq!(
                    body,
                    json!({"climate_setting_schedule_id": "css_1", "name": "Winter"})
                );
                Json(json!({
                    "ok": true,
                    "climate_setting_schedule": {
                        "climate_setting_schedule_id": "css_1",
                        "device_id": "dev_1",
                        "name": "Winter",
                        "hvac_mode_setting": "heat"
                    }
                }))
            }),
        )
        .route(
            "/client_sessions/get_or_create",
            put(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"user_identifier_key": "user_1"}));
                Json(json!({
                    "ok": true,
                    "client_session": {"client_session_id": "cs_1", "token": "seam_cst_1"}
                }))
            }),
        );
    let server = TestServer::start(router).await.unwrap();
    let client = &server.client;

    client
        .delete_connect_webview(&ConnectWebviewRequest::new("cw_1"))
        .await
        .unwrap();

    let attempt = client
        .update_noise_threshold(&UpdateNoiseThresholdRequest {
            device_id: "dev_1".into(),
            noise_threshold_id: "nt_1".into(),
            noise_threshold_decibels: Some(60.0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(attempt.is_pending());

    let schedule = client
        .update_climate_setting_schedule(&UpdateClimateSettingScheduleRequest {
            climate_setting_schedule_id: "css_1".into(),
            name: Some("Winter".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(schedule.climate_setting.hvac_mode_setting.as_deref(), Some("heat"));

    let session = client
        .get_or_create_client_session(&CreateClientSessionRequest {
            user_identifier_key: "user_1".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(session.token.as_deref(), Some("seam_cst_1"));
}

#[tokio::test]
async fn test_unit_operations_accept_empty_bodies() {
    let router = Router::new()
        .route(
            "/devices/update",
            post(|| async { Json(json!({"ok": true})) }),
        )
        .route("/workspaces/reset_sandbox", post(|| async { StatusCode::OK }));
    let server = TestServer::start(router).await.unwrap();

    server
        .client
        .update_device(&UpdateDeviceRequest {
            device_id: "dev_1".into(),
            name: Some("Back Door".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    server.client.reset_sandbox_workspace().await.unwrap();
}

#[tokio::test]
async fn test_lock_door_returns_pending_attempt() {
    let router = Router::new()
        .route(
            "/locks/lock_door",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"device_id": "dev_1"}));
                Json(json!({"ok": true, "action_attempt": action_attempt_json("pending")}))
            }),
        )
        .route(
            "/action_attempts/get",
            get(|RawQuery(query): RawQuery| async move {
                assert_eq!(
                    query_pairs(query),
                    vec![("action_attempt_id".to_string(), "aa_1".to_string())]
                );
                Json(json!({"ok": true, "action_attempt": action_attempt_json("success")}))
            }),
        );
    let server = TestServer::start(router).await.unwrap();

    let attempt = server.client.lock_door("dev_1").await.unwrap();
    assert_eq!(attempt.status, "pending");

    let attempt = server.client.get_action_attempt("aa_1").await.unwrap();
    assert!(!attempt.is_pending());
}

#[tokio::test]
async fn test_make_request_with_custom_descriptor() {
    let router = Router::new().route(
        "/devices/list",
        get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
            assert_eq!(header(&headers, "x-request-tag").as_deref(), Some("custom"));
            assert_eq!(
                query_pairs(query),
                vec![("device_type".to_string(), "schlage_lock".to_string())]
            );
            Json(json!({"ok": true, "devices": []}))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let request = RequestDescriptor::new(Method::GET, "/devices/list")
        .query_param("device_type", "schlage_lock")
        .header("x-request-tag", "custom")
        .unwrap();
    let response = server
        .client
        .make_request::<Value>(request)
        .await
        .unwrap();

    assert!(response.ok);
    assert_eq!(response.payload, json!({"devices": []}));
}

// =============================================================================
// Error normalization
// =============================================================================

#[tokio::test]
async fn test_invalid_input_becomes_malformed_input() {
    let router = Router::new().route(
        "/access_codes/create",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                [("seam-request-id", "req_123")],
                Json(json!({
                    "error": {
                        "type": "invalid_input",
                        "message": "ends_at must be after starts_at",
                        "validation_errors": {"ends_at": {"_errors": ["too early"]}}
                    },
                    "ok": false
                })),
            )
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let request = CreateAccessCodeRequest::scheduled(
        "dev_1",
        "2024-06-03T11:00:00Z",
        "2024-06-01T15:00:00Z",
    );
    let err = server.client.create_access_code(&request).await.unwrap_err();

    match err {
        SeamError::MalformedInput {
            status,
            request_id,
            message,
            validation_errors,
        } => {
            assert_eq!(status, 400);
            assert_eq!(request_id.as_deref(), Some("req_123"));
            assert_eq!(message, "ends_at must be after starts_at");
            assert_eq!(validation_errors, json!({"ends_at": {"_errors": ["too early"]}}));
        }
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let router = Router::new().route(
        "/devices/get",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                [("seam-request-id", "req_404")],
                Json(json!({
                    "error": {"type": "device_not_found", "message": "Device not found"},
                    "ok": false
                })),
            )
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let err = server
        .client
        .get_device(&DeviceSelector::id("dev_missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.request_id(), Some("req_404"));
    match err {
        SeamError::Api(api) => {
            assert_eq!(api.error_type.as_deref(), Some("device_not_found"));
            assert_eq!(api.message, "Device not found");
        }
        other => panic!("expected Api, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_and_post_not_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/locks/unlock_door",
            post(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (StatusCode::BAD_GATEWAY, "upstream unavailable")
            }),
        )
        .with_state(hits.clone());
    let server = TestServer::start(router).await.unwrap();

    let err = server.client.unlock_door("dev_1").await.unwrap_err();

    match err {
        SeamError::Api(api) => {
            assert_eq!(api.status, 502);
            assert_eq!(api.error_type, None);
            assert_eq!(api.message, "HTTP 502");
        }
        other => panic!("expected Api, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unexpected_success_shape_is_parse_error() {
    let router = Router::new().route(
        "/events/get",
        get(|| async { Json(json!({"ok": true, "something_else": {}})) }),
    );
    let server = TestServer::start(router).await.unwrap();

    let err = server.client.get_event("evt_1").await.unwrap_err();
    assert!(matches!(err, SeamError::ParseError(_)));
}

// =============================================================================
// Retries and transport failures
// =============================================================================

#[tokio::test]
async fn test_get_retried_until_success() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/webhooks/list",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                let attempt = hits.fetch_add(1, Ordering::SeqCst);
                if attempt < 2 {
                    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({})))
                } else {
                    (StatusCode::OK, Json(json!({"ok": true, "webhooks": []})))
                }
            }),
        )
        .with_state(hits.clone());
    let server = TestServer::start(router).await.unwrap();

    let webhooks = server.client.list_webhooks().await.unwrap();
    assert!(webhooks.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_get_gives_up_after_max_retries() {
    let hits = Arc::new(AtomicUsize::new(0));
    let body = json!({"error": {"type": "internal_server_error", "message": "boom"}});
    let router = Router::new()
        .route("/connect_webviews/list", get(counting_handler))
        .with_state((hits.clone(), StatusCode::INTERNAL_SERVER_ERROR, body));
    let server = TestServer::start(router).await.unwrap();

    let err = server.client.list_connect_webviews().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let hits = Arc::new(AtomicUsize::new(0));
    let body = json!({"error": {"type": "unauthorized", "message": "Unauthorized"}});
    let router = Router::new()
        .route("/connected_accounts/list", get(counting_handler))
        .with_state((hits.clone(), StatusCode::UNAUTHORIZED, body));
    let server = TestServer::start(router).await.unwrap();

    let err = server.client.list_connected_accounts().await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // Reserve a port, then free it so nothing is listening
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let client = SeamClient::with_options_and_env(
        test_options().endpoint(format!("http://{}", addr)),
        &EnvDefaults::default(),
    )
    .unwrap();

    let err = client.list_events(&Default::default()).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_dropped_connections_are_retried() {
    let (endpoint, accepts) = hang_up_listener().await;
    let client = client_for(&endpoint);

    let err = client
        .list_devices(&ListDevicesRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status(), None);
    // One attempt plus the two default retries
    assert_eq!(accepts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_post_retried_on_transport_failure() {
    let (endpoint, accepts) = hang_up_listener().await;
    let client = client_for(&endpoint);

    let err = client.unlock_door("dev_1").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(accepts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_transport_retries_follow_retry_config() {
    let (endpoint, accepts) = hang_up_listener().await;
    let client = SeamClient::with_options_and_env(
        test_options().endpoint(endpoint).retry(RetryConfig::disabled()),
        &EnvDefaults::default(),
    )
    .unwrap();

    let err = client
        .list_devices(&ListDevicesRequest::default())
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(accepts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_per_request_timeout() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/devices/list",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(500)).await;
                Json(json!({"ok": true, "devices": []}))
            }),
        )
        .with_state(hits.clone());
    let server = TestServer::start(router).await.unwrap();

    let request = RequestDescriptor::get("/devices/list").timeout(Duration::from_millis(50));
    let err = server
        .client
        .make_request::<Value>(request)
        .await
        .unwrap_err();

    match err {
        SeamError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected Transport, got {:?}", other),
    }
    // Timeouts are never retried
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Client session token exchange
// =============================================================================

#[tokio::test]
async fn test_session_token_with_publishable_key() {
    let router = Router::new().route(
        "/internal/client_sessions/create",
        post(|headers: HeaderMap| async move {
            assert_eq!(
                header(&headers, "seam-publishable-key").as_deref(),
                Some("seam_pk1_abc")
            );
            assert_eq!(header(&headers, "seam-api-key"), None);
            assert_eq!(
                header(&headers, "seam-user-identifier-key").as_deref(),
                Some("user_1")
            );
            assert_eq!(header(&headers, "authorization"), None);
            Json(json!({
                "ok": true,
                "client_session": {
                    "client_session_id": "cs_1",
                    "token": "seam_cst_abc",
                    "user_identifier_key": "user_1"
                }
            }))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let options = ClientSessionTokenOptions::new("seam_pk1_abc")
        .user_identifier_key("user_1")
        .endpoint(server.base_url());
    let response =
        SeamClient::get_client_session_token_with_env(options, &EnvDefaults::default())
            .await
            .unwrap();

    let session = response.into_result().unwrap().client_session;
    assert_eq!(session.token.as_deref(), Some("seam_cst_abc"));
}

#[tokio::test]
async fn test_session_token_with_api_key_header() {
    let router = Router::new().route(
        "/internal/client_sessions/create",
        post(|headers: HeaderMap| async move {
            assert_eq!(
                header(&headers, "seam-api-key").as_deref(),
                Some(TEST_API_KEY)
            );
            assert_eq!(header(&headers, "seam-publishable-key"), None);
            Json(json!({"ok": true, "client_session": {"client_session_id": "cs_2"}}))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    // Endpoint comes from the environment snapshot
    let env = EnvDefaults {
        endpoint: Some(server.base_url()),
        ..Default::default()
    };
    let response =
        SeamClient::get_client_session_token_with_env(ClientSessionTokenOptions::new(TEST_API_KEY), &env)
            .await
            .unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_session_token_error_envelope_in_success_body() {
    let router = Router::new().route(
        "/internal/client_sessions/create",
        post(|| async {
            Json(json!({
                "ok": false,
                "error": {"type": "publishable_key_invalid", "message": "Bad key"}
            }))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let options = ClientSessionTokenOptions::new("seam_pk1_bad").endpoint(server.base_url());
    let response =
        SeamClient::get_client_session_token_with_env(options, &EnvDefaults::default())
            .await
            .unwrap();

    match response {
        ApiResponse::Errored(errored) => {
            assert!(!errored.ok);
            assert_eq!(
                errored.error.error_type.as_deref(),
                Some("publishable_key_invalid")
            );
            assert_eq!(errored.error.message, "Bad key");
        }
        ApiResponse::Success(_) => panic!("expected an errored response"),
    }
}

#[tokio::test]
async fn test_session_token_untyped_error_in_success_body() {
    let router = Router::new().route(
        "/internal/client_sessions/create",
        post(|| async {
            Json(json!({"ok": false, "error": {"message": "Publishable key not found"}}))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let options = ClientSessionTokenOptions::new("seam_pk1_missing").endpoint(server.base_url());
    let response =
        SeamClient::get_client_session_token_with_env(options, &EnvDefaults::default())
            .await
            .unwrap();

    match response {
        ApiResponse::Errored(errored) => {
            assert!(!errored.ok);
            assert_eq!(errored.error.error_type, None);
            assert_eq!(errored.error.message, "Publishable key not found");
        }
        ApiResponse::Success(_) => panic!("expected an errored response"),
    }
}

#[tokio::test]
async fn test_session_token_stalled_endpoint_times_out() {
    let router = Router::new().route(
        "/internal/client_sessions/create",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({"ok": true, "client_session": {"client_session_id": "cs_3"}}))
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let options = ClientSessionTokenOptions::new("seam_pk1_abc")
        .endpoint(server.base_url())
        .timeout(Duration::from_millis(50));
    let err = SeamClient::get_client_session_token_with_env(options, &EnvDefaults::default())
        .await
        .unwrap_err();

    match err {
        SeamError::Transport(inner) => assert!(inner.is_timeout()),
        other => panic!("expected Transport, got {:?}", other),
    }
}

#[tokio::test]
async fn test_session_token_non_2xx_is_api_error() {
    let router = Router::new().route(
        "/internal/client_sessions/create",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": {"type": "invalid_input", "message": "user_identifier_key required"}
                })),
            )
        }),
    );
    let server = TestServer::start(router).await.unwrap();

    let options = ClientSessionTokenOptions::new("seam_pk1_abc").endpoint(server.base_url());
    let err = SeamClient::get_client_session_token_with_env(options, &EnvDefaults::default())
        .await
        .unwrap_err();

    // Not MalformedInput: this operation reports every non-2xx the same way
    match err {
        SeamError::Api(api) => {
            assert_eq!(api.status, 400);
            assert_eq!(api.error_type.as_deref(), Some("invalid_input"));
        }
        other => panic!("expected Api, got {:?}", other),
    }
}

// =============================================================================
// Workflow
// =============================================================================

#[tokio::test]
async fn test_guest_access_workflow() {
    let router = Router::new()
        .route(
            "/devices/list",
            get(|| async { Json(json!({"ok": true, "devices": [device_json("dev_1")]})) }),
        )
        .route(
            "/access_codes/create",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"device_id": "dev_1", "code": "1234"}));
                Json(json!({
                    "ok": true,
                    "access_code": {"access_code_id": "ac_1", "code": "1234", "type": "ongoing"}
                }))
            }),
        )
        .route(
            "/access_codes/list",
            get(|RawQuery(query): RawQuery| async move {
                assert_eq!(
                    query_pairs(query),
                    vec![("device_id".to_string(), "dev_1".to_string())]
                );
                Json(json!({
                    "ok": true,
                    "access_codes": [{"access_code_id": "ac_1", "code": "1234"}]
                }))
            }),
        )
        .route(
            "/access_codes/delete",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({"access_code_id": "ac_1"}));
                Json(json!({"ok": true, "action_attempt": action_attempt_json("pending")}))
            }),
        );
    let server = TestServer::start(router).await.unwrap();
    let client = server.client();

    let devices = client.list_devices(&Default::default()).await.unwrap();
    let device_id = devices[0].device_id.clone();

    let created = client
        .create_access_code(&CreateAccessCodeRequest::ongoing(&device_id).with_code("1234"))
        .await
        .unwrap();

    let codes = client
        .list_access_codes(&seam_client::ListAccessCodesRequest::for_device(&device_id))
        .await
        .unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].access_code_id, created.access_code_id);

    let attempt = client
        .delete_access_code(&seam_client::DeleteAccessCodeRequest::new(&created.access_code_id))
        .await
        .unwrap();
    assert!(attempt.is_pending());

    server.shutdown().await;
}
