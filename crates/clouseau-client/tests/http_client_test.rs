use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::{HeaderMap as AxumHeaderMap, Method as AxumMethod, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use clouseau_client::http_client::HttpApiClient;
use clouseau_client::{ApiError, ClientError, ClouseauApi, RequestOptions};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde_json::{json, Value};
use tokio::net::TcpListener;

fn session_json(id: i64, name: &str, description: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": description,
        "created_at": "2024-01-15T10:30:00Z",
        "updated_at": "2024-01-15T11:00:00Z"
    })
}

async fn list_sessions() -> Json<Value> {
    Json(json!({
        "items": [
            session_json(2, "Second", None),
            session_json(1, "First", Some("oldest")),
        ],
        "total": 2,
        "page": 1,
        "page_size": 20
    }))
}

async fn get_session(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    if id == 1 {
        return Ok(Json(session_json(1, "First", Some("oldest"))));
    }
    Err(StatusCode::NOT_FOUND)
}

async fn delete_session(Path(id): Path<i64>) -> StatusCode {
    if id == 1 {
        return StatusCode::NO_CONTENT;
    }
    StatusCode::NOT_FOUND
}

async fn list_conversations(Path(session_id): Path<i64>) -> Json<Value> {
    Json(json!({
        "items": [{
            "id": 10,
            "session_id": session_id,
            "title": "Conversation",
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-15T10:30:00Z"
        }],
        "total": 1,
        "page": 1,
        "page_size": 20
    }))
}

async fn list_exchanges(Path(conversation_id): Path<i64>) -> Json<Value> {
    Json(json!({
        "items": [{
            "id": 100,
            "conversation_id": conversation_id,
            "user_message": "Hello",
            "assistant_message": "Hi there!",
            "model": null,
            "input_tokens": null,
            "output_tokens": 20,
            "created_at": "2024-01-15T10:30:00Z"
        }],
        "total": 1,
        "page": 1,
        "page_size": 50
    }))
}

async fn echo(method: AxumMethod, headers: AxumHeaderMap, body: String) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };

    Json(json!({
        "method": method.as_str(),
        "content_type": header("content-type"),
        "x_trace": header("x-trace"),
        "body": body,
    }))
}

async fn server_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn start_mock_server() -> SocketAddr {
    let app = Router::new()
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/{id}", get(get_session).delete(delete_session))
        .route(
            "/api/conversations/by-session/{session_id}",
            get(list_conversations),
        )
        .route(
            "/api/exchanges/by-conversation/{conversation_id}",
            get(list_exchanges),
        )
        .route("/api/echo", get(echo).post(echo))
        .route("/api/broken", get(server_error))
        .route("/health", get(health));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> HttpApiClient {
    HttpApiClient::new(format!("http://{addr}/"))
}

#[tokio::test]
async fn test_fetch_api_sends_json_content_type() {
    let client = client_for(start_mock_server().await);

    let echoed: Value = client
        .fetch_api("/echo", RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["content_type"], "application/json");
    assert!(echoed["x_trace"].is_null());
}

#[tokio::test]
async fn test_fetch_api_merges_custom_options() {
    let client = client_for(start_mock_server().await);

    let mut headers = HeaderMap::new();
    headers.insert("x-trace", HeaderValue::from_static("abc"));
    let options = RequestOptions::new(Method::POST)
        .with_headers(headers)
        .with_body(json!({"data": "test"}));

    let echoed: Value = client.fetch_api("/echo", options).await.unwrap();

    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["x_trace"], "abc");
    assert_eq!(echoed["body"], r#"{"data":"test"}"#);
}

#[tokio::test]
async fn test_fetch_api_404_is_api_error() {
    let client = client_for(start_mock_server().await);

    let err = client
        .fetch_api::<Value>("/missing", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::Api(api_err) => {
            assert_eq!(api_err.status, 404);
            assert_eq!(api_err.status_text, "Not Found");
            assert_eq!(api_err.to_string(), "Not Found");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_api_500_is_api_error() {
    let client = client_for(start_mock_server().await);

    let err = client
        .fetch_api::<Value>("/broken", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr)
        .fetch_api::<Value>("/sessions", RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_list_sessions_reads_items_in_server_order() {
    let client = client_for(start_mock_server().await);

    let sessions = client.list_sessions().await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, "2");
    assert!(sessions[0].description.is_none());
    assert_eq!(sessions[1].id, "1");
    assert_eq!(sessions[1].description.as_deref(), Some("oldest"));
}

#[tokio::test]
async fn test_get_session_not_found_downcasts_to_api_error() {
    let client = client_for(start_mock_server().await);

    assert_eq!(client.get_session("1").await.unwrap().name, "First");

    let err = client.get_session("99").await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ApiError>(),
        Some(&ApiError::new(404, "Not Found"))
    );
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_list_conversations_and_exchanges() {
    let client = client_for(start_mock_server().await);

    let conversations = client.list_conversations("7").await.unwrap();
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].session_id, "7");

    let exchanges = client.list_exchanges("10").await.unwrap();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].conversation_id, "10");
    assert!(exchanges[0].model.is_none());
    assert!(exchanges[0].input_tokens.is_none());
    assert_eq!(exchanges[0].output_tokens, Some(20));
}

#[tokio::test]
async fn test_delete_session() {
    let client = client_for(start_mock_server().await);

    client.delete_session("1").await.unwrap();

    let err = client.delete_session("2").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_health_check() {
    let client = client_for(start_mock_server().await);
    client.health_check().await.unwrap();
}
