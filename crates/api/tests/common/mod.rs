#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use practices_api::config::ServerConfig;
use practices_api::logging::LogFormat;
use practices_api::router::build_app_router;
use practices_api::state::AppState;
use practices_db::memory::InMemoryPracticeStore;
use practices_db::models::practice::{NewPractice, Practice};
use practices_db::{PracticeStore, StorageError, StoreConfig};
use tower::ServiceExt;

/// Build a test `ServerConfig` backed by the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        store: StoreConfig::Memory,
    }
}

/// Build the full application router (same middleware stack as production)
/// over a fresh, empty in-memory store.
///
/// The returned router is cheap to clone; clones share the same store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryPracticeStore::new()))
}

/// Build the full application router over the given store.
pub fn build_test_app_with(store: Arc<dyn PracticeStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    post_raw(app, uri, json.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a practice through the API and return the `data` object.
pub async fn create_practice(
    app: &Router,
    name: &str,
    management: &str,
    practice: &str,
) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/practices",
        serde_json::json!({
            "name": name,
            "management": management,
            "practice": practice,
            "date": "2024-06-15",
        }),
    )
    .await;
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// A store whose every operation fails, for exercising the 500 path.
pub struct FailingStore;

fn unavailable() -> StorageError {
    StorageError::Backend("connection refused".to_string())
}

#[async_trait]
impl PracticeStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Err(unavailable())
    }

    async fn insert(&self, _input: &NewPractice) -> Result<Practice, StorageError> {
        Err(unavailable())
    }

    async fn list_recent(&self) -> Result<Vec<Practice>, StorageError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Practice>, StorageError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, StorageError> {
        Err(unavailable())
    }

    async fn search(&self, _term: &str) -> Result<Vec<Practice>, StorageError> {
        Err(unavailable())
    }

    async fn close(&self) {}
}

// ---------------------------------------------------------------------------
// Misbehaving store
// ---------------------------------------------------------------------------

/// How [`MisbehavingStore::list_recent`] misbehaves.
#[derive(Clone, Copy)]
pub enum Misbehaviour {
    /// Never finishes within any sane request timeout.
    Hang,
    /// Panics inside the handler.
    Panic,
}

/// A store whose listing misbehaves; everything else reports empty.
pub struct MisbehavingStore(pub Misbehaviour);

#[async_trait]
impl PracticeStore for MisbehavingStore {
    fn backend_name(&self) -> &'static str {
        "misbehaving"
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn insert(&self, _input: &NewPractice) -> Result<Practice, StorageError> {
        Err(unavailable())
    }

    async fn list_recent(&self) -> Result<Vec<Practice>, StorageError> {
        match self.0 {
            Misbehaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
            Misbehaviour::Panic => panic!("listing exploded"),
        }
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Practice>, StorageError> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, StorageError> {
        Ok(false)
    }

    async fn search(&self, _term: &str) -> Result<Vec<Practice>, StorageError> {
        Ok(Vec::new())
    }

    async fn close(&self) {}
}
