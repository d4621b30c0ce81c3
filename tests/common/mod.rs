use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::Document;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use evolute_api::config::{Config, CorsOrigins};
use evolute_api::db::{DocumentStore, MemoryStore, StoreError};

/// A running test server instance backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Create a status check, return the record JSON.
    pub async fn create_status(&self, client_name: &str) -> Value {
        let (body, status) = self
            .post("/api/status", &json!({ "client_name": client_name }))
            .await;
        assert_eq!(status, StatusCode::OK, "create status non-200: {body}");
        body
    }
}

/// Store double whose writes and reads always fail.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_one(&self, _collection: &str, _doc: Document) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find(&self, _collection: &str, _limit: usize) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn shutdown(&self) {}
}

pub fn test_config(cors_origins: CorsOrigins) -> Config {
    Config {
        mongo_url: "mongodb://unused".to_string(),
        db_name: "evolute_test".to_string(),
        cors_origins,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app over a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let addr = serve(store.clone(), test_config(CorsOrigins::Any)).await;
    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}

/// Spawn the router over an arbitrary store, return its address.
pub async fn serve(store: Arc<dyn DocumentStore>, config: Config) -> SocketAddr {
    let app = evolute_api::build_app(store, config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}
