pub mod contact;
pub mod status;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::state::SharedState;

pub const API_NAME: &str = "Evolute Marketing API";

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        // Status checks
        .route("/api/status", get(status::list).post(status::create))
        // Contact
        .route("/api/contact", post(contact::submit))
        .route("/api/contacts", get(contact::list))
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": API_NAME }))
}
