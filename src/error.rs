use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;
use crate::models::FieldError;

#[derive(Debug)]
pub enum AppError {
    /// Body decoded but failed field checks.
    Validation(Vec<FieldError>),
    /// Body could not be decoded into the expected shape.
    Rejection(JsonRejection),
    NotFound(String),
    /// Failure with a caller-safe message; the cause is logged where it happened.
    Failed(String),
    Store(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation failed: {} field(s)", errors.len()),
            AppError::Rejection(rejection) => write!(f, "Rejected body: {}", rejection.body_text()),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Failed(msg) => write!(f, "Failed: {msg}"),
            AppError::Store(err) => write!(f, "Store Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, json!(errors)),
            AppError::Rejection(rejection) => {
                let kind = match rejection {
                    JsonRejection::JsonDataError(_) => "value_error",
                    JsonRejection::JsonSyntaxError(_) => "json_invalid",
                    JsonRejection::MissingJsonContentType(_) => "content_type",
                    _ => "body",
                };
                let msg = rejection.body_text();
                let errors = vec![FieldError {
                    loc: rejection_loc(&msg),
                    msg,
                    kind: kind.to_string(),
                }];
                (rejection.status(), json!(errors))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!(msg)),
            AppError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!(msg)),
            AppError::Store(err) => {
                tracing::error!("Store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Internal Server Error"),
                )
            }
        };

        let body = json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}

/// `["body", "<field>"]` when serde names the missing field, `["body"]` otherwise.
fn rejection_loc(msg: &str) -> Vec<String> {
    let mut loc = vec!["body".to_string()];
    if let Some((_, rest)) = msg.split_once("missing field `") {
        if let Some((field, _)) = rest.split_once('`') {
            loc.push(field.to_string());
        }
    }
    loc
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejection(rejection)
    }
}
