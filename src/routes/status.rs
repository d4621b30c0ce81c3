use axum::Json;
use axum::extract::State;

use crate::db;
use crate::error::AppError;
use crate::extractor::ValidatedJson;
use crate::models::{StatusCheck, StatusCheckCreate};
use crate::state::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    ValidatedJson(input): ValidatedJson<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = StatusCheck::new(input.client_name);
    db::status_checks::create(state.store.as_ref(), &check).await?;
    Ok(Json(check))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = db::status_checks::list(state.store.as_ref()).await?;
    Ok(Json(checks))
}
