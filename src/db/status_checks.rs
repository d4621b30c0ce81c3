use mongodb::bson;

use super::{DocumentStore, LIST_LIMIT, StoreError};
use crate::models::StatusCheck;

pub const COLLECTION: &str = "status_checks";

pub async fn create(store: &dyn DocumentStore, check: &StatusCheck) -> Result<(), StoreError> {
    let doc = bson::to_document(check)?;
    store.insert_one(COLLECTION, doc).await
}

/// Up to `LIST_LIMIT` checks, in store order.
pub async fn list(store: &dyn DocumentStore) -> Result<Vec<StatusCheck>, StoreError> {
    store
        .find(COLLECTION, LIST_LIMIT)
        .await?
        .into_iter()
        .map(|doc| bson::from_document(doc).map_err(StoreError::from))
        .collect()
}
