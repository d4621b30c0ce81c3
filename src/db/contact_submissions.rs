use mongodb::bson;

use super::{DocumentStore, LIST_LIMIT, StoreError};
use crate::models::ContactSubmission;

pub const COLLECTION: &str = "contact_submissions";

pub async fn create(
    store: &dyn DocumentStore,
    submission: &ContactSubmission,
) -> Result<(), StoreError> {
    let doc = bson::to_document(submission)?;
    store.insert_one(COLLECTION, doc).await
}

pub async fn list(store: &dyn DocumentStore) -> Result<Vec<ContactSubmission>, StoreError> {
    store
        .find(COLLECTION, LIST_LIMIT)
        .await?
        .into_iter()
        .map(|doc| bson::from_document(doc).map_err(StoreError::from))
        .collect()
}
