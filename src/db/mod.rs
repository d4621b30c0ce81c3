pub mod contact_submissions;
pub mod memory;
pub mod mongo;
pub mod status_checks;

use async_trait::async_trait;
use mongodb::bson::{self, Document};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Hard cap on documents returned by any listing.
pub const LIST_LIMIT: usize = 1000;

#[derive(Debug)]
pub enum StoreError {
    Backend(mongodb::error::Error),
    Encode(bson::ser::Error),
    Decode(bson::de::Error),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Backend(err) => write!(f, "Store backend error: {err}"),
            StoreError::Encode(err) => write!(f, "Document encode error: {err}"),
            StoreError::Decode(err) => write!(f, "Document decode error: {err}"),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err)
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        StoreError::Encode(err)
    }
}

impl From<bson::de::Error> for StoreError {
    fn from(err: bson::de::Error) -> Self {
        StoreError::Decode(err)
    }
}

/// A schema-flexible collection store.
///
/// Documents come back without the store-internal `_id` field. Listing order
/// is whatever the backend yields.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<(), StoreError>;

    /// Return at most `limit` documents from `collection`.
    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Release the underlying connection. Called once at process exit.
    async fn shutdown(&self);
}
