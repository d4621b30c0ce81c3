use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;

use super::{DocumentStore, StoreError};

/// In-process store with insertion-ordered collections.
///
/// Mirrors the Mongo behaviour the service relies on: inserts get an `_id`,
/// reads strip it and honour the limit.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.lock().get(collection).map_or(0, Vec::len)
    }

    /// Raw documents as stored, including `_id`.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock().get(collection).cloned().unwrap_or_default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Document>>> {
        // A panic while holding the lock leaves plain data behind; keep serving it.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<(), StoreError> {
        if !doc.contains_key("_id") {
            doc.insert("_id", ObjectId::new());
        }
        self.lock()
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(())
    }

    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError> {
        let docs = self
            .lock()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .take(limit)
                    .map(|doc| {
                        let mut doc = doc.clone();
                        doc.remove("_id");
                        doc
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    #[tokio::test]
    async fn find_strips_internal_id_and_caps() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.insert_one("things", doc! { "n": i }).await.unwrap();
        }

        let docs = store.find("things", 3).await.unwrap();
        assert_eq!(docs.len(), 3);
        assert!(docs.iter().all(|d| !d.contains_key("_id")));
        assert_eq!(docs[0].get_i32("n").unwrap(), 0);

        assert!(store.documents("things").iter().all(|d| d.contains_key("_id")));
    }

    #[tokio::test]
    async fn missing_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.find("nothing", 10).await.unwrap().is_empty());
        assert_eq!(store.count("nothing"), 0);
    }
}
