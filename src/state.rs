use std::sync::Arc;

use crate::db::DocumentStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}
