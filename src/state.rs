use std::sync::Arc;

use crate::auth::TokenKeys;
use crate::database::RestaurantStore;
use crate::services::SearchClient;

/// Shared handles cloned into every request. The store is the only shared
/// mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RestaurantStore>,
    pub search: Arc<dyn SearchClient>,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn RestaurantStore>, search: Arc<dyn SearchClient>, tokens: TokenKeys) -> Self {
        Self { store, search, tokens }
    }
}
