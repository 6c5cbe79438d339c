use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::models::{NewRestaurant, Restaurant, RestaurantChanges};

/// Errors from a restaurant store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record was gone by the time a write reached the store.
    #[error("Restaurant not found: {0}")]
    NotFound(Uuid),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence seam for restaurants. Implementations own id assignment and
/// `created_at`/`updated_at` bookkeeping.
///
/// Reads and writes are independent calls; a record removed between
/// `find_by_id` and `update`/`delete` makes the write return
/// [`StoreError::NotFound`].
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Restaurant>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError>;

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError>;

    async fn update(&self, id: Uuid, changes: RestaurantChanges) -> Result<Restaurant, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
