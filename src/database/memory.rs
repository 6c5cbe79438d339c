use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{NewRestaurant, Restaurant, RestaurantChanges};
use super::store::{RestaurantStore, StoreError};

/// Process-local store used for development runs without `DATABASE_URL` and
/// for tests. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryRestaurantStore {
    records: Arc<RwLock<HashMap<Uuid, Restaurant>>>,
}

impl MemoryRestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RestaurantStore for MemoryRestaurantStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Restaurant>, StoreError> {
        let records = self.records.read().await;
        let mut owned: Vec<Restaurant> = records.values().filter(|r| r.owner == owner).cloned().collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError> {
        let now = Utc::now();
        let record = Restaurant {
            id: Uuid::new_v4(),
            name: restaurant.name,
            location: restaurant.location,
            image_url: restaurant.image_url,
            link: restaurant.link,
            owner: restaurant.owner,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, changes: RestaurantChanges) -> Result<Restaurant, StoreError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        changes.apply_to(record);
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        match self.records.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
