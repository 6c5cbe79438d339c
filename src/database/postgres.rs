use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseManager;
use super::models::{NewRestaurant, Restaurant, RestaurantChanges};
use super::store::{RestaurantStore, StoreError};

const COLUMNS: &str = "id, name, location, image_url, link, owner, created_at, updated_at";

/// Restaurant store backed by the `restaurants` table
#[derive(Clone)]
pub struct PgRestaurantStore {
    pool: PgPool,
}

impl PgRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantStore for PgRestaurantStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Restaurant>, StoreError> {
        let sql = format!("SELECT {} FROM restaurants WHERE owner = $1 ORDER BY created_at, id", COLUMNS);
        let rows = sqlx::query_as::<_, Restaurant>(&sql).bind(owner).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, StoreError> {
        let sql = format!("SELECT {} FROM restaurants WHERE id = $1", COLUMNS);
        let row = sqlx::query_as::<_, Restaurant>(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant, StoreError> {
        let sql = format!(
            "INSERT INTO restaurants (id, name, location, image_url, link, owner)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            COLUMNS
        );

        let row = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(Uuid::new_v4())
            .bind(&restaurant.name)
            .bind(&restaurant.location)
            .bind(&restaurant.image_url)
            .bind(&restaurant.link)
            .bind(restaurant.owner)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: RestaurantChanges) -> Result<Restaurant, StoreError> {
        // COALESCE keeps the stored value for every field the caller left out
        let sql = format!(
            "UPDATE restaurants SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                image_url = COALESCE($4, image_url),
                link = COALESCE($5, link),
                updated_at = now()
             WHERE id = $1
             RETURNING {}",
            COLUMNS
        );

        sqlx::query_as::<_, Restaurant>(&sql)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.location)
            .bind(&changes.image_url)
            .bind(&changes.link)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
