pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::DatabaseManager;
pub use memory::MemoryRestaurantStore;
pub use models::{NewRestaurant, Restaurant, RestaurantChanges};
pub use postgres::PgRestaurantStore;
pub use store::{RestaurantStore, StoreError};
