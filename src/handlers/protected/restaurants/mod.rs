pub mod collection;
pub mod payload;
pub mod record;

use uuid::Uuid;

use crate::error::ApiError;

// Re-export handler functions for use in routing
pub use collection::create as restaurant_create;
pub use collection::list as restaurant_list;
pub use record::delete as restaurant_delete;
pub use record::show as restaurant_show;
pub use record::update as restaurant_update;

/// Path ids must be UUIDs; anything else is a 400, not a 404
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_identifier(raw))
}
