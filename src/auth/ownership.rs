//! Single-owner access checks.
//!
//! Handlers that address one record by id call [`require_ownership`] after the
//! fetch and before responding or writing. Listing does not; it asks the store
//! for the caller's records only.

use uuid::Uuid;

use crate::database::Restaurant;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// A record that belongs to exactly one user.
pub trait OwnedResource {
    fn owner_id(&self) -> Uuid;
}

impl OwnedResource for Restaurant {
    fn owner_id(&self) -> Uuid {
        self.owner
    }
}

/// Fails with [`ApiError::Forbidden`] unless `user` owns `resource`.
pub fn require_ownership<R: OwnedResource>(user: &AuthUser, resource: &R) -> Result<(), ApiError> {
    if resource.owner_id() == user.user_id {
        return Ok(());
    }

    tracing::warn!(
        "Ownership check failed: user {} does not own resource owned by {}",
        user.user_id,
        resource.owner_id()
    );
    Err(ApiError::forbidden())
}
