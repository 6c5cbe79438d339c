// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: bearer JWT, resolved to `AuthUser` before the handler runs
// Ownership: single-record handlers go through `auth::require_ownership`;
//            listing is scoped by owner in the store query instead

pub mod restaurants; // Ownership-scoped restaurant CRUD
pub mod search;      // Search provider passthrough
