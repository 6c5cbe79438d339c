// handlers/mod.rs - Two handler tiers
//
// Public (no auth) and Protected (bearer JWT required). The protected tier is
// wrapped by `middleware::jwt_auth_middleware` in `app::protected_routes`, so
// every handler under it can rely on an `Extension<AuthUser>`.
pub mod protected;
pub mod public;
