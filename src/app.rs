use axum::{http::HeaderValue, middleware, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected API
        .merge(protected_routes(state.clone()))
        .fallback(public::not_found)
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Every route here passes the bearer-token gate before its handler runs.
/// `route_layer` keeps unmatched paths out of the gate so they still 404.
fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::restaurants;

    Router::new()
        .route(
            "/restaurants",
            get(restaurants::restaurant_list).post(restaurants::restaurant_create),
        )
        .route(
            "/restaurants/:id",
            get(restaurants::restaurant_show)
                .patch(restaurants::restaurant_update)
                .delete(restaurants::restaurant_delete),
        )
        .route("/search", get(protected::search::search))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

/// Permissive in development, configured origins elsewhere
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
