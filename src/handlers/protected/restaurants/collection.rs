use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};

use crate::database::Restaurant;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::payload::RestaurantBody;

/// GET /restaurants - the caller's restaurants only
pub async fn list(State(state): State<AppState>, Extension(user): Extension<AuthUser>) -> ApiResult<Vec<Restaurant>> {
    let restaurants = state.store.find_by_owner(user.user_id).await?;
    Ok(ApiResponse::ok("restaurants", restaurants))
}

/// POST /restaurants - create a restaurant owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<RestaurantBody>, JsonRejection>,
) -> ApiResult<Restaurant> {
    let Json(body) = body?;
    let new = body.into_fields()?.into_new(user.user_id)?;

    let restaurant = state.store.create(new).await?;
    tracing::info!("User {} created restaurant {}", user.user_id, restaurant.id);

    Ok(ApiResponse::created("restaurant", restaurant))
}
