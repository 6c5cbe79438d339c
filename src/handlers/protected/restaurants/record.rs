use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::require_ownership;
use crate::database::Restaurant;
use crate::error::ApiError;
use crate::middleware::{no_content, ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

use super::parse_id;
use super::payload::RestaurantBody;

/// Fetch a restaurant and make sure the caller owns it
async fn find_owned(state: &AppState, user: &AuthUser, id: Uuid) -> Result<Restaurant, ApiError> {
    let restaurant = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("restaurant"))?;

    require_ownership(user, &restaurant)?;
    Ok(restaurant)
}

/// GET /restaurants/:id
pub async fn show(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Restaurant> {
    let id = parse_id(&id)?;
    let restaurant = find_owned(&state, &user, id).await?;
    Ok(ApiResponse::ok("restaurant", restaurant))
}

/// PATCH /restaurants/:id - shallow merge of the non-empty fields
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    body: Result<Json<RestaurantBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let changes = body.into_fields()?.into_changes();

    let restaurant = find_owned(&state, &user, id).await?;

    if changes.is_empty() {
        tracing::debug!("Update of restaurant {} carried no changes", restaurant.id);
        return Ok(no_content());
    }

    // A concurrent delete since `find_owned` surfaces here as NotFound
    state.store.update(restaurant.id, changes).await?;
    tracing::info!("User {} updated restaurant {}", user.user_id, restaurant.id);

    Ok(no_content())
}

/// DELETE /restaurants/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let restaurant = find_owned(&state, &user, id).await?;

    state.store.delete(restaurant.id).await?;
    tracing::info!("User {} deleted restaurant {}", user.user_id, restaurant.id);

    Ok(no_content())
}
