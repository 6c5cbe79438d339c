use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension,
};
use serde_json::Value;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::SearchQuery;
use crate::state::AppState;

/// GET /search?term=&location= - relay the provider's answer verbatim
pub async fn search(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Value> {
    let Query(query) = query?;
    tracing::debug!("User {} searching {:?}", user.user_id, query);

    let result = state.search.search(&query).await?;
    Ok(ApiResponse::ok("search", result))
}
