use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use super::error::ApiError;
use super::extract::IdPath;
use super::favorites::{parse_movie_id, FavoriteDto, FavoritesResponse};
use crate::favorites::EnrichedFavorite;
use crate::server::AppState;

pub async fn get_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<u64>,
) -> Json<FavoritesResponse<EnrichedFavorite>> {
    let favorites = state.favorites.list_for_user(user_id).await;
    Json(FavoritesResponse { favorites })
}

pub async fn add_user_favorite(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<u64>,
    body: Bytes,
) -> Result<(StatusCode, Json<FavoriteDto>), ApiError> {
    let movie_id = parse_movie_id(&body)?;

    let favorite = state
        .favorites
        .add_for_user(user_id, &movie_id)
        .await
        .ok_or_else(ApiError::already_exists)?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteDto {
            id: favorite.id,
            movie_id: favorite.movie_id,
            created_at: favorite.created_at,
        }),
    ))
}

pub async fn remove_user_favorite(
    State(state): State<AppState>,
    IdPath((user_id, favorite_id)): IdPath<(u64, u64)>,
) -> Result<StatusCode, ApiError> {
    if state.favorites.remove_for_user(user_id, favorite_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::favorite_not_found())
    }
}

// No check ties user_id to the caller; any client can clear any user's list.
pub async fn admin_remove_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<u64>,
) -> StatusCode {
    info!(user_id = user_id, "Admin clearing all favorites for user");
    state.favorites.clear_all_for_user(user_id).await;
    StatusCode::NO_CONTENT
}
