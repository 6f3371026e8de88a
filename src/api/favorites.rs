use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use super::extract::IdPath;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub movie_id: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteDto {
    pub id: u64,
    pub movie_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse<T> {
    pub favorites: Vec<T>,
}

/// Accepts `{"movie_id": "tt0111161"}` or a numeric id.
pub(crate) fn parse_movie_id(body: &[u8]) -> Result<String, ApiError> {
    let req: AddFavoriteRequest =
        serde_json::from_slice(body).map_err(|_| ApiError::invalid_request())?;

    match req.movie_id {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(id),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(ApiError::invalid_request()),
    }
}

/// The global set carries no ids of its own; `id` is the 1-based position
/// in the listing, which is stable while the set is unchanged.
pub async fn get_favorites(
    State(state): State<AppState>,
) -> Json<FavoritesResponse<FavoriteDto>> {
    let now = Utc::now();
    let favorites = state
        .favorites
        .list()
        .await
        .into_iter()
        .enumerate()
        .map(|(idx, movie_id)| FavoriteDto {
            id: idx as u64 + 1,
            movie_id,
            created_at: now,
        })
        .collect();

    Json(FavoritesResponse { favorites })
}

pub async fn add_favorite(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<FavoriteDto>), ApiError> {
    let movie_id = parse_movie_id(&body)?;

    let id = state
        .favorites
        .add(&movie_id)
        .await
        .ok_or_else(ApiError::already_exists)?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteDto {
            id: id as u64,
            movie_id,
            created_at: Utc::now(),
        }),
    ))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<StatusCode, ApiError> {
    let favorites = state.favorites.list().await;
    if id <= 0 || id as usize > favorites.len() {
        return Err(ApiError::favorite_not_found());
    }

    let movie_id = &favorites[id as usize - 1];
    if state.favorites.remove(movie_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::favorite_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_id() {
        assert_eq!(parse_movie_id(br#"{"movie_id": "tt0111161"}"#).unwrap(), "tt0111161");
        assert_eq!(parse_movie_id(br#"{"movie_id": 550}"#).unwrap(), "550");
        assert!(parse_movie_id(br#"{}"#).is_err());
        assert!(parse_movie_id(br#"{"movie_id": ""}"#).is_err());
        assert!(parse_movie_id(br#"{"movie_id": null}"#).is_err());
        assert!(parse_movie_id(b"").is_err());
        assert!(parse_movie_id(b"not json").is_err());
    }
}
