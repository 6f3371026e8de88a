use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiError;
use crate::movies::PopularMovies;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub page: Option<String>,
}

pub async fn get_popular_movies(
    State(state): State<AppState>,
    Query(query): Query<PopularQuery>,
) -> Result<Json<PopularMovies>, ApiError> {
    let page = parse_page(query.page.as_deref())?;
    let movies = state.movies.get_popular_movies(page).await?;
    Ok(Json(movies))
}

pub async fn get_movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.movies.get_movie_details(&movie_id).await? {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::not_found("Movie not found")),
    }
}

fn parse_page(raw: Option<&str>) -> Result<u32, ApiError> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    let page: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid page number"))?;
    if page < 1 {
        return Err(ApiError::bad_request("Page number must be positive"));
    }
    u32::try_from(page).map_err(|_| ApiError::bad_request("Invalid page number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ApiError) -> String {
        err.to_string()
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("3")).unwrap(), 3);
        assert_eq!(message(parse_page(Some("abc")).unwrap_err()), "Invalid page number");
        assert_eq!(message(parse_page(Some("0")).unwrap_err()), "Page number must be positive");
        assert_eq!(message(parse_page(Some("-2")).unwrap_err()), "Page number must be positive");
        assert_eq!(message(parse_page(Some("99999999999")).unwrap_err()), "Invalid page number");
    }
}
