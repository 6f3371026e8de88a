use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::favorites::FavoritesStore;
use crate::movies::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<MovieService>,
    pub favorites: Arc<FavoritesStore>,
}

impl AppState {
    pub fn new(movies: Arc<MovieService>, favorites: Arc<FavoritesStore>) -> Self {
        Self { movies, favorites }
    }
}

pub fn build_router(state: AppState) -> Router {
    let movie_routes = Router::new()
        .route("/api/movies/popular", get(api::get_popular_movies))
        .route(
            "/api/movies/favorites",
            get(api::get_favorites).post(api::add_favorite),
        )
        .route("/api/movies/favorites/:id", delete(api::remove_favorite))
        .route("/api/movies/:movie_id", get(api::get_movie_details));

    let user_routes = Router::new()
        .route(
            "/api/users/:user_id/favorites",
            get(api::get_user_favorites).post(api::add_user_favorite),
        )
        .route(
            "/api/users/:user_id/favorites/:favorite_id",
            delete(api::remove_user_favorite),
        )
        .route(
            "/api/admin/users/:user_id/favorites",
            delete(api::admin_remove_user_favorites),
        );

    Router::new()
        .route("/", get(home_handler))
        .merge(movie_routes)
        .merge(user_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(
            crate::middleware::json_method_not_allowed,
        ))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home_handler() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Popular Movies API!" }))
}

async fn fallback_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Resource not found" })),
    )
}
