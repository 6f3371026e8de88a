use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::repository::MovieRepository;
use crate::favorites::MovieLookup;
use crate::tmdb::{self, TmdbError};

#[derive(Debug, Clone, Serialize)]
pub struct PopularMovies {
    pub movies: Vec<Value>,
    pub page: u32,
}

pub struct MovieService {
    repository: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }

    /// `page` is 1-based and already validated by the caller.
    pub async fn get_popular_movies(&self, page: u32) -> tmdb::Result<PopularMovies> {
        let movies = self.repository.get_popular(page).await?;
        Ok(PopularMovies { movies, page })
    }

    pub async fn get_movie_details(&self, movie_id: &str) -> tmdb::Result<Option<Value>> {
        self.repository.get_movie_details(movie_id).await
    }
}

#[async_trait]
impl MovieLookup for MovieService {
    async fn movie_details(&self, movie_id: &str) -> Result<Option<Value>, TmdbError> {
        self.get_movie_details(movie_id).await
    }
}
