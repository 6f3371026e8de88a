use async_trait::async_trait;
use serde_json::Value;

use crate::tmdb::{self, TmdbClient};

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get_popular(&self, page: u32) -> tmdb::Result<Vec<Value>>;
    async fn get_movie_details(&self, movie_id: &str) -> tmdb::Result<Option<Value>>;
}

pub struct TmdbRepository {
    client: TmdbClient,
}

impl TmdbRepository {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieRepository for TmdbRepository {
    async fn get_popular(&self, page: u32) -> tmdb::Result<Vec<Value>> {
        let response = self
            .client
            .fetch("/movie/popular", &[("page", page.to_string())])
            .await?;

        Ok(popular_results(response))
    }

    async fn get_movie_details(&self, movie_id: &str) -> tmdb::Result<Option<Value>> {
        let path = format!("/movie/{}", urlencoding::encode(movie_id));
        self.client.fetch(&path, &[]).await
    }
}

fn popular_results(response: Option<Value>) -> Vec<Value> {
    match response {
        Some(Value::Object(mut body)) => match body.remove("results") {
            Some(Value::Array(results)) => results,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_popular_results() {
        let body = json!({"page": 1, "results": [{"id": 1}, {"id": 2}], "total_pages": 10});
        assert_eq!(popular_results(Some(body)), vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_popular_results_missing() {
        assert!(popular_results(Some(json!({"page": 1}))).is_empty());
        assert!(popular_results(Some(json!({"results": "nope"}))).is_empty());
        assert!(popular_results(None).is_empty());
    }
}
