use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;

/// `Path` for numeric ids. A segment that does not parse is answered like an
/// unmatched route, with the JSON 404 envelope.
pub struct IdPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(IdPath(value)),
            Err(rejection) => {
                debug!(path = %parts.uri.path(), error = %rejection, "Unparseable path id");
                Err(ApiError::not_found("Resource not found"))
            }
        }
    }
}
