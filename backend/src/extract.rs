//! Request extractors that reject with the structured error body.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::Deserialize;
use user_api_common::{UserDraft, UserId, UserRequest};

use crate::error::{request_path, ApiError};
use crate::validation::validate_user;

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<UserId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(UserIdPath(id)),
            Err(rejection) => Err(ApiError::BadRequest {
                message: rejection.body_text(),
                path: request_path(parts),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    name: String,
}

/// `?name=` term of the search endpoint. The parameter is required but may
/// be empty.
#[derive(Debug, Clone)]
pub struct SearchTerm(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<SearchParams>::from_request_parts(parts, state).await {
            Ok(Query(params)) => Ok(SearchTerm(params.name)),
            Err(rejection) => Err(ApiError::BadRequest {
                message: rejection.body_text(),
                path: request_path(parts),
            }),
        }
    }
}

/// JSON user body that has passed [`validate_user`].
#[derive(Debug, Clone)]
pub struct ValidUser(pub UserDraft);

#[async_trait]
impl<S> FromRequest<S> for ValidUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();
        let path = request_path(&parts);
        let request = Request::from_parts(parts, body);

        let Json(body) = Json::<UserRequest>::from_request(request, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
                path: path.clone(),
            })?;

        validate_user(body)
            .map(ValidUser)
            .map_err(|errors| ApiError::Validation { errors, path })
    }
}
