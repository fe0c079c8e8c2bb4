//! The HTTP API: error taxonomy, request extraction, and routing.

pub(crate) mod auth;
pub(crate) mod response;
pub(crate) mod routes;
pub(crate) mod validation;

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Request,
    },
    http::{request::Parts, StatusCode},
    response::IntoResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub(crate) use routes::router;

/// The result every API handler returns.
pub(crate) type Response<T> = Result<(StatusCode, Json<T>), Error>;

/// Any error an API handler can respond with.
#[derive(Error, Debug)]
pub(crate) enum Error {
    /// The request's payload, query, or path didn't have the expected shape.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The request carried no valid bearer credential.
    #[error("missing or invalid credentials")]
    Unauthorized,

    /// No todo has the requested identifier.
    #[error("todo not found")]
    TodoNotFound,

    /// No API route matches the requested path.
    #[error("route not found")]
    RouteNotFound,

    /// The store failed. Surfaced as a 500 and logged, never swallowed.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// The JSON body sent with client-visible error responses.
#[derive(Serialize, Debug)]
struct ErrorBody {
    /// A human-readable description of the error.
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            // A missing todo responds with an empty body, and the miss is logged by the handler
            // that knows which identifier missed.
            Self::TodoNotFound => StatusCode::NOT_FOUND.into_response(),

            Self::RouteNotFound => error_response(StatusCode::NOT_FOUND, self.to_string()),

            Self::Validation(message) => error_response(StatusCode::BAD_REQUEST, message),

            Self::Unauthorized => error_response(StatusCode::UNAUTHORIZED, self.to_string()),

            Self::Database(error) => {
                tracing::error!(%error, "store query failed");

                // The driver's message can leak schema details, so the body stays generic.
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        }
    }
}

/// Builds an error response with the standard JSON error body.
fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, axum::Json(ErrorBody { error: message })).into_response()
}

/// [`axum::Json`] with its rejection unified into [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Json<T>(pub(crate) T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::from_request(request, state)
            .await
            .map_err(|rejection| Error::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// [`axum::extract::Query`] with its rejection unified into [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Query<T>(pub(crate) T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) = axum::extract::Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| Error::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// [`axum::extract::Path`] with its rejection unified into [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Path<T>(pub(crate) T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| Error::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}
