//! The HTTP API, exposed at the server's root (e.g. `/extensionAssignment`).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;

mod routes;
pub(crate) mod validation;

/// Returns the API router.
///
/// The router is built once per process. Cloning it is cheap, since its routes are shared.
pub(crate) fn router() -> Router {
    routes::ROUTER.clone()
}

/// An API error.
#[derive(Error, strum_macros::IntoStaticStr, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub(crate) enum Error {
    /// The requested API route doesn't exist.
    #[error("The requested API route doesn't exist.")]
    RouteNotFound,

    /// The requested API route exists, but the request method isn't allowed on it.
    #[error("The requested API route doesn't support this method.")]
    MethodNotAllowed,
}

impl Error {
    /// Gets the HTTP response status code corresponding to the API error.
    pub(crate) const fn status(self) -> StatusCode {
        match self {
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Gets the error code, such as `ROUTE_NOT_FOUND`.
    pub(crate) fn code(self) -> &'static str {
        self.into()
    }
}

/// The JSON body of an API error response.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// The [`Error::code`].
    code: &'static str,

    /// A human-readable description of the error.
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
