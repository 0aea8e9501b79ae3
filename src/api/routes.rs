//! All routes for the HTTP API.

use std::sync::LazyLock;

use axum::{routing::get, Router};

use crate::api;

pub(super) mod extension_assignment;

/// The API router.
pub(super) static ROUTER: LazyLock<Router> = LazyLock::new(|| {
    Router::new()
        .route(
            "/extensionAssignment",
            get(extension_assignment::get).fallback(|| async { api::Error::MethodNotAllowed }),
        )
        .fallback(|| async { api::Error::RouteNotFound })
});
