//! All routes for the HTTP API.

pub(crate) mod todo;

use axum::{routing::get, Router};

use crate::{api, AppState};

/// Builds the API router over the shared application state.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/todo", get(todo::get).post(todo::post))
        .route(
            "/todo/:todo_id",
            get(todo::todo_id::get)
                .put(todo::todo_id::put)
                .delete(todo::todo_id::delete),
        )
        .fallback(|| async { api::Error::RouteNotFound })
        .with_state(state)
}
