//! The HTTP resource representing a single todo.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::{
        self,
        auth::AuthorizerId,
        response::Data,
        validation::{TodoDescription, TodoTitle},
        Json, Path, Response,
    },
    todo::{service, Todo, UpdateTodo},
    AppState,
};

/// Fetches a todo by its identifier.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub(crate) async fn get(
    State(state): State<AppState>,
    _authorizer_id: AuthorizerId,
    Path(todo_id): Path<Uuid>,
) -> Response<Data<Todo>> {
    let Some(todo) = service::get_todo_detail(&state.db_pool, todo_id).await? else {
        tracing::error!(%todo_id, "todo not found");
        return Err(api::Error::TodoNotFound);
    };

    Ok((StatusCode::OK, Json(Data { data: todo })))
}

/// A `PUT` request body for this API route. Absent fields keep their stored value.
#[derive(Deserialize, Clone, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct PutRequest {
    /// A new title.
    #[serde(default)]
    pub(crate) title: Option<TodoTitle>,

    /// A new description.
    #[serde(default)]
    pub(crate) description: Option<TodoDescription>,

    /// A new completion state.
    #[serde(default)]
    pub(crate) completed: Option<bool>,
}

/// Merges the payload into an existing todo. The owner becomes the current caller, not whoever
/// created the todo.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub(crate) async fn put(
    State(state): State<AppState>,
    authorizer_id: AuthorizerId,
    Path(todo_id): Path<Uuid>,
    Json(body): Json<PutRequest>,
) -> Response<Data<Todo>> {
    let todo = service::update_todo(
        &state.db_pool,
        todo_id,
        UpdateTodo {
            title: body.title.map(TodoTitle::into_inner),
            description: body.description.map(TodoDescription::into_inner),
            completed: body.completed,
        },
        authorizer_id,
    )
    .await?;

    Ok((StatusCode::OK, Json(Data { data: todo })))
}

/// Removes a todo by its identifier, responding with its last-known state.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub(crate) async fn delete(
    State(state): State<AppState>,
    _authorizer_id: AuthorizerId,
    Path(todo_id): Path<Uuid>,
) -> Response<Data<Todo>> {
    let todo = service::delete_todo(&state.db_pool, todo_id).await?;

    Ok((StatusCode::OK, Json(Data { data: todo })))
}
