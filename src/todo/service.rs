//! Orchestration between request handlers and the todo repository.
//!
//! The only business rule here is that the record owner is always the authenticated caller:
//! create and update take an [`AuthorizerId`] and inject it, and everything else forwards to the
//! repository unchanged.

use sqlx::PgPool;
use uuid::Uuid;

use super::{repo, CreateTodo, NewTodo, Pagination, Todo, TodoFilter, UpdateTodo};
use crate::api::{self, auth::AuthorizerId};

/// A page of todos together with the total count of the filtered collection.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct TodoPage {
    /// The todos in the page.
    pub(crate) todos: Vec<Todo>,

    /// How many todos match the filter in total.
    pub(crate) total: i64,
}

/// Creates a todo owned by the caller.
///
/// # Errors
///
/// See [`repo::create`].
pub(crate) async fn create_todo(
    db_pool: &PgPool,
    payload: CreateTodo,
    authorizer_id: AuthorizerId,
) -> Result<Todo, api::Error> {
    repo::create(
        db_pool,
        NewTodo {
            title: payload.title,
            description: payload.description,
            completed: payload.completed,
            owner_id: authorizer_id.into_inner(),
        },
    )
    .await
}

/// Returns the page of todos matching `filter` along with the filtered total for pagination
/// metadata.
///
/// # Errors
///
/// See [`repo::find_by_filter`] and [`repo::count_by_filter`].
pub(crate) async fn list_todos(
    db_pool: &PgPool,
    filter: &TodoFilter,
    page: &Pagination,
) -> Result<TodoPage, api::Error> {
    let todos = repo::find_by_filter(db_pool, filter, page).await?;
    let total = repo::count_by_filter(db_pool, filter).await?;

    Ok(TodoPage { todos, total })
}

/// Fetches a todo by its identifier, or `None` if no such todo exists.
///
/// # Errors
///
/// See [`repo::find_by_id`].
pub(crate) async fn get_todo_detail(
    db_pool: &PgPool,
    todo_id: Uuid,
) -> Result<Option<Todo>, api::Error> {
    repo::find_by_id(db_pool, todo_id).await
}

/// Merges `update` into an existing todo, transferring ownership to the current caller.
///
/// # Errors
///
/// See [`repo::update_by_id`].
pub(crate) async fn update_todo(
    db_pool: &PgPool,
    todo_id: Uuid,
    update: UpdateTodo,
    authorizer_id: AuthorizerId,
) -> Result<Todo, api::Error> {
    repo::update_by_id(db_pool, todo_id, update, authorizer_id.into_inner()).await
}

/// Removes a todo by its identifier, returning its last-known state.
///
/// # Errors
///
/// See [`repo::delete_by_id`].
pub(crate) async fn delete_todo(db_pool: &PgPool, todo_id: Uuid) -> Result<Todo, api::Error> {
    repo::delete_by_id(db_pool, todo_id).await
}
