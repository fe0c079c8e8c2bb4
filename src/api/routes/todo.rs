//! The HTTP resource representing the set of all todos.

pub(crate) mod todo_id;

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;
use serde::Deserialize;

use crate::{
    api::{
        auth::AuthorizerId,
        response::{Data, Page},
        validation::{PageLimit, SortField, SortType, TodoDescription, TodoTitle},
        Json, Query, Response,
    },
    todo::{service, CreateTodo, Pagination, Todo, TodoFilter},
    AppState,
};

/// The page size used when a list request doesn't specify one.
const DEFAULT_LIMIT: u32 = 20;

/// A `POST` request body for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct PostRequest {
    /// The todo's title.
    pub(crate) title: TodoTitle,

    /// The todo's description.
    #[serde(default)]
    pub(crate) description: Option<TodoDescription>,

    /// Whether the todo starts out completed. Defaults to not.
    #[serde(default)]
    pub(crate) completed: bool,
}

/// Creates a new todo owned by the caller.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub(crate) async fn post(
    State(state): State<AppState>,
    authorizer_id: AuthorizerId,
    Json(body): Json<PostRequest>,
) -> Response<Data<Todo>> {
    let todo = service::create_todo(
        &state.db_pool,
        CreateTodo {
            title: body.title.into_inner(),
            description: body.description.map(TodoDescription::into_inner),
            completed: body.completed,
        },
        authorizer_id,
    )
    .await?;

    Ok((StatusCode::OK, Json(Data { data: todo })))
}

/// A `GET` request query for this API route.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct GetQuery {
    /// An exact title to filter by. Empty counts as absent.
    pub(crate) title: Option<String>,

    /// A completion state to filter by.
    pub(crate) completed: Option<bool>,

    /// An owner identity to filter by. Empty counts as absent.
    pub(crate) owner_id: Option<String>,

    /// The maximum number of todos in the page.
    pub(crate) limit: Option<PageLimit>,

    /// The number of matching todos to skip before the page.
    #[serde(default)]
    pub(crate) offset: u32,

    /// The attribute to order the page by.
    #[serde(default)]
    pub(crate) sort_field: SortField,

    /// The order direction.
    #[serde(default)]
    pub(crate) sort_type: SortType,
}

/// Lists todos matching the query's filter, one page at a time.
///
/// # Errors
///
/// See [`crate::api::Error`].
#[debug_handler]
pub(crate) async fn get(
    State(state): State<AppState>,
    _authorizer_id: AuthorizerId,
    Query(query): Query<GetQuery>,
) -> Response<Page> {
    let filter = TodoFilter {
        title: query.title,
        completed: query.completed,
        owner_id: query.owner_id,
    };

    let pagination = Pagination {
        limit: i64::from(query.limit.map_or(DEFAULT_LIMIT, PageLimit::into_inner)),
        offset: i64::from(query.offset),
        sort_field: query.sort_field,
        sort_type: query.sort_type,
    };

    let page = service::list_todos(&state.db_pool, &filter, &pagination).await?;

    Ok((
        StatusCode::OK,
        Json(Page::new(page, pagination.limit, pagination.offset)),
    ))
}
