//! The Todo domain model and its query parameter types.

pub(crate) mod repo;
pub(crate) mod service;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::api::validation::{SortField, SortType};

/// A Todo item, independent of how any request or response shapes it.
#[derive(FromRow, Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Todo {
    /// The store-assigned identifier. Immutable once assigned.
    pub(crate) id: Uuid,

    /// The todo's title.
    pub(crate) title: String,

    /// The todo's description, if it has one.
    pub(crate) description: Option<String>,

    /// Whether the todo is completed.
    pub(crate) completed: bool,

    /// The identity of the caller that created or last updated the todo. Never taken from client
    /// input.
    pub(crate) owner_id: String,

    /// When the store created the todo.
    pub(crate) created_at: DateTime<Utc>,

    /// When the store last updated the todo.
    pub(crate) updated_at: DateTime<Utc>,
}

/// The client-supplied fields of a new todo, before the caller's identity is attached.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct CreateTodo {
    /// The todo's title.
    pub(crate) title: String,

    /// The todo's description, if any.
    pub(crate) description: Option<String>,

    /// Whether the todo starts out completed.
    pub(crate) completed: bool,
}

/// Every field of a todo the store is asked to create.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct NewTodo {
    /// The todo's title.
    pub(crate) title: String,

    /// The todo's description, if any.
    pub(crate) description: Option<String>,

    /// Whether the todo starts out completed.
    pub(crate) completed: bool,

    /// The creating caller's identity.
    pub(crate) owner_id: String,
}

/// The permitted mutable fields of a todo. Absent fields keep their stored value.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub(crate) struct UpdateTodo {
    /// A new title.
    pub(crate) title: Option<String>,

    /// A new description.
    pub(crate) description: Option<String>,

    /// A new completion state.
    pub(crate) completed: Option<bool>,
}

/// An equality filter over todo fields.
///
/// Only present fields participate in the filter; an empty string counts as absent.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub(crate) struct TodoFilter {
    /// An exact title to match.
    pub(crate) title: Option<String>,

    /// A completion state to match.
    pub(crate) completed: Option<bool>,

    /// An owner identity to match.
    pub(crate) owner_id: Option<String>,
}

impl TodoFilter {
    /// Returns the title field if it's present and nonempty.
    fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Returns the owner field if it's present and nonempty.
    fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref().filter(|owner| !owner.is_empty())
    }

    /// Returns whether no field participates in the filter.
    fn is_empty(&self) -> bool {
        self.title().is_none() && self.completed.is_none() && self.owner_id().is_none()
    }

    /// Appends this filter's present fields to `query` as a `WHERE` clause.
    ///
    /// This is the only filter derivation: the list and count queries both call it, so the two can
    /// never disagree about which rows match.
    pub(crate) fn push_where(&self, query: &mut QueryBuilder<'static, Postgres>) {
        if self.is_empty() {
            return;
        }

        query.push(" WHERE ");
        let mut clause = query.separated(" AND ");

        if let Some(title) = self.title() {
            clause
                .push("title = ")
                .push_bind_unseparated(title.to_owned());
        }

        if let Some(completed) = self.completed {
            clause
                .push("completed = ")
                .push_bind_unseparated(completed);
        }

        if let Some(owner_id) = self.owner_id() {
            clause
                .push("owner_id = ")
                .push_bind_unseparated(owner_id.to_owned());
        }
    }
}

/// The page selection of a todo list query.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Pagination {
    /// The maximum number of rows in the page.
    pub(crate) limit: i64,

    /// The number of matching rows to skip before the page.
    pub(crate) offset: i64,

    /// The attribute to order the page by.
    pub(crate) sort_field: SortField,

    /// The order direction.
    pub(crate) sort_type: SortType,
}

impl Pagination {
    /// Appends this page selection to `query` as `ORDER BY`, `LIMIT`, and `OFFSET` clauses.
    ///
    /// The sort column comes from [`SortField`]'s closed set, never from client input.
    pub(crate) fn push_page(&self, query: &mut QueryBuilder<'static, Postgres>) {
        query
            .push(" ORDER BY ")
            .push(self.sort_field.column())
            .push(" ")
            .push(self.sort_type.keyword())
            .push(" LIMIT ")
            .push_bind(self.limit)
            .push(" OFFSET ")
            .push_bind(self.offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A filter's present fields should each appear in the derived `WHERE` clause exactly as
    /// supplied.
    #[test]
    fn filter_includes_present_fields() {
        let filter = TodoFilter {
            title: Some("Buy milk".into()),
            completed: Some(false),
            owner_id: Some("u1".into()),
        };

        let mut query = QueryBuilder::new("SELECT count(*) FROM todos");
        filter.push_where(&mut query);

        assert_eq!(
            query.sql(),
            "SELECT count(*) FROM todos WHERE title = $1 AND completed = $2 AND owner_id = $3",
            "all present fields should participate in the filter"
        );
    }

    /// Absent and empty fields shouldn't participate in the filter at all.
    #[test]
    fn filter_drops_absent_and_empty_fields() {
        let filter = TodoFilter {
            title: Some(String::new()),
            completed: None,
            owner_id: None,
        };
        assert!(filter.is_empty(), "empty strings should count as absent");

        let mut query = QueryBuilder::new("SELECT count(*) FROM todos");
        filter.push_where(&mut query);

        assert_eq!(
            query.sql(),
            "SELECT count(*) FROM todos",
            "an effectively empty filter should derive no WHERE clause"
        );
    }

    /// `completed=false` is a present field, not a falsy one to drop.
    #[test]
    fn filter_keeps_explicit_false() {
        let filter = TodoFilter {
            completed: Some(false),
            ..TodoFilter::default()
        };

        let mut query = QueryBuilder::new("SELECT count(*) FROM todos");
        filter.push_where(&mut query);

        assert_eq!(
            query.sql(),
            "SELECT count(*) FROM todos WHERE completed = $1",
            "an explicit false should still filter"
        );
    }

    /// Sorting and paging should order by the closed-set column and bind the page bounds.
    #[test]
    fn pagination_orders_and_limits() {
        let page = Pagination {
            limit: 10,
            offset: 20,
            sort_field: SortField::Title,
            sort_type: SortType::Asc,
        };

        let mut query = QueryBuilder::new("SELECT id FROM todos");
        page.push_page(&mut query);

        assert_eq!(
            query.sql(),
            "SELECT id FROM todos ORDER BY title ASC LIMIT $1 OFFSET $2",
            "page selection should order, limit, and skip"
        );
    }

    /// Filter and page clauses should compose with continuous bind placeholders.
    #[test]
    fn filter_and_pagination_compose() {
        let filter = TodoFilter {
            completed: Some(true),
            ..TodoFilter::default()
        };
        let page = Pagination {
            limit: 5,
            offset: 0,
            sort_field: SortField::CreatedAt,
            sort_type: SortType::Desc,
        };

        let mut query = QueryBuilder::new("SELECT id FROM todos");
        filter.push_where(&mut query);
        page.push_page(&mut query);

        assert_eq!(
            query.sql(),
            "SELECT id FROM todos WHERE completed = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            "list queries should filter before paging"
        );
    }
}
