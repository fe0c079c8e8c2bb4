//! Presenters mapping domain objects to response shapes.
//!
//! These are pure: no handler state, no side effects, just the wire envelope.

use serde::Serialize;

use crate::todo::{service::TodoPage, Todo};

/// A response body wrapping a single object: `{ "data": … }`.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Data<T> {
    /// The wrapped object.
    pub(crate) data: T,
}

/// A paginated response body: `{ "data": […], "meta": … }`.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Page {
    /// The todos in the page.
    pub(crate) data: Vec<Todo>,

    /// The metadata needed to request further pages.
    pub(crate) meta: Meta,
}

/// Pagination metadata for a listed page.
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Meta {
    /// How many todos match the filter in total.
    pub(crate) total: i64,

    /// The page size that was applied.
    pub(crate) limit: i64,

    /// The number of rows that were skipped.
    pub(crate) offset: i64,
}

impl Page {
    /// Maps a service page and the pagination that produced it to the wire shape.
    pub(crate) fn new(page: TodoPage, limit: i64, offset: i64) -> Self {
        Self {
            data: page.todos,
            meta: Meta {
                total: page.total,
                limit,
                offset,
            },
        }
    }
}
