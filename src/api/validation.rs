//! Utilities to help with API request validation.

use derive_more::derive::{AsRef, Deref, Display};
use serde::{Deserialize, Serialize};
use serde_with::SerializeDisplay;
use thiserror::Error;

/// A todo's title.
pub(crate) type TodoTitle = BoundedString<1, 256>;

/// A todo's description.
pub(crate) type TodoDescription = BoundedString<0, 2048>;

/// A list request's page size.
pub(crate) type PageLimit = BoundedInt<1, 100>;

/// A [`String`] newtype that guarantees its length is within a certain range.
#[derive(
    Deref,
    AsRef,
    Display,
    Deserialize,
    SerializeDisplay,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub(crate) struct BoundedString<const MIN: usize, const MAX: usize>(String);

impl<const MIN: usize, const MAX: usize> BoundedString<MIN, MAX> {
    /// Consumes the [`BoundedString`], returning the wrapped [`String`].
    pub(crate) fn into_inner(self) -> String {
        self.0
    }
}

/// An error constructing a [`BoundedString`].
#[derive(Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub(crate) enum BoundedStringError<const MIN: usize, const MAX: usize> {
    /// The length was less than the [`BoundedString`]'s `MIN`.
    #[error("invalid length {0}, expected at least {MIN}")]
    TooShort(usize),

    /// The length was greater than the [`BoundedString`]'s `MAX`.
    #[error("invalid length {0}, expected at most {MAX}")]
    TooLong(usize),
}

impl<const MIN: usize, const MAX: usize> TryFrom<String> for BoundedString<MIN, MAX> {
    type Error = BoundedStringError<MIN, MAX>;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        if string.len() < MIN {
            Err(BoundedStringError::TooShort(string.len()))
        } else if string.len() > MAX {
            Err(BoundedStringError::TooLong(string.len()))
        } else {
            Ok(Self(string))
        }
    }
}

/// A [`u32`] newtype that guarantees its value is within a certain range.
#[derive(
    Deref, Display, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
)]
#[serde(try_from = "u32")]
pub(crate) struct BoundedInt<const MIN: u32, const MAX: u32>(u32);

impl<const MIN: u32, const MAX: u32> BoundedInt<MIN, MAX> {
    /// Consumes the [`BoundedInt`], returning the wrapped [`u32`].
    pub(crate) fn into_inner(self) -> u32 {
        self.0
    }
}

/// An error constructing a [`BoundedInt`].
#[derive(Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub(crate) enum BoundedIntError<const MIN: u32, const MAX: u32> {
    /// The value was less than the [`BoundedInt`]'s `MIN`.
    #[error("invalid value {0}, expected at least {MIN}")]
    TooSmall(u32),

    /// The value was greater than the [`BoundedInt`]'s `MAX`.
    #[error("invalid value {0}, expected at most {MAX}")]
    TooLarge(u32),
}

impl<const MIN: u32, const MAX: u32> TryFrom<u32> for BoundedInt<MIN, MAX> {
    type Error = BoundedIntError<MIN, MAX>;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < MIN {
            Err(BoundedIntError::TooSmall(value))
        } else if value > MAX {
            Err(BoundedIntError::TooLarge(value))
        } else {
            Ok(Self(value))
        }
    }
}

/// The closed set of attributes a todo list can be ordered by.
///
/// Closed so a sort column can never come from arbitrary client input.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) enum SortField {
    /// Order by creation time.
    #[default]
    CreatedAt,

    /// Order by last update time.
    UpdatedAt,

    /// Order by title.
    Title,

    /// Order by completion state.
    Completed,
}

impl SortField {
    /// The column this attribute is stored in.
    pub(crate) fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
            Self::Completed => "completed",
        }
    }
}

/// A sort direction.
#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortType {
    /// Ascending order.
    Asc,

    /// Descending order, the default so newest todos list first.
    #[default]
    Desc,
}

impl SortType {
    /// The SQL keyword for this direction.
    pub(crate) fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
