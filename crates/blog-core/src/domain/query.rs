//! List query intents: which posts to return and in what order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Post;
use crate::error::DomainError;

/// Post field a listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Author,
}

impl SortField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Title => "title",
            SortField::Author => "author",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortField::CreatedAt),
            "updatedAt" => Ok(SortField::UpdatedAt),
            "title" => Ok(SortField::Title),
            "author" => Ok(SortField::Author),
            other => Err(DomainError::InvalidQuery(format!(
                "cannot sort by `{other}`, expected one of createdAt, updatedAt, title, author"
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" | "1" => Ok(SortOrder::Ascending),
            "descending" | "desc" | "-1" => Ok(SortOrder::Descending),
            _ => Err(DomainError::InvalidQuery(format!(
                "invalid sort order `{s}`, expected ascending or descending"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

/// Sort options for list operations. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl ListOptions {
    pub fn new(sort_by: SortField, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    /// Build options from raw query values. Missing or empty values fall back
    /// to the defaults; anything unrecognized is rejected.
    pub fn parse(sort_by: Option<&str>, sort_order: Option<&str>) -> Result<Self, DomainError> {
        let sort_by = match sort_by.filter(|s| !s.is_empty()) {
            Some(s) => s.parse()?,
            None => SortField::default(),
        };
        let sort_order = match sort_order.filter(|s| !s.is_empty()) {
            Some(s) => s.parse()?,
            None => SortOrder::default(),
        };
        Ok(Self::new(sort_by, sort_order))
    }

    /// Compare two posts under these options.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        let ordering = match self.sort_by {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Author => a.author.cmp(&b.author),
        };
        match self.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Which posts a list operation returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PostFilter {
    #[default]
    All,
    /// Exact match on `author`.
    Author(String),
    /// `tags` contains the value.
    Tag(String),
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::Author(author) => post.author.as_deref() == Some(author.as_str()),
            PostFilter::Tag(tag) => post.tags.iter().any(|t| t == tag),
        }
    }
}
