//! Domain entities - the core business objects.

mod post;
mod query;

pub use post::{NewPost, Post, PostDraft, PostPatch, now_micros};
pub use query::{ListOptions, PostFilter, SortField, SortOrder};
