//! Post service - translates list/update intents into repository calls.
//!
//! Repository failures are propagated unchanged as [`DomainError::Repository`];
//! classifying them for clients is the HTTP layer's job.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{ListOptions, Post, PostDraft, PostFilter, PostPatch};
use crate::error::DomainError;
use crate::ports::PostRepository;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Validate the draft, assign ID and timestamps, and persist it.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let post = Post::create(draft.validate()?);
        tracing::debug!(post_id = %post.id, "Creating post");

        Ok(self.repo.insert(post).await?)
    }

    pub async fn list_all_posts(&self, options: ListOptions) -> Result<Vec<Post>, DomainError> {
        self.list(PostFilter::All, options).await
    }

    pub async fn list_posts_by_author(
        &self,
        author: &str,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        self.list(PostFilter::Author(author.to_owned()), options).await
    }

    pub async fn list_posts_by_tag(
        &self,
        tag: &str,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        self.list(PostFilter::Tag(tag.to_owned()), options).await
    }

    /// Point lookup. A malformed ID can never match, so it yields `None`.
    pub async fn get_post_by_id(&self, id: &str) -> Result<Option<Post>, DomainError> {
        let Some(id) = parse_post_id(id) else {
            return Ok(None);
        };

        Ok(self.repo.find_by_id(id).await?)
    }

    /// Merge only the supplied fields. `None` when the post does not exist.
    pub async fn update_post(
        &self,
        id: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        patch.validate()?;
        let Some(id) = parse_post_id(id) else {
            return Ok(None);
        };
        tracing::debug!(post_id = %id, "Updating post");

        Ok(self.repo.update(id, patch).await?)
    }

    /// Hard delete. Returns the number of removed posts (0 or 1).
    pub async fn delete_post(&self, id: &str) -> Result<u64, DomainError> {
        let Some(id) = parse_post_id(id) else {
            return Ok(0);
        };
        tracing::debug!(post_id = %id, "Deleting post");

        Ok(self.repo.delete(id).await?)
    }

    async fn list(
        &self,
        filter: PostFilter,
        options: ListOptions,
    ) -> Result<Vec<Post>, DomainError> {
        tracing::debug!(
            ?filter,
            sort_by = %options.sort_by,
            sort_order = %options.sort_order,
            "Listing posts"
        );

        Ok(self.repo.find(filter, options).await?)
    }
}

fn parse_post_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}
