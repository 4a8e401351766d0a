use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{ListOptions, Post, PostFilter, PostPatch};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning the number of removed records.
    async fn delete(&self, id: ID) -> Result<u64, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts matching `filter`, ordered by `options`.
    async fn find(&self, filter: PostFilter, options: ListOptions) -> Result<Vec<Post>, RepoError>;

    /// Atomically merge `patch` into the post and return the stored result,
    /// or `None` when no post has this ID.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError>;
}
