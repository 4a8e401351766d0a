//! In-memory post repository - used as fallback when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{ListOptions, Post, PostFilter, PostPatch, now_micros};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store kept in insertion order, guarded by an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.iter().position(|p| p.id == id) {
            Some(index) => {
                posts.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find(&self, filter: PostFilter, options: ListOptions) -> Result<Vec<Post>, RepoError> {
        let mut matching: Vec<Post> = {
            let posts = self.posts.read().await;
            posts.iter().filter(|p| filter.matches(p)).cloned().collect()
        };

        // Stable, so ties keep insertion order.
        matching.sort_by(|a, b| options.compare(a, b));
        Ok(matching)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply(post, now_micros());
        Ok(Some(post.clone()))
    }
}
