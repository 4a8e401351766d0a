use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Post entity - represents a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    pub fn create(new: NewPost) -> Self {
        let now = now_micros();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            author: new.author,
            contents: new.contents,
            tags: new.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`, keeping it strictly increasing even when the
    /// clock has not advanced since the previous write.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = next_updated_at(self.updated_at, now);
    }
}

/// Current time at the microsecond precision posts are stored and served with.
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// The timestamp a write at `now` should record after `previous`.
fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = now.trunc_subsecs(6);
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Unvalidated payload for creating a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Check the draft against the post invariants.
    pub fn validate(self) -> Result<NewPost, ValidationError> {
        let title = match self.title {
            None => return Err(ValidationError::required("title")),
            Some(title) if title.trim().is_empty() => {
                return Err(ValidationError::empty("title"));
            }
            Some(title) => title,
        };

        Ok(NewPost {
            title,
            author: self.author,
            contents: self.contents,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

/// A draft that passed validation. Only obtainable through [`PostDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    author: Option<String>,
    contents: Option<String>,
    tags: Vec<String>,
}

impl NewPost {
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Partial update: `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    /// A supplied title must still satisfy the create-time rule.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err(ValidationError::empty("title")),
            _ => Ok(()),
        }
    }

    /// Merge the supplied fields into `post` and bump its `updated_at`.
    pub fn apply(self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(author) = self.author {
            post.author = Some(author);
        }
        if let Some(contents) = self.contents {
            post.contents = Some(contents);
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
        post.touch(now);
    }
}
