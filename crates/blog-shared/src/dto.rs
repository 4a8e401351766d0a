//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`. `title` is optional here so a missing title
/// reaches domain validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Body of `PATCH /posts/{id}`. Omitted (or null) fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub sortby: Option<String>,
    pub sortorder: Option<String>,
    pub author: Option<String>,
    pub tag: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    pub tags: Vec<String>,
    /// ISO-8601, UTC.
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_response_wire_shape() {
        let post = PostResponse {
            id: "5d0c6a7e-7f0b-4a5e-9f3e-1b2c3d4e5f60".to_string(),
            title: "Guide to TypeScript".to_string(),
            author: None,
            contents: None,
            tags: vec![],
            created_at: "2024-05-01T10:00:00.000000Z".to_string(),
            updated_at: "2024-05-01T10:00:00.000000Z".to_string(),
        };

        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["createdAt"], "2024-05-01T10:00:00.000000Z");
        assert_eq!(json["tags"], serde_json::json!([]));
        assert!(json.get("author").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_update_request_treats_null_as_absent() {
        let req: UpdatePostRequest =
            serde_json::from_str(r#"{"author": "Anton Chekhov", "title": null}"#).unwrap();
        assert_eq!(req.author.as_deref(), Some("Anton Chekhov"));
        assert!(req.title.is_none());
        assert!(req.tags.is_none());
    }
}
