//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, SecondsFormat, Utc};

use blog_core::domain::{ListOptions, Post, PostDraft, PostPatch};
use blog_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Malformed JSON bodies become 400s with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        AppError::BadRequest(err.to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn to_draft(req: CreatePostRequest) -> PostDraft {
    PostDraft {
        title: req.title,
        author: req.author,
        contents: req.contents,
        tags: req.tags,
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author,
        contents: post.contents,
        tags: post.tags,
        created_at: timestamp(post.created_at),
        updated_at: timestamp(post.updated_at),
    }
}

/// GET /api/v1/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let author = query.author.as_deref().filter(|s| !s.is_empty());
    let tag = query.tag.as_deref().filter(|s| !s.is_empty());

    if author.is_some() && tag.is_some() {
        return Err(AppError::BadRequest(
            "Query by either author or tag, not both".to_string(),
        ));
    }

    let options = ListOptions::parse(query.sortby.as_deref(), query.sortorder.as_deref())?;

    let posts = match (author, tag) {
        (Some(author), _) => state.posts.list_posts_by_author(author, options).await?,
        (_, Some(tag)) => state.posts.list_posts_by_tag(tag, options).await?,
        (None, None) => state.posts.list_all_posts(options).await?,
    };

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .get_post_by_id(&path)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/v1/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create_post(to_draft(body.into_inner())).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PATCH /api/v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        author: req.author,
        contents: req.contents,
        tags: req.tags,
    };

    let post = state
        .posts
        .update_post(&path, patch)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    match state.posts.delete_post(&path).await? {
        0 => Err(AppError::NotFound),
        _ => {
            tracing::info!(post_id = %path.as_str(), "Post deleted");
            Ok(HttpResponse::NoContent().finish())
        }
    }
}
