//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, NullOrdering, Order, SimpleExpr};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{
    ListOptions, Post, PostFilter, PostPatch, SortField, SortOrder, now_micros,
};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn sort_column(field: SortField) -> post::Column {
    match field {
        SortField::CreatedAt => post::Column::CreatedAt,
        SortField::UpdatedAt => post::Column::UpdatedAt,
        SortField::Title => post::Column::Title,
        SortField::Author => post::Column::Author,
    }
}

/// Missing values sort before present ones, as in the in-memory store.
fn sort_order(order: SortOrder) -> (Order, NullOrdering) {
    match order {
        SortOrder::Ascending => (Order::Asc, NullOrdering::First),
        SortOrder::Descending => (Order::Desc, NullOrdering::Last),
    }
}

/// `updated_at` must move forward even if the clock reads the same instant.
fn next_updated_at() -> SimpleExpr {
    let now: DateTimeWithTimeZone = now_micros().into();
    Expr::cust_with_values(
        r#"GREATEST($1, "updated_at" + INTERVAL '1 microsecond')"#,
        [now],
    )
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find(&self, filter: PostFilter, options: ListOptions) -> Result<Vec<Post>, RepoError> {
        let query = match filter {
            PostFilter::All => PostEntity::find(),
            PostFilter::Author(author) => PostEntity::find().filter(post::Column::Author.eq(author)),
            PostFilter::Tag(tag) => {
                PostEntity::find().filter(Expr::cust_with_values(r#"$1 = ANY("tags")"#, [tag]))
            }
        };

        let (order, nulls) = sort_order(options.sort_order);
        let result = query
            .order_by_with_nulls(sort_column(options.sort_by), order, nulls)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut update = PostEntity::update_many()
            .col_expr(post::Column::UpdatedAt, next_updated_at())
            .filter(post::Column::Id.eq(id));

        if let Some(title) = patch.title {
            update = update.col_expr(post::Column::Title, Expr::value(title));
        }
        if let Some(author) = patch.author {
            update = update.col_expr(post::Column::Author, Expr::value(author));
        }
        if let Some(contents) = patch.contents {
            update = update.col_expr(post::Column::Contents, Expr::value(contents));
        }
        if let Some(tags) = patch.tags {
            update = update.col_expr(post::Column::Tags, Expr::value(tags));
        }

        let mut updated = update
            .exec_with_returning(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(updated.pop().map(Into::into))
    }
}
