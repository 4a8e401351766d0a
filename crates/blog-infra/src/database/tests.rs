use blog_core::domain::{
    ListOptions, Post, PostDraft, PostFilter, PostPatch, SortField, SortOrder,
};
use blog_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Value, Values};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(title: &str, author: Option<&str>, tags: &[&str]) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        author: author.map(str::to_owned),
        contents: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

/// The single statement the repository sent to the mock connection.
fn sent_statement(repo: PostgresPostRepository) -> Statement {
    let log = repo.db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statements = log[0].statements();
    assert_eq!(statements.len(), 1);
    statements[0].clone()
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post", Some("Daniel Bugl"), &["redux"]);
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.tags, vec!["redux"]);
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let post = Post::create(PostDraft::titled("Hello Postgres").validate().unwrap());
    let row = post::Model {
        id: post.id,
        title: post.title.clone(),
        author: None,
        contents: None,
        tags: Vec::new(),
        created_at: post.created_at.into(),
        updated_at: post.updated_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let stored = BaseRepository::<Post, uuid::Uuid>::insert(&repo, post.clone())
        .await
        .unwrap();

    assert_eq!(stored, post);
}

#[tokio::test]
async fn test_find_by_tag_maps_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(
            "Full-Stack React Projects",
            Some("Daniel Bugl"),
            &["react", "nodejs"],
        )]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let posts = repo
        .find(PostFilter::Tag("nodejs".to_string()), ListOptions::default())
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert!(posts[0].tags.contains(&"nodejs".to_string()));
}

#[tokio::test]
async fn test_update_unknown_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let patch = PostPatch {
        title: Some("R Barthes".to_string()),
        ..PostPatch::default()
    };
    let result = repo.update(uuid::Uuid::new_v4(), patch).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_reports_affected_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let repo = PostgresPostRepository::new(db);
    let id = uuid::Uuid::new_v4();

    let first = BaseRepository::<Post, uuid::Uuid>::delete(&repo, id).await;
    let second = BaseRepository::<Post, uuid::Uuid>::delete(&repo, id).await;

    assert_eq!(first.unwrap(), 1);
    assert_eq!(second.unwrap(), 0);
}

#[tokio::test]
async fn test_find_by_tag_binds_tag_parameter() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    repo.find(PostFilter::Tag("nodejs".to_string()), ListOptions::default())
        .await
        .unwrap();

    let stmt = sent_statement(repo);
    assert!(
        stmt.sql.ends_with(
            r#"FROM "posts" WHERE $1 = ANY("tags") ORDER BY "posts"."created_at" DESC NULLS LAST"#
        ),
        "{}",
        stmt.sql
    );
    assert_eq!(stmt.values, Some(Values(vec![Value::from("nodejs")])));
}

#[tokio::test]
async fn test_find_by_author_sorts_missing_authors_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();
    let repo = PostgresPostRepository::new(db);
    let options = ListOptions::new(SortField::Author, SortOrder::Ascending);

    repo.find(PostFilter::Author("Daniel Bugl".to_string()), options)
        .await
        .unwrap();

    let stmt = sent_statement(repo);
    assert!(
        stmt.sql.ends_with(
            r#"FROM "posts" WHERE "posts"."author" = $1 ORDER BY "posts"."author" ASC NULLS FIRST"#
        ),
        "{}",
        stmt.sql
    );
    assert_eq!(stmt.values, Some(Values(vec![Value::from("Daniel Bugl")])));
}

#[tokio::test]
async fn test_find_all_by_updated_at_ascending() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();
    let repo = PostgresPostRepository::new(db);
    let options = ListOptions::new(SortField::UpdatedAt, SortOrder::Ascending);

    repo.find(PostFilter::All, options).await.unwrap();

    let stmt = sent_statement(repo);
    assert!(
        stmt.sql
            .ends_with(r#"FROM "posts" ORDER BY "posts"."updated_at" ASC NULLS FIRST"#),
        "{}",
        stmt.sql
    );
    assert!(!stmt.sql.contains("WHERE"));
}

#[tokio::test]
async fn test_update_sets_only_supplied_columns() {
    let row = model("Learning Redux", Some("Anton Chekhov"), &["redux"]);
    let id = row.id;
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();
    let repo = PostgresPostRepository::new(db);

    let patch = PostPatch {
        author: Some("Anton Chekhov".to_string()),
        ..PostPatch::default()
    };
    let updated = repo.update(id, patch).await.unwrap().unwrap();
    assert_eq!(updated.author.as_deref(), Some("Anton Chekhov"));

    let stmt = sent_statement(repo);
    let (set_clause, where_clause) = stmt.sql.split_once(" WHERE ").unwrap();
    assert_eq!(
        set_clause,
        r#"UPDATE "posts" SET "updated_at" = GREATEST($1, "updated_at" + INTERVAL '1 microsecond'), "author" = $2"#
    );
    assert!(
        where_clause.starts_with(r#""posts"."id" = $3 RETURNING"#),
        "{}",
        where_clause
    );

    let values = stmt.values.unwrap().0;
    assert_eq!(values.len(), 3);
    assert!(matches!(values[0], Value::ChronoDateTimeWithTimeZone(Some(_))));
    assert_eq!(values[1], Value::from("Anton Chekhov"));
    assert_eq!(values[2], Value::from(id));
}
