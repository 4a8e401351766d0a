#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Pooled connection to the post database.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let repo = PostgresPostRepository::new(db.main);
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect the pool and make sure the `posts` table exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Self::ensure_schema(&main).await?;

        Ok(Self { main })
    }

    /// Create the `posts` table from the entity definition if it is missing.
    async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
        let backend = db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(super::entity::post::Entity);
        stmt.if_not_exists();

        db.execute(backend.build(&stmt)).await?;
        tracing::debug!("Table `posts` ready");

        Ok(())
    }
}
