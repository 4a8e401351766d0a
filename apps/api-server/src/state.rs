//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;
use blog_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    /// Name of the backing store, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store when
    /// no database is configured or reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => Self::with_repository(
                    Arc::new(PostgresPostRepository::new(connections.main)),
                    "postgres",
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage, "Application state initialized");
        state
    }

    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), "memory")
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, storage: &'static str) -> Self {
        Self {
            posts: PostService::new(repo),
            storage,
        }
    }
}
