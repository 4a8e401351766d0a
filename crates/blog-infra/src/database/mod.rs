//! Post storage: PostgreSQL through SeaORM, with an in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
