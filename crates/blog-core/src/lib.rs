//! # Blog Core
//!
//! The domain layer of the blog posts API.
//! This crate contains the post entity, its validation rules, the repository
//! port and the service that owns the query/update business rules.
//! It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError, ValidationError};
pub use service::PostService;
