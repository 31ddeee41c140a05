//! User infrastructure: credential persistence and the auth flows

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use service::{AuthService, AuthSession};
