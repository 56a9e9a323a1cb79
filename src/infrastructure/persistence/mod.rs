//! PostgreSQL persistence implementations.

mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
