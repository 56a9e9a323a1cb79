//! Infrastructure layer: database access implementations.
//!
//! Contains the concrete implementations of the repository traits defined
//! in the domain layer.

pub mod persistence;
