//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! input uses a separate struct ([`NewLink`]) so database-assigned fields
//! never appear half-initialized.

pub mod link;

pub use link::{Link, NewLink};
