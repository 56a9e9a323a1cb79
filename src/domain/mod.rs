//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines entities, repository interfaces, and the click tracking model independent
//! of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click counting event model
//! - [`click_worker`] - Asynchronous click counting worker
//!
//! # Click Counting Flow
//!
//! 1. HTTP handler receives redirect request
//! 2. [`click_event::ClickEvent`] is sent to an async channel
//! 3. [`click_worker::run_click_worker`] increments the counter with retry logic
//! 4. The counter is persisted via [`repositories::LinkRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
