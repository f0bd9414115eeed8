//! # Question Store Crate
//!
//! This crate is the record store adapter: the only place that knows the
//! questions live in a MongoDB collection.
//!
//! ## Public API
//!
//! - `connect`: builds a MongoDB client and verifies the deployment answers a ping.
//! - `QuestionStore`: the async trait the HTTP handlers depend on.
//! - `DbRepository`: the MongoDB implementation of `QuestionStore`.
//! - `DbError` / `StoreError`: startup and per-operation failures.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, ping};
pub use error::{DbError, StoreError};
pub use repository::{category_filter, DbRepository, QuestionStore};
