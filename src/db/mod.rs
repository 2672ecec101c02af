//! Database layer - connection pool, schema bootstrap, repository
//!
//! The pool is the only shared mutable resource in the system. It is
//! constructed exactly once at startup and owned by the application state,
//! so no code path can observe an uninitialized pool.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{connect, RetryPolicy};
pub use repos::{DbError, MistakeRepo};
