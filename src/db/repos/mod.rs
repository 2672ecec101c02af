//! Repository implementations for database access

pub mod mistakes;

pub use mistakes::{DbError, MistakeRepo};
