//! Validation error types

use std::fmt;

/// Validation error for create requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `title` or `description` absent or empty
    RequiredFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredFields => write!(f, "title and description are required"),
        }
    }
}

impl std::error::Error for ValidationError {}
