//! Domain models

pub mod mistake;
pub mod validation;

pub use mistake::{Mistake, NewMistake};
pub use validation::ValidationError;
