//! Route handlers organized by resource

pub mod meta;
pub mod mistakes;
