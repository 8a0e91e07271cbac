//! Shared vocabulary types and the crate-wide error taxonomy.

pub(crate) mod core;
pub(crate) mod error;
