//! Assignment lifecycle: creation, retrieval, and persisted analysis results.

pub mod handlers;
pub mod store;
