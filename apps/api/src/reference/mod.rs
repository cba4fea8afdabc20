//! Static Nigerian education reference data and its browsing endpoints.

pub mod data;
pub mod handlers;
