//! Curriculum standards: the reference rows matched into analysis prompts
//! and browsable by the dashboard.

pub mod handlers;
pub mod standards;
