//! Assignment analysis: prompt construction, the single model call, and
//! normalization of the reply into a fixed schema.

pub mod engine;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompt_builder;
pub mod prompts;
pub mod quality;
