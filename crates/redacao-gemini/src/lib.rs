//! redacao-gemini
//!
//! Gemini model invocation and structured scoring of essays.

pub mod api;
pub mod client;
pub mod error;
pub mod model;
pub mod prompt;
pub mod scoring;
