//! redacao-core
//!
//! Pure domain types for ENEM-style essay scoring: the rubric, model scores,
//! persisted essay records and the dashboard documents built from them.
//! No I/O here; the other crates share this vocabulary.

pub mod error;
pub mod models;
pub mod rubric;
pub mod validation;
