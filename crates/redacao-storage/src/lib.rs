//! redacao-storage
//!
//! Persistence gateway for essays. Parameterized SQL over a pooled MySQL
//! connection, plus an in-process store with the same behaviour.

pub mod client;
pub mod error;
pub mod memory;
pub mod mysql;
pub mod store;
