//! Shared plumbing for the eggledger server:
//! - `SQLite` pool helpers and `DatabaseError`
//! - tracing/logging initialization

pub mod db;
pub mod tracing_init;
