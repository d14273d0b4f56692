//! `SQLite` storage for the eggledger server.
//!
//! Provides persistence for users, farm production records, and per-user
//! settings blobs.

mod db;
mod models;
mod queries;

#[cfg(test)]
mod tests;

pub use db::Database;
pub use eggledger_core::db::DatabaseError;
pub use models::*;
