//! Eggledger server library
//!
//! Record-keeping service for egg production across four farm sites:
//! - `SQLite` storage for users, farm records, and per-user settings
//! - JWT authentication and argon2 password hashing
//! - HTTP routes (auth, users, farm records, settings)

pub mod auth;
pub mod server;
pub mod storage;
