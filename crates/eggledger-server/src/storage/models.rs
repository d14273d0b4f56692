//! Data models for eggledger storage.

use serde::{Deserialize, Serialize};

/// User role. Watchers are restricted, read-mostly accounts; admins manage
/// users in addition to records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Watcher,
}

/// One of the four production sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmNumber {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl FarmNumber {
    pub const fn as_i64(self) -> i64 {
        self as i64
    }
}

impl std::fmt::Display for FarmNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as i64)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub firstname: String,
    pub lastname: String,
    pub role: Role,
    pub created_at: i64,
    pub updated_at: i64,
}

/// User shape exposed over the wire. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(rename = "type")]
    pub role: Role,
}

impl From<User> for UserSummary {
    fn from(u: User) -> Self {
        Self {
            username: u.username,
            firstname: u.firstname,
            lastname: u.lastname,
            role: u.role,
        }
    }
}

/// One logged production entry for a farm.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FarmRecord {
    pub id: String,
    pub farm_number: i64,
    pub eggs: i64,
    pub flats: i64,
    pub packets: i64,
    /// Caller-supplied date label; stored verbatim, not validated.
    pub date: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// Per-user settings blob. The payload is opaque JSON text, replaced
/// wholesale on every save.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SettingsRow {
    pub user_id: String,
    pub payload: String,
    pub updated_at: i64,
}
