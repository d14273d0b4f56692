//! JWT claims structure for eggledger sessions.

use serde::{Deserialize, Serialize};

use crate::storage::{Role, UserSummary};

/// Claims embedded in session tokens. Verification returns these unchanged;
/// they are never re-fetched from the user store, so name and role may go
/// stale until the token expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username).
    pub sub: String,
    /// First name at issue time.
    pub firstname: String,
    /// Last name at issue time.
    pub lastname: String,
    /// Role at issue time.
    pub role: Role,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&Claims> for UserSummary {
    fn from(c: &Claims) -> Self {
        Self {
            username: c.sub.clone(),
            firstname: c.firstname.clone(),
            lastname: c.lastname.clone(),
            role: c.role,
        }
    }
}
