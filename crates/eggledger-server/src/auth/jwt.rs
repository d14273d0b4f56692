//! JWT token issuance and validation.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use eggledger_core::db::unix_timestamp;

use super::claims::Claims;
use crate::storage::Role;

/// Manages session token creation and validation. The signing secret is
/// process-wide and supplied at startup; there is no default.
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl JwtManager {
    /// Create a new `JwtManager` with the given secret and token lifetime.
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::default();
        // Expiry is exact; a token is rejected from the moment `exp` passes.
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        }
    }

    /// Issue a session token for a verified identity.
    pub fn issue(
        &self,
        username: &str,
        firstname: &str,
        lastname: &str,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_timestamp();

        let claims = Claims {
            sub: username.to_string(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            role,
            iat: now,
            exp: now + self.ttl_secs,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Validate a token and return its claims. Fails on a bad signature, a
    /// malformed token, or expiry.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
