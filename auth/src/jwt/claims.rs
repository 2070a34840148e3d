use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed assertion payload binding a principal to a role for a fixed
/// validity window.
///
/// The role is a snapshot taken at issuance; it is not refreshed against
/// storage while the token remains valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    pub sub: String,

    /// Role held by the principal when the token was issued
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a principal with an expiry relative to now.
    ///
    /// # Arguments
    /// * `principal_id` - Unique principal identifier
    /// * `role` - Role to embed in the token
    /// * `validity_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with sub, role, iat, and exp set
    pub fn for_principal(
        principal_id: impl ToString,
        role: impl ToString,
        validity_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(validity_hours);

        Self {
            sub: principal_id.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
