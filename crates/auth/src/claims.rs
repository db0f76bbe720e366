use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Role;
use crate::token::decode_claims;

/// Decoded, unverified claims carried by a session token.
///
/// This is a per-request view reconstructed from the cookie; it has no
/// lifecycle of its own and can be stale relative to backend-side changes
/// (a revoked user, a changed role) until the cookie expires or the user
/// logs in again. That staleness window is accepted by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionClaims(Map<String, Value>);

impl SessionClaims {
    /// Decode `token` into claims, or `None` if the token is malformed.
    pub fn from_token(token: &str) -> Option<Self> {
        decode_claims(token).map(Self)
    }

    /// Subject identifier (`sub`).
    pub fn subject(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    pub fn name(&self) -> Option<&str> {
        self.str_claim("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_claim("email")
    }

    /// The parsed role claim; `None` when absent or outside the known set.
    pub fn role(&self) -> Option<Role> {
        self.str_claim("role").and_then(|r| r.parse().ok())
    }

    fn str_claim(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for SessionClaims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_for(claims: serde_json::Value) -> String {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        format!("h.{payload}.s")
    }

    #[test]
    fn exposes_identity_fields() {
        let claims = SessionClaims::from_token(&token_for(serde_json::json!({
            "sub": "42",
            "name": "Bea",
            "email": "bea@ges.example",
            "role": "MANAGER",
        })))
        .unwrap();

        assert_eq!(claims.subject(), Some("42"));
        assert_eq!(claims.name(), Some("Bea"));
        assert_eq!(claims.email(), Some("bea@ges.example"));
        assert_eq!(claims.role(), Some(Role::Manager));
    }

    #[test]
    fn unknown_role_reads_as_none() {
        let claims =
            SessionClaims::from_token(&token_for(serde_json::json!({ "role": "OWNER" }))).unwrap();
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn missing_fields_read_as_none() {
        let claims = SessionClaims::from_token(&token_for(serde_json::json!({}))).unwrap();
        assert_eq!(claims.subject(), None);
        assert_eq!(claims.role(), None);
    }

    #[test]
    fn malformed_token_yields_none() {
        assert!(SessionClaims::from_token("not-a-token").is_none());
    }

    #[test]
    fn serializes_as_the_raw_map() {
        let claims =
            SessionClaims::from_token(&token_for(serde_json::json!({"sub": "1", "role": "ADMIN"})))
                .unwrap();
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value, serde_json::json!({"sub": "1", "role": "ADMIN"}));
    }
}
