//! Admin session claims and the admin capability check
//!
//! The API issues a JWT to operators. The client only reads the payload to
//! decide what to render; signature verification stays on the API, which
//! rejects forged tokens on every admin request.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granting access to the admin panel
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: i64, // expiration timestamp, seconds
    #[serde(default)]
    pub iat: i64, // issued at
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("token must have three dot-separated parts")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Payload(String),
}

impl TokenClaims {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }

    /// Case-insensitive; the Spring style "ROLE_ADMIN" also counts as "admin"
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| {
            let r = r.trim();
            let r = r
                .strip_prefix("ROLE_")
                .or_else(|| r.strip_prefix("role_"))
                .unwrap_or(r);
            r.eq_ignore_ascii_case(role)
        })
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin || self.has_role(ADMIN_ROLE)
    }
}

/// Read the claims of a JWT without verifying its signature
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 || parts[1].is_empty() {
        return Err(ClaimsError::Malformed);
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| ClaimsError::Encoding(e.to_string()))?;

    serde_json::from_slice(&payload).map_err(|e| ClaimsError::Payload(e.to_string()))
}

/// Admin panel capability: an unexpired session carrying the admin role
pub fn can_access_admin(claims: Option<&TokenClaims>, now_secs: i64) -> bool {
    claims.is_some_and(|c| !c.is_expired(now_secs) && c.is_admin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_decode_claims() {
        let token = token_for(&serde_json::json!({
            "sub": "42",
            "username": "ops",
            "roles": ["ROLE_ADMIN"],
            "exp": 2_000_000_000i64,
            "iat": 1_700_000_000i64
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert!(claims.has_role("admin"));
        assert!(claims.is_admin());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode_claims("abc"), Err(ClaimsError::Malformed));
        assert!(matches!(decode_claims("a.!!!.c"), Err(ClaimsError::Encoding(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_claims(&not_json), Err(ClaimsError::Payload(_))));
    }

    #[test]
    fn test_admin_capability() {
        let now = 1_800_000_000;
        let admin = TokenClaims {
            sub: "1".into(),
            username: "ops".into(),
            roles: vec![],
            is_admin: true,
            exp: now + 60,
            iat: now - 60,
        };
        assert!(can_access_admin(Some(&admin), now));

        let expired = TokenClaims { exp: now, ..admin.clone() };
        assert!(!can_access_admin(Some(&expired), now));

        let viewer = TokenClaims {
            is_admin: false,
            roles: vec!["viewer".into()],
            ..admin
        };
        assert!(!can_access_admin(Some(&viewer), now));
        assert!(!can_access_admin(None, now));
    }
}
