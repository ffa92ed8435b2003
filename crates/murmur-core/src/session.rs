use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use chrono::{DateTime, Duration, Utc};
use murmur_types::models::Token;
use rand::RngCore;

/// Sessions live for one day unless configured otherwise.
pub const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// 256 bits of randomness per token.
const TOKEN_BYTES: usize = 32;

pub fn default_session_ttl() -> Duration {
    Duration::seconds(DEFAULT_SESSION_TTL_SECS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Expired,
}

/// Generate a fresh opaque token value (URL-safe base64, no padding).
pub fn generate_token_value() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    B64.encode(bytes)
}

/// A token is expired once its age reaches the TTL. The boundary itself is
/// already expired.
pub fn validate(token: &Token, now: DateTime<Utc>, ttl: Duration) -> TokenStatus {
    if now - token.issued_at >= ttl {
        TokenStatus::Expired
    } else {
        TokenStatus::Valid
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// Accepts exactly `<scheme> <token>` with a `Bearer` scheme (any case).
pub fn parse_bearer(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_issued(at: DateTime<Utc>) -> Token {
        Token {
            login: "alice".into(),
            value: generate_token_value(),
            issued_at: at,
        }
    }

    #[test]
    fn boundary_is_expired() {
        let now = Utc::now();
        let ttl = default_session_ttl();

        let token = token_issued(now - ttl);
        assert_eq!(validate(&token, now, ttl), TokenStatus::Expired);

        let token = token_issued(now - ttl + Duration::seconds(1));
        assert_eq!(validate(&token, now, ttl), TokenStatus::Valid);
    }

    #[test]
    fn fresh_token_is_valid() {
        let now = Utc::now();
        let token = token_issued(now);
        assert_eq!(validate(&token, now, default_session_ttl()), TokenStatus::Valid);
    }

    #[test]
    fn token_values_are_unique_and_url_safe() {
        let a = generate_token_value();
        let b = generate_token_value();
        assert_ne!(a, b);
        // 32 bytes -> 43 base64 chars without padding
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn bearer_parsing() {
        assert_eq!(parse_bearer("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer("bearer abc"), Some("abc"));
        assert_eq!(parse_bearer("Bearer"), None);
        assert_eq!(parse_bearer("Bearer a b"), None);
        assert_eq!(parse_bearer("Basic abc"), None);
        assert_eq!(parse_bearer(""), None);
    }
}
