//! Stateless HMAC-signed session tokens.
//!
//! Token format: `{timestamp}:{hex(HMAC-SHA256(secret, "session:{timestamp}"))}`.
//! Nothing is stored server-side; a token is valid while its signature matches
//! and its timestamp is within the session lifetime.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies session tokens for a single server secret.
#[derive(Clone)]
pub struct TokenCodec {
    mac: HmacSha256,
    max_age_secs: u64,
}

impl TokenCodec {
    pub fn new(secret: &[u8], max_age_secs: u64) -> Self {
        let mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
        Self { mac, max_age_secs }
    }

    /// Session lifetime in seconds.
    pub fn max_age_secs(&self) -> u64 {
        self.max_age_secs
    }

    /// Create the token for `timestamp`. Same secret and timestamp give the same token.
    pub fn issue(&self, timestamp: u64) -> String {
        let mut mac = self.mac.clone();
        mac.update(format!("session:{}", timestamp).as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());
        format!("{}:{}", timestamp, signature)
    }

    /// Verify a token against the current wall clock.
    pub fn verify(&self, token: &str) -> bool {
        self.verify_at(token, unix_now())
    }

    /// Verify a token as of `now` (Unix seconds).
    ///
    /// Returns false for anything malformed: wrong segment count, a timestamp
    /// that is not a non-negative integer, an expired timestamp or a bad signature.
    pub fn verify_at(&self, token: &str, now: u64) -> bool {
        let mut parts = token.split(':');
        let (Some(timestamp), Some(_signature), None) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        let Ok(timestamp) = timestamp.parse::<u64>() else {
            return false;
        };

        if now.saturating_sub(timestamp) > self.max_age_secs {
            return false;
        }

        let expected = self.issue(timestamp);
        expected.as_bytes().ct_eq(token.as_bytes()).into()
    }
}

/// Current Unix time in seconds.
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = 60 * 60 * 24;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret", DAY)
    }

    #[test]
    fn test_issue_is_deterministic() {
        let codec = codec();
        assert_eq!(codec.issue(1_700_000_000), codec.issue(1_700_000_000));
        assert_ne!(codec.issue(1_700_000_000), codec.issue(1_700_000_001));
    }

    #[test]
    fn test_token_format() {
        let token = codec().issue(1_700_000_000);
        let (timestamp, signature) = token.split_once(':').unwrap();

        assert_eq!(timestamp, "1700000000");
        // SHA-256 output, lowercase hex
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signature_matches_hmac_of_session_message() {
        let mut mac = HmacSha256::new_from_slice(b"test-secret").unwrap();
        mac.update(b"session:42");
        let expected = format!("42:{}", hex::encode(mac.finalize().into_bytes()));

        assert_eq!(codec().issue(42), expected);
    }

    #[test]
    fn test_fresh_token_verifies() {
        let codec = codec();
        let now = unix_now();
        assert!(codec.verify(&codec.issue(now)));
        assert!(codec.verify_at(&codec.issue(1_000), 1_000));
    }

    #[test]
    fn test_token_expires_after_lifetime() {
        let codec = codec();
        let token = codec.issue(1_000);

        // Valid up to and including the lifetime boundary
        assert!(codec.verify_at(&token, 1_000 + DAY));
        assert!(!codec.verify_at(&token, 1_000 + DAY + 1));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = codec().issue(1_000);
        let other = TokenCodec::new(b"other-secret", DAY);
        assert!(!other.verify_at(&token, 1_000));
    }

    #[test]
    fn test_tampered_tokens_rejected() {
        let codec = codec();
        let token = codec.issue(1_000);

        // Signature for another timestamp
        let (_, signature) = token.split_once(':').unwrap();
        assert!(!codec.verify_at(&format!("1001:{}", signature), 1_001));

        // Flipped signature character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == '0' { '1' } else { '0' });
        assert!(!codec.verify_at(&tampered, 1_000));

        // Uppercase hex is a different token
        assert!(!codec.verify_at(&token.to_uppercase(), 1_000));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let codec = codec();
        let valid = codec.issue(1_000);
        let (_, signature) = valid.split_once(':').unwrap();

        let malformed = [
            String::new(),
            ":".to_string(),
            "1000".to_string(),
            signature.to_string(),
            format!("1000:{}:extra", signature),
            format!("abc:{}", signature),
            format!("-5:{}", signature),
            format!("1.5:{}", signature),
            format!(" 1000:{}", signature),
            format!("99999999999999999999999:{}", signature),
        ];

        for token in &malformed {
            assert!(!codec.verify_at(token, 1_000), "accepted {:?}", token);
        }
    }

    #[test]
    fn test_zero_padded_timestamp_rejected() {
        let codec = codec();
        let token = codec.issue(1_000);
        assert!(!codec.verify_at(&format!("0{}", token), 1_000));
    }
}
