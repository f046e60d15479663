use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::constants;

/// A stored password and the instant it was added.
#[derive(Clone)]
pub struct PasswordRecord {
    pub password: Zeroizing<String>,
    pub added_on: DateTime<Utc>,
}

impl PasswordRecord {
    pub fn new(password: &str, added_on: DateTime<Utc>) -> Self {
        Self {
            password: Zeroizing::new(password.to_string()),
            added_on,
        }
    }

    /// Truncated SHA-256 hex digest of the password, safe to display.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.password.as_bytes());
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest.iter() {
            hex.push_str(&format!("{:02x}", byte));
        }
        hex.truncate(constants::FINGERPRINT_HEX_LEN);
        hex
    }
}

impl std::fmt::Debug for PasswordRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordRecord")
            .field("password", &"<redacted>")
            .field("added_on", &self.added_on)
            .finish()
    }
}

/// Display view of a record; never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub service: String,
    pub added_on: DateTime<Utc>,
    pub fingerprint: String,
}
