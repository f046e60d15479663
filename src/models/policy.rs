//! Password validity rules.

use crate::constants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// At least one of these characters must appear in a password.
    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            special_chars: default_special_chars(),
        }
    }
}

impl PasswordPolicy {
    pub fn has_min_length(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }

    pub fn has_special_char(&self, password: &str) -> bool {
        password.chars().any(|c| self.special_chars.contains(c))
    }

    pub fn is_valid(&self, password: &str) -> bool {
        self.has_min_length(password) && self.has_special_char(password)
    }
}

fn default_min_length() -> usize {
    constants::MIN_PASSWORD_LENGTH
}

fn default_special_chars() -> String {
    constants::SPECIAL_CHARS.to_string()
}
