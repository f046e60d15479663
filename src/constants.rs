//! Centralized constants for password rules, generation, and output.

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A password must contain at least one of these characters.
pub const SPECIAL_CHARS: &str = "!@$%&";

/// Sort key selecting lexicographic order on service names.
pub const SORT_KEY_SERVICE: &str = "service";

/// Sort key selecting order by creation time (any non-`service` key).
pub const SORT_KEY_ADDED_ON: &str = "added_on";

/// Default length for generated passwords.
pub const DEFAULT_GENERATED_LENGTH: usize = 16;

/// Maximum length accepted for generated passwords.
pub const MAX_GENERATED_LENGTH: usize = 256;

/// Attempts before the generator gives up finding an unused password.
pub const MAX_GENERATOR_ATTEMPTS: usize = 32;

/// Number of hex characters shown for a password fingerprint.
pub const FINGERPRINT_HEX_LEN: usize = 12;

/// Valid output formats for listings.
pub const VALID_FORMATS: &[&str] = &["table", "json"];

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "GOAMET_PASSWORDS_CONFIG";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "goamet_passwords=warn";
