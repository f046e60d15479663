//! Registry errors.

/// Errors surfaced by registry operations.
///
/// Invalid or reused passwords are not errors: `add` and `update` reject them
/// without changing state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no password stored for service '{service}'")]
    NotFound { service: String },

    #[error("could not generate an unused password after {attempts} attempts")]
    GeneratorExhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
