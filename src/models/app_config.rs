//! Configuration file model.

use crate::constants;
use crate::models::policy::PasswordPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub policy: PasswordPolicy,
    #[serde(default)]
    pub generator: GeneratorSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSection {
    #[serde(default = "default_length")]
    pub length: usize,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            length: default_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// table | json
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_length() -> usize {
    constants::DEFAULT_GENERATED_LENGTH
}

fn default_format() -> String {
    "table".to_string()
}
