//! In-memory password registry.
//!
//! Stores one password per service, enforcing validity rules and
//! cross-service uniqueness, with listing and sorting views.
//!
//! ## Modules
//! - `cli`: Command-line handlers and the session shell
//! - `core`: Registry, clock, generator, configuration loading
//! - `models`: Data structures
//! - `util`: Logging setup

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use crate::core::clock::{Clock, SystemClock};
pub use crate::core::registry::{CredentialRegistry, PasswordCheck};
pub use crate::error::RegistryError;
pub use crate::models::policy::PasswordPolicy;
pub use crate::models::record::{PasswordRecord, ServiceSummary};
pub use crate::models::sort::{SortKey, SortOrder};
