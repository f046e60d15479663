//! Data structures for records, rules, and configuration.

pub mod app_config;
pub mod policy;
pub mod record;
pub mod sort;
