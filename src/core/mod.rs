//! Core business logic modules.

pub mod clock;
pub mod config;
pub mod generator;
pub mod registry;
