//! CLI routing and command dispatch.

use crate::core::clock::SystemClock;
use crate::core::config;
use crate::core::registry::CredentialRegistry;
use crate::models::app_config::AppConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

pub mod check;
pub mod demo;
pub mod generate;
pub mod render;
pub mod session;
pub mod shell;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub config: AppConfig,
    pub format: String,
    pub non_interactive: bool,
}

impl CliContext {
    pub fn new(config: AppConfig, format: Option<String>, non_interactive: bool) -> Result<Self> {
        let format = format.unwrap_or_else(|| config.output.format.clone());
        config::validate_format(&format)?;
        Ok(Self {
            config,
            format,
            non_interactive,
        })
    }

    /// Fresh registry using the configured policy.
    pub fn registry(&self) -> CredentialRegistry<SystemClock> {
        CredentialRegistry::new().with_policy(self.config.policy.clone())
    }
}

#[derive(Parser, Debug)]
#[command(name = "goamet-passwords", version, about = "In-memory password registry for GoAmet services")]
pub struct Cli {
    /// Configuration file (TOML); falls back to $GOAMET_PASSWORDS_CONFIG
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for listings: table|json
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Run in non-interactive mode (no prompts, suitable for automation)
    #[arg(long, global = true, env = "GOAMET_PASSWORDS_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = match config::resolve_path(self.config) {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                config::load(&path)?
            }
            None => AppConfig::default(),
        };
        let ctx = CliContext::new(config, self.format, self.non_interactive)?;

        match self.command {
            Commands::Shell(args) => shell::run(&ctx, args),
            Commands::Demo(args) => demo::run(&ctx, args),
            Commands::Check(args) => check::run(&ctx, args),
            Commands::Generate(args) => generate::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a password session from stdin or a script
    Shell(shell::ShellArgs),
    /// Run the reference walkthrough against a fresh registry
    Demo(demo::DemoArgs),
    /// Check a password against the validity rules
    Check(check::CheckArgs),
    /// Print a freshly generated valid password
    Generate(generate::GenerateArgs),
}
