use crate::cli::CliContext;
use crate::core::generator;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Length of the password (default from config)
    #[arg(long)]
    pub length: Option<usize>,
}

pub fn run(ctx: &CliContext, args: GenerateArgs) -> Result<()> {
    let length = args.length.unwrap_or(ctx.config.generator.length);
    let password = generator::generate_password(&ctx.registry(), length)?;
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", password.as_str()).context("write to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
