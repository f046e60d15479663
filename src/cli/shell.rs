use crate::cli::session::Session;
use crate::cli::CliContext;
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Read session commands from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Echo each command before its output
    #[arg(long)]
    pub echo: bool,
}

pub fn run(ctx: &CliContext, args: ShellArgs) -> Result<()> {
    let stdin = io::stdin();
    let tty = args.script.is_none() && stdin.is_terminal();
    let mut session = Session::new(
        ctx.registry(),
        io::stdout(),
        &ctx.format,
        ctx.config.generator.length,
    )
    .interactive(tty && !ctx.non_interactive)
    .echo(args.echo);

    let failures = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open script {}", path.display()))?;
            session.run(BufReader::new(file), false)?
        }
        None => session.run(stdin.lock(), tty)?,
    };

    if failures > 0 {
        bail!("{} session command(s) failed", failures);
    }
    Ok(())
}
