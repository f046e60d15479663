//! Scripted walkthrough of the registry operations.

use crate::cli::session::Session;
use crate::cli::CliContext;
use crate::core::registry::CredentialRegistry;
use anyhow::{bail, Result};
use clap::Args;
use std::io::{self, Cursor};

pub const DEMO_SCRIPT: &str = "\
add gmail 12ab5!678
add facebook $abc1234
add youtube 3@245256
# no special character
add twitter 12345678
get facebook
list
remove facebook
list
# too weak, ignored
update gmail 12345678
get gmail
update gmail %21321415
get gmail
sort service
sort added_on --reverse
";

#[derive(Args, Debug)]
pub struct DemoArgs {}

pub fn run(ctx: &CliContext, _args: DemoArgs) -> Result<()> {
    // the walkthrough relies on the default rules
    let mut session = Session::new(
        CredentialRegistry::new(),
        io::stdout(),
        &ctx.format,
        ctx.config.generator.length,
    )
    .echo(true);
    let failures = session.run(Cursor::new(DEMO_SCRIPT), false)?;
    if failures > 0 {
        bail!("demo: {} command(s) failed", failures);
    }
    Ok(())
}
