use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    goamet_passwords::util::logging::init();
    let cli = goamet_passwords::cli::Cli::parse();
    cli.run()
}
