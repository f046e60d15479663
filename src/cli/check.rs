use crate::cli::CliContext;
use crate::models::policy::PasswordPolicy;
use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::Password;
use zeroize::Zeroizing;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Password to check (prompted when omitted)
    #[arg(allow_hyphen_values = true)]
    pub password: Option<String>,
}

pub fn run(ctx: &CliContext, args: CheckArgs) -> Result<()> {
    let password = match args.password {
        Some(p) => Zeroizing::new(p),
        None if ctx.non_interactive => bail!("password required in non-interactive mode"),
        None => Zeroizing::new(
            Password::new()
                .with_prompt("Password to check")
                .interact()
                .context("read password from prompt")?,
        ),
    };

    let lines = report(&ctx.config.policy, &password);
    let failed = lines.iter().filter(|(ok, _)| !ok).count();
    for (ok, msg) in &lines {
        println!("  [{}] {}", if *ok { "PASS" } else { "FAIL" }, msg);
    }
    if failed > 0 {
        bail!("password does not meet the rules ({} check(s) failed)", failed);
    }
    Ok(())
}

fn report(policy: &PasswordPolicy, password: &str) -> Vec<(bool, String)> {
    vec![
        (
            policy.has_min_length(password),
            format!("at least {} characters", policy.min_length),
        ),
        (
            policy.has_special_char(password),
            format!("contains one of {}", policy.special_chars),
        ),
    ]
}
