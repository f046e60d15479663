//! Line-oriented command session over one in-memory registry.

use crate::cli::render;
use crate::core::clock::Clock;
use crate::core::generator;
use crate::core::registry::{CredentialRegistry, PasswordCheck};
use crate::error::RegistryError;
use crate::models::sort::{SortKey, SortOrder};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Password;
use std::io::{BufRead, Write};
use tracing::warn;
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_help_subcommand = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Store a password for a service (prompted when omitted)
    Add {
        service: String,
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
    },
    /// Replace the password of an existing service (prompted when omitted)
    Update {
        service: String,
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
    },
    /// Remove a service
    Remove { service: String },
    /// Print the password stored for a service
    Get { service: String },
    /// List services in insertion order
    List,
    /// List services sorted by `service` or `added_on`
    Sort {
        #[arg(default_value = "service")]
        key: String,
        #[arg(long)]
        reverse: bool,
    },
    /// Generate and store a password for a service
    Generate {
        service: String,
        #[arg(long)]
        length: Option<usize>,
    },
    /// Check a candidate password against the rules and stored passwords
    Check {
        #[arg(allow_hyphen_values = true)]
        password: String,
    },
    /// Show available commands
    Help,
    /// End the session
    #[command(alias = "quit")]
    Exit,
}

/// Parse one session line. `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let parsed = SessionLine::try_parse_from(trimmed.split_whitespace())
        .map_err(|e| anyhow::anyhow!("{}", e.render().to_string().trim_end()))?;
    Ok(Some(parsed.command))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<C: Clock, W: Write> {
    registry: CredentialRegistry<C>,
    out: W,
    format: String,
    generator_length: usize,
    non_interactive: bool,
    echo: bool,
}

impl<C: Clock, W: Write> Session<C, W> {
    pub fn new(registry: CredentialRegistry<C>, out: W, format: &str, generator_length: usize) -> Self {
        Self {
            registry,
            out,
            format: format.to_string(),
            generator_length,
            non_interactive: true,
            echo: false,
        }
    }

    /// Allow hidden prompts for omitted passwords.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.non_interactive = !interactive;
        self
    }

    /// Echo each command before its output.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn registry(&self) -> &CredentialRegistry<C> {
        &self.registry
    }

    pub fn into_parts(self) -> (CredentialRegistry<C>, W) {
        (self.registry, self.out)
    }

    /// Run every line of `input`; returns the number of failed commands.
    ///
    /// A failing command is reported on stderr and the session continues.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<usize> {
        let mut failures = 0;
        if prompt {
            self.write_prompt()?;
        }
        for (idx, line) in input.lines().enumerate() {
            let line = line.context("read session input")?;
            match self.execute_line(&line) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    failures += 1;
                    warn!(line = idx + 1, "session command failed");
                    eprintln!("error (line {}): {:#}", idx + 1, e);
                }
            }
            if prompt {
                self.write_prompt()?;
            }
        }
        Ok(failures)
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let command = match parse_line(line)? {
            Some(c) => c,
            None => return Ok(Flow::Continue),
        };
        if self.echo {
            writeln!(self.out, "> {}", line.trim())?;
        }
        self.execute(command)
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Add { service, password } => {
                let password = self.password_arg(password, &service)?;
                let check = self.registry.check_password(&password);
                self.registry.add(&service, &password);
                self.report_write("Added", &service, check)?;
            }
            SessionCommand::Update { service, password } => {
                if !self.registry.contains(&service) {
                    // surface NotFound before prompting
                    return Err(RegistryError::NotFound { service }.into());
                }
                let password = self.password_arg(password, &service)?;
                let check = self.registry.check_password(&password);
                self.registry.update(&service, &password)?;
                self.report_write("Updated", &service, check)?;
            }
            SessionCommand::Remove { service } => {
                self.registry.remove(&service)?;
                writeln!(self.out, "Removed {}", service)?;
            }
            SessionCommand::Get { service } => match self.registry.get_for_service(&service) {
                Some(password) => writeln!(self.out, "{}", password)?,
                None => writeln!(self.out, "No password stored for {}", service)?,
            },
            SessionCommand::List => {
                let summaries = self.registry.summaries();
                render::write_summaries(&mut self.out, &summaries, &self.format)?;
            }
            SessionCommand::Sort { key, reverse } => {
                let summaries = self
                    .registry
                    .sorted_summaries(SortKey::from(key.as_str()), SortOrder::from_reverse(reverse));
                render::write_summaries(&mut self.out, &summaries, &self.format)?;
            }
            SessionCommand::Generate { service, length } => {
                let length = length.unwrap_or(self.generator_length);
                let password = generator::generate_password(&self.registry, length)?;
                self.registry.add(&service, &password);
                writeln!(self.out, "Generated password for {}", service)?;
            }
            SessionCommand::Check { password } => {
                let msg = match self.registry.check_password(&password) {
                    PasswordCheck::Accepted => "ok",
                    PasswordCheck::Invalid => "invalid",
                    PasswordCheck::Reused => "already in use",
                };
                writeln!(self.out, "{}", msg)?;
            }
            SessionCommand::Help => self.write_help()?,
            SessionCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn password_arg(&self, password: Option<String>, service: &str) -> Result<Zeroizing<String>> {
        match password {
            Some(p) => Ok(Zeroizing::new(p)),
            None if self.non_interactive => {
                bail!("password required for {} in non-interactive mode", service)
            }
            None => Ok(Zeroizing::new(
                Password::new()
                    .with_prompt(format!("Password for {}", service))
                    .interact()
                    .context("read password from prompt")?,
            )),
        }
    }

    fn report_write(&mut self, verb: &str, service: &str, check: PasswordCheck) -> Result<()> {
        match check {
            PasswordCheck::Accepted => writeln!(self.out, "{} {}", verb, service)?,
            PasswordCheck::Invalid => writeln!(
                self.out,
                "Ignored {}: password must be at least {} characters and contain one of {}",
                service,
                self.registry.policy().min_length,
                self.registry.policy().special_chars
            )?,
            PasswordCheck::Reused => {
                writeln!(self.out, "Ignored {}: password already in use", service)?
            }
        }
        Ok(())
    }

    fn write_help(&mut self) -> Result<()> {
        writeln!(self.out, "Commands:")?;
        writeln!(self.out, "  add SERVICE [PASSWORD]")?;
        writeln!(self.out, "  update SERVICE [PASSWORD]")?;
        writeln!(self.out, "  remove SERVICE")?;
        writeln!(self.out, "  get SERVICE")?;
        writeln!(self.out, "  list")?;
        writeln!(self.out, "  sort [service|added_on] [--reverse]")?;
        writeln!(self.out, "  generate SERVICE [--length N]")?;
        writeln!(self.out, "  check PASSWORD")?;
        writeln!(self.out, "  exit")?;
        Ok(())
    }

    fn write_prompt(&mut self) -> Result<()> {
        write!(self.out, "passwords> ")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::SystemClock;
    use std::io::Cursor;

    fn session() -> Session<SystemClock, Vec<u8>> {
        Session::new(CredentialRegistry::new(), Vec::new(), "json", 16)
    }

    fn output(session: Session<SystemClock, Vec<u8>>) -> String {
        let (_, out) = session.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_line_blank_and_comment() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# add x y").unwrap(), None);
    }

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(
            parse_line("add gmail 12ab5!678").unwrap(),
            Some(SessionCommand::Add {
                service: "gmail".into(),
                password: Some("12ab5!678".into())
            })
        );
        assert_eq!(
            parse_line("sort added_on --reverse").unwrap(),
            Some(SessionCommand::Sort {
                key: "added_on".into(),
                reverse: true
            })
        );
        assert_eq!(
            parse_line("sort").unwrap(),
            Some(SessionCommand::Sort {
                key: "service".into(),
                reverse: false
            })
        );
        assert_eq!(parse_line("quit").unwrap(), Some(SessionCommand::Exit));
    }

    #[test]
    fn test_parse_line_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("remove").is_err());
    }

    #[test]
    fn test_add_and_get() {
        let mut s = session();
        s.execute_line("add gmail 12ab5!678").unwrap();
        s.execute_line("get gmail").unwrap();
        let out = output(s);
        assert!(out.contains("Added gmail"));
        assert!(out.contains("12ab5!678\n"));
    }

    #[test]
    fn test_rejections_are_reported_not_failed() {
        let mut s = session();
        assert_eq!(s.execute_line("add twitter 12345678").unwrap(), Flow::Continue);
        s.execute_line("add gmail 12ab5!678").unwrap();
        s.execute_line("add other 12ab5!678").unwrap();
        assert_eq!(s.registry().list_services(), vec!["gmail"]);
        let out = output(s);
        assert!(out.contains("Ignored twitter: password must be at least 8"));
        assert!(out.contains("Ignored other: password already in use"));
    }

    #[test]
    fn test_missing_service_errors() {
        let mut s = session();
        assert!(s.execute_line("remove gmail").is_err());
        assert!(s.execute_line("update gmail %21321415").is_err());
        // NotFound wins over the missing password
        let err = s.execute_line("update gmail").unwrap_err();
        assert!(err.to_string().contains("no password stored"));
    }

    #[test]
    fn test_non_interactive_requires_password() {
        let mut s = session();
        let err = s.execute_line("add gmail").unwrap_err();
        assert!(err.to_string().contains("non-interactive"));
    }

    #[test]
    fn test_run_counts_failures_and_continues() {
        let mut s = session();
        let script = "add gmail 12ab5!678\nremove nope\nbogus\nadd youtube 3@245256\n";
        let failures = s.run(Cursor::new(script), false).unwrap();
        assert_eq!(failures, 2);
        assert_eq!(s.registry().list_services(), vec!["gmail", "youtube"]);
    }

    #[test]
    fn test_run_stops_at_exit() {
        let mut s = session();
        let script = "add gmail 12ab5!678\nexit\nadd youtube 3@245256\n";
        assert_eq!(s.run(Cursor::new(script), false).unwrap(), 0);
        assert_eq!(s.registry().list_services(), vec!["gmail"]);
    }

    #[test]
    fn test_sort_json_output() {
        let mut s = session();
        s.execute_line("add youtube 3@245256").unwrap();
        s.execute_line("add gmail 12ab5!678").unwrap();
        let (reg, _) = s.into_parts();
        let mut s = Session::new(reg, Vec::new(), "json", 16);
        s.execute_line("sort service").unwrap();
        let out = output(s);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let names: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["service"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["gmail", "youtube"]);
        assert!(!out.contains("3@245256"));
    }

    #[test]
    fn test_generate_stores_valid_password() {
        let mut s = session();
        s.execute_line("generate gmail --length 20").unwrap();
        let pw = s.registry().get_for_service("gmail").unwrap().to_string();
        assert_eq!(pw.chars().count(), 20);
        assert!(s.registry().is_password_valid(&pw));
    }

    #[test]
    fn test_check_command() {
        let mut s = session();
        s.execute_line("add gmail 12ab5!678").unwrap();
        s.execute_line("check 12ab5!678").unwrap();
        s.execute_line("check 12345678").unwrap();
        s.execute_line("check new!pass1").unwrap();
        let out = output(s);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(&lines[1..], &["already in use", "invalid", "ok"]);
    }

    #[test]
    fn test_echo() {
        let mut s = session().echo(true);
        s.execute_line("  get gmail ").unwrap();
        let out = output(s);
        assert!(out.starts_with("> get gmail\n"));
    }
}
