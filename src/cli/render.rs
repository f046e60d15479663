//! Table and JSON rendering for service listings.

use crate::models::record::ServiceSummary;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use std::io::Write;

pub fn write_summaries<W: Write>(out: &mut W, summaries: &[ServiceSummary], format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(summaries).context("serialize listing")?;
            writeln!(out, "{}", json)?;
        }
        "table" => {
            if summaries.is_empty() {
                writeln!(out, "No services stored.")?;
            } else {
                writeln!(out, "{}", summary_table(summaries))?;
            }
        }
        other => bail!("invalid format: {} (use table|json)", other),
    }
    Ok(())
}

fn summary_table(summaries: &[ServiceSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Service").add_attribute(Attribute::Bold),
        Cell::new("Added").add_attribute(Attribute::Bold),
        Cell::new("Fingerprint").add_attribute(Attribute::Bold),
    ]);

    for summary in summaries {
        let local: DateTime<Local> = summary.added_on.into();
        table.add_row(vec![
            summary.service.clone(),
            local.format("%Y-%m-%d %H:%M:%S").to_string(),
            summary.fingerprint.clone(),
        ]);
    }
    table
}
