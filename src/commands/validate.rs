//! Validate command implementation
//!
//! Fail-fast dry-run over the whole corpus. Unlike build's isolate-and-continue
//! policy, the first resolution failure aborts the run. This command exists as
//! a fast configuration health check.

use std::path::PathBuf;

use console::Style;

use crate::builder::Builder;
use crate::cli::ValidateArgs;
use crate::error::Result;

/// Run validate command
pub fn run(source: PathBuf, output: PathBuf, args: ValidateArgs) -> Result<()> {
    let builder = Builder::new(source, output, super::resolver_options(args.strict_cycles));
    let report = builder.validate()?;

    for warning in &report.warnings {
        println!(
            "  {} {}",
            Style::new().yellow().apply_to("warning:"),
            warning
        );
    }
    println!(
        "{} {} agents, {} teams, {} packs resolve cleanly",
        Style::new().green().bold().apply_to("Configuration OK:"),
        report.agents,
        report.teams,
        report.packs
    );
    Ok(())
}
