//! Build command implementation
//!
//! Cleans the scoped output directories (unless told otherwise), drives the
//! batch build, prints per-unit results and a final summary. Exits non-zero
//! when any unit in the batch failed.

use std::path::PathBuf;

use console::Style;

use crate::builder::{BuildSummary, Builder, CleanScope};
use crate::cli::BuildArgs;
use crate::error::{BundlesmithError, Result};

/// Run build command
pub fn run(source: PathBuf, output: PathBuf, args: BuildArgs) -> Result<()> {
    let builder = Builder::new(source, output, super::resolver_options(args.strict_cycles));

    if !args.skip_clean {
        for scope in clean_scopes(&args) {
            builder.clean(scope)?;
        }
    }

    let mut summary = BuildSummary::default();
    if build_agents(&args) {
        summary.merge(builder.build_agents()?);
    }
    if build_teams(&args) {
        summary.merge(builder.build_teams()?);
    }
    if build_packs(&args) {
        summary.merge(builder.build_packs()?);
    }

    print_summary(&summary);

    if summary.is_success() {
        Ok(())
    } else {
        Err(BundlesmithError::BuildFailed {
            failed: summary.failures.len(),
        })
    }
}

fn build_agents(args: &BuildArgs) -> bool {
    !args.teams_only && !args.packs_only
}

fn build_teams(args: &BuildArgs) -> bool {
    !args.agents_only && !args.packs_only
}

fn build_packs(args: &BuildArgs) -> bool {
    args.packs_only || (!args.agents_only && !args.teams_only && !args.skip_packs)
}

/// Clean exactly what this invocation is about to rebuild. A `--skip-packs`
/// build leaves prior pack output in place.
fn clean_scopes(args: &BuildArgs) -> Vec<CleanScope> {
    if args.agents_only {
        vec![CleanScope::Agents]
    } else if args.teams_only {
        vec![CleanScope::Teams]
    } else if args.packs_only {
        vec![CleanScope::Packs]
    } else if args.skip_packs {
        vec![CleanScope::Agents, CleanScope::Teams]
    } else {
        vec![CleanScope::All]
    }
}

fn print_summary(summary: &BuildSummary) {
    for path in &summary.built {
        println!(
            "  {} {}",
            Style::new().green().apply_to("built"),
            path.display()
        );
    }
    for warning in &summary.warnings {
        println!(
            "  {} {}",
            Style::new().yellow().apply_to("warning:"),
            warning
        );
    }
    for failure in &summary.failures {
        println!(
            "  {} {}#{}: {}",
            Style::new().red().bold().apply_to("failed"),
            failure.category,
            failure.unit,
            failure.reason
        );
    }
    println!();
    println!(
        "{} {} built, {} failed",
        Style::new().bold().apply_to("Build summary:"),
        summary.built.len(),
        summary.failures.len()
    );
}
