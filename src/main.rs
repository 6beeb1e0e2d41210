//! Bundlesmith - deterministic bundle builder
//!
//! Resolves the transitive dependency graph of a definition corpus (agent
//! personas, tasks, templates, checklists, knowledge snippets, teams) and
//! assembles self-contained text bundles, reproducibly across repeated and
//! partial builds.

use clap::Parser;

mod assembler;
mod builder;
mod cli;
mod commands;
mod domain;
mod error;
mod frontmatter;
mod resolver;
mod store;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.source, cli.output, args),
        Commands::Validate(args) => commands::validate::run(cli.source, cli.output, args),
        Commands::ListAgents => commands::list::run_agents(cli.source),
        Commands::ListPacks => commands::list::run_packs(cli.source),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
