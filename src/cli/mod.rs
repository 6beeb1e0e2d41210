//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - validate: Validate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod validate;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use validate::ValidateArgs;

/// Bundlesmith - deterministic bundle builder for agent definition corpora
///
/// Resolves the dependency graph of a definition corpus (agents, tasks,
/// templates, checklists, data, workflows, teams) and assembles
/// self-contained text bundles.
#[derive(Parser, Debug)]
#[command(
    name = "bundlesmith",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Deterministic bundle builder for AI agent definition corpora",
    long_about = "Bundlesmith turns a corpus of cross-referencing definition documents \
                  (agent personas, tasks, templates, checklists, knowledge snippets, teams) \
                  into deterministic, self-contained text bundles for web and IDE consumption.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundlesmith build                      \x1b[90m# Build all agent and team bundles\x1b[0m\n   \
                  bundlesmith build --agents-only        \x1b[90m# Rebuild agent bundles only\x1b[0m\n   \
                  bundlesmith build --skip-clean         \x1b[90m# Incremental build, keep prior output\x1b[0m\n   \
                  bundlesmith validate                   \x1b[90m# Fail-fast configuration health check\x1b[0m\n   \
                  bundlesmith list-agents                \x1b[90m# List known agents\x1b[0m\n   \
                  bundlesmith list-packs                 \x1b[90m# List add-on packs\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Source corpus root directory
    #[arg(long, short = 's', global = true, env = "BUNDLESMITH_SOURCE", default_value = ".")]
    pub source: PathBuf,

    /// Output directory for built artifacts
    #[arg(long, short = 'o', global = true, env = "BUNDLESMITH_OUTPUT", default_value = "dist")]
    pub output: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build bundles for agents, teams and packs
    Build(BuildArgs),

    /// Resolve everything without writing artifacts; stop at the first error
    Validate(ValidateArgs),

    /// List known agents
    #[command(name = "list-agents")]
    ListAgents,

    /// List add-on packs
    #[command(name = "list-packs")]
    ListPacks,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_build() {
        let cli = Cli::try_parse_from(["bundlesmith", "build"]).unwrap();
        assert!(matches!(cli.command, Commands::Build(_)));
        assert_eq!(cli.source, PathBuf::from("."));
        assert_eq!(cli.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_cli_parsing_build_flags() {
        let cli =
            Cli::try_parse_from(["bundlesmith", "build", "--agents-only", "--skip-clean"]).unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert!(args.agents_only);
                assert!(args.skip_clean);
                assert!(!args.teams_only);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_only_flags_conflict() {
        let result = Cli::try_parse_from(["bundlesmith", "build", "--agents-only", "--teams-only"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_validate() {
        let cli = Cli::try_parse_from(["bundlesmith", "validate", "--strict-cycles"]).unwrap();
        match cli.command {
            Commands::Validate(args) => assert!(args.strict_cycles),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parsing_list_commands() {
        let cli = Cli::try_parse_from(["bundlesmith", "list-agents"]).unwrap();
        assert!(matches!(cli.command, Commands::ListAgents));
        let cli = Cli::try_parse_from(["bundlesmith", "list-packs"]).unwrap();
        assert!(matches!(cli.command, Commands::ListPacks));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "bundlesmith",
            "-s",
            "/tmp/corpus",
            "-o",
            "/tmp/out",
            "validate",
        ])
        .unwrap();
        assert_eq!(cli.source, PathBuf::from("/tmp/corpus"));
        assert_eq!(cli.output, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["bundlesmith", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, clap_complete::Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
        assert!(Cli::try_parse_from(["bundlesmith", "completions", "tcsh"]).is_err());
    }
}
