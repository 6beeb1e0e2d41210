//! Shell completions command

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Generate completions for the requested shell on stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "bundlesmith", &mut std::io::stdout().lock());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap_complete::Shell;

    #[test]
    fn test_completions_generate() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            assert!(run(CompletionsArgs { shell }).is_ok());
        }
    }
}
