use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlesmith completions bash > ~/.bash_completion.d/bundlesmith\n\n\
                  Generate zsh completions:\n    bundlesmith completions zsh > ~/.zfunc/_bundlesmith\n\n\
                  Generate fish completions:\n    bundlesmith completions fish > ~/.config/fish/completions/bundlesmith.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
