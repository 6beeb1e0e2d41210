use clap::Parser;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the whole corpus:\n    bundlesmith validate\n\n\
                  Also reject dependency cycles:\n    bundlesmith validate --strict-cycles")]
pub struct ValidateArgs {
    /// Treat dependency cycles as errors instead of already-included
    #[arg(long)]
    pub strict_cycles: bool,
}
