use clap::Parser;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build everything:\n    bundlesmith build\n\n\
                  Rebuild team bundles only:\n    bundlesmith build --teams-only\n\n\
                  Build core bundles without packs:\n    bundlesmith build --skip-packs\n\n\
                  Incremental build keeping prior output:\n    bundlesmith build --skip-clean")]
pub struct BuildArgs {
    /// Build agent bundles only
    #[arg(long, conflicts_with_all = ["teams_only", "packs_only"])]
    pub agents_only: bool,

    /// Build team bundles only
    #[arg(long, conflicts_with = "packs_only")]
    pub teams_only: bool,

    /// Build pack bundles only
    #[arg(long)]
    pub packs_only: bool,

    /// Skip add-on packs
    #[arg(long, conflicts_with = "packs_only")]
    pub skip_packs: bool,

    /// Keep prior artifacts instead of cleaning the scoped output directories
    #[arg(long)]
    pub skip_clean: bool,

    /// Treat dependency cycles as errors instead of already-included
    #[arg(long)]
    pub strict_cycles: bool,
}
