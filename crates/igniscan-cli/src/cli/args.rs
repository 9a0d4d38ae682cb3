use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "igniscan",
    version,
    about = "Visual quality inspection of spark plugs via multi-modal generative inference"
)]
pub struct Cli {
    /// Path to the deployment configuration file
    #[arg(long, global = true, default_value = "igniscan.yaml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Inspect a probe image and produce a PASS/FAIL verdict
    Inspect(InspectArgs),
    /// List the built-in severity profiles and their criteria
    Profiles,
    /// Resolve the reference corpus and print its handles
    Corpus,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Probe image: a backend-resolvable locator (gs://..., https://...) or
    /// a local file whose bytes are uploaded inline
    pub probe: String,

    /// Severity profile (lenient|strict|focused); defaults to the
    /// deployment's configured profile
    #[arg(long)]
    pub profile: Option<String>,

    /// Override the configured output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the structured verdict as JSON on stdout instead of writing
    /// result files
    #[arg(long)]
    pub json: bool,
}
