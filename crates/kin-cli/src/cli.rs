use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `kin` binary.
///
/// There are no subcommands: the surface is the interactive menu, and flags
/// only tune it.
#[derive(Debug, Parser)]
#[command(name = "kin", version, about = "Kinema - interactive kinematics problem solver")]
pub struct Cli {
    /// History file path (overrides configuration)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Max history entries to display (overrides configuration)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Quiet mode (suppress non-essential logging)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
