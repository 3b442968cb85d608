use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[clap(infer_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Validates the navigation against the content directory
    Check(CheckArgs),

    /// Writes the generator config and sitemap to the output directory
    Emit(EmitArgs),
}

#[derive(Clone, Debug, Parser)]
pub struct CheckArgs {
    #[clap(default_value = ".")]
    pub directory: PathBuf,
}

#[derive(Clone, Debug, Parser)]
pub struct EmitArgs {
    #[clap(default_value = ".")]
    pub directory: PathBuf,
}
