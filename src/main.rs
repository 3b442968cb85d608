use clap::Parser;
use miette::Result;
use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::args::{Args, Command};
use crate::config::read_config;

mod args;
mod check;
mod common;
mod config;
pub mod data;
mod emit;
mod scan;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = Args::parse();
    init_tracing();

    match args.command {
        Command::Check(check_args) => {
            let cfg = read_config(&check_args.directory).await?;
            check::check_site(&check_args.directory, &cfg).await
        }
        Command::Emit(emit_args) => {
            let cfg = read_config(&emit_args.directory).await?;
            emit::emit_site(&emit_args.directory, &cfg).await
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_max_level(LevelFilter::TRACE)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .compact()
        .init();
}
