use anyhow::Result;
use clap::Parser;

use mapref::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Parse { paths } => mapref::cli::parse::run(&paths),
        Commands::Comment { url, inline, block } => {
            mapref::cli::comment::run(url.as_deref(), inline.as_deref(), block)
        }
    }
}
