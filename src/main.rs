use clap::Parser;
use dirsync::config::Cli;
use dirsync::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    dirsync::commands::sync::run(config)?;

    Ok(())
}
