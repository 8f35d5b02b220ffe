use anyhow::Result;
use clap::Parser;
use smartspend::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
