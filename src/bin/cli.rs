// src/bin/cli.rs
use color_eyre::Result;
use congress_stats::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    congress_stats::log::init(log::LevelFilter::Info);
    cli::run()?;
    Ok(())
}
