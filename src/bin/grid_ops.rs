// Feed every byte of a file into a 16x16 grid and print the clear count
use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_ops", version, about = "Toggle a 16x16 bit grid from a byte stream")]
struct Cli {
    /// Binary file; each byte names a cell as (high nibble, low nibble)
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if !cli.input.exists() {
        bail!("{} does not exist", cli.input.display());
    }

    let bytes = bit_grid::tools::read_input(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!("read {} bytes from {}", bytes.len(), cli.input.display());

    let grid = bit_grid::process(&bytes).context("failed to apply input to grid")?;
    println!("{}", grid.clear_count());
    Ok(())
}
