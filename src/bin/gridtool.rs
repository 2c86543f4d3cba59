use anyhow::{Context, bail};
use bit_grid::PackedBitGrid;
use bit_grid::config::{batch_limit_from_env, input_root_from_env};
use bit_grid::tools::{
    NIBBLE_GRID_DIM, apply_bytes, grid_stats, input_iter, read_input, run_batch, save_png,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridtool", version, about = "bit_grid debugging tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply an input file and print the clear count
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = NIBBLE_GRID_DIM)]
        rows: usize,
        #[arg(long, default_value_t = NIBBLE_GRID_DIM)]
        cols: usize,
    },
    /// Print the grid after applying an input file, optionally as a PNG too
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long, default_value_t = 16)]
        scale: u32,
    },
    /// Print set/clear statistics after applying an input file
    Stats {
        #[arg(long)]
        input: PathBuf,
    },
    /// Run every .bin file under a directory in parallel
    Batch {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run { input, rows, cols } => run_cmd(&input, rows, cols),
        Command::Render { input, png, scale } => render_cmd(&input, png.as_deref(), scale),
        Command::Stats { input } => stats_cmd(&input),
        Command::Batch { root, limit } => batch_cmd(root, limit),
    }
}

fn load_grid(input: &Path, rows: usize, cols: usize) -> anyhow::Result<PackedBitGrid> {
    if !input.exists() {
        bail!("{} does not exist", input.display());
    }
    let bytes = read_input(input).with_context(|| format!("failed to read {}", input.display()))?;
    let mut grid = PackedBitGrid::new(rows, cols)?;
    apply_bytes(&mut grid, &bytes)
        .with_context(|| format!("input {} does not fit a {rows}x{cols} grid", input.display()))?;
    Ok(grid)
}

fn run_cmd(input: &Path, rows: usize, cols: usize) -> anyhow::Result<()> {
    let grid = load_grid(input, rows, cols)?;
    println!("{}", grid.clear_count());
    Ok(())
}

fn render_cmd(input: &Path, png: Option<&Path>, scale: u32) -> anyhow::Result<()> {
    let grid = load_grid(input, NIBBLE_GRID_DIM, NIBBLE_GRID_DIM)?;
    let stdout = std::io::stdout();
    grid.render(&mut stdout.lock())?;
    if let Some(png) = png {
        save_png(&grid, png, scale).with_context(|| format!("failed to write {}", png.display()))?;
        println!("Wrote {}", png.display());
    }
    Ok(())
}

fn stats_cmd(input: &Path) -> anyhow::Result<()> {
    let grid = load_grid(input, NIBBLE_GRID_DIM, NIBBLE_GRID_DIM)?;
    let stats = grid_stats(&grid);
    println!("Input: {} ({}x{})", input.display(), grid.rows(), grid.cols());
    println!(
        "Cells: set={} clear={} total={} set_ratio={:.2}%",
        stats.set_cells,
        stats.clear_cells,
        stats.total_cells,
        stats.set_ratio * 100.0
    );
    Ok(())
}

fn batch_cmd(root: Option<PathBuf>, limit: Option<usize>) -> anyhow::Result<()> {
    let root = root.unwrap_or_else(input_root_from_env);
    let limit = limit.or_else(batch_limit_from_env);
    let inputs: Vec<PathBuf> = input_iter(&root, limit).collect();
    if inputs.is_empty() {
        bail!("no .bin inputs under {}", root.display());
    }

    let start = Instant::now();
    let results = run_batch(&inputs);
    let elapsed = start.elapsed();

    let mut failed = 0usize;
    for result in &results {
        match &result.outcome {
            Ok(clear) => println!("{}: {}", result.path.display(), clear),
            Err(err) => {
                failed += 1;
                eprintln!("{}: {}", result.path.display(), err);
            }
        }
    }

    println!(
        "\nProcessed {} files ({} failed) in {:.2} ms",
        results.len(),
        failed,
        elapsed.as_secs_f64() * 1000.0
    );
    if failed > 0 {
        bail!("{failed} of {} inputs failed", results.len());
    }
    Ok(())
}
