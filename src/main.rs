mod buffer;
mod config;
mod error;
mod life;
mod raster;
mod screen;
mod seed;
mod settings;
mod snapshot;
mod viz;

use clap::Parser;
use config::LifeConfig;
use settings::Settings;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifescreen")]
#[command(version = "0.1.0")]
#[command(about = "Full-screen Conway's Game of Life rendered from a pixel raster", long_about = None)]
struct Cli {
    /// Animation step delay in seconds
    #[arg(short, long)]
    time: Option<f32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Raster width in pixels (default: one per terminal column)
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Raster height in pixels (default: two per terminal row)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Print a single evolved frame to stdout and exit
    #[arg(short, long)]
    print: bool,

    /// Generations to evolve in print mode
    #[arg(short, long, default_value = "100")]
    generations: u32,

    /// Save the final frame as a PNG image
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();

    let config = LifeConfig {
        time_step: cli.time.or(settings.viz.time).unwrap_or(0.05),
        seed: cli.seed,
        width: cli.width.or(settings.viz.width),
        height: cli.height.or(settings.viz.height),
        print: cli.print,
        generations: cli.generations,
        export: cli.export,
    };

    viz::run(config)
}
