//! Command line front end: prints a maze and optionally writes it as a PNG.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use mazegen::{generate, to_image, ColorIndex, Location, MazeConfig, ARCADE_PALETTE};

/// Generate perfect maze images
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with maze settings; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels (odd numbers work best)
    #[arg(long)]
    width: Option<usize>,

    /// Image height in pixels (odd numbers work best)
    #[arg(long)]
    height: Option<usize>,

    /// Where to put the entrance, e.g. top-left or left-side
    #[arg(long)]
    entrance: Option<Location>,

    /// Where to put the exit, e.g. bottom-right or center
    #[arg(long)]
    exit: Option<Location>,

    /// Palette index of the entrance pixel
    #[arg(long)]
    start_color: Option<ColorIndex>,

    /// Palette index of the exit pixel
    #[arg(long)]
    end_color: Option<ColorIndex>,

    /// Palette index of all other passage pixels
    #[arg(long)]
    default_color: Option<ColorIndex>,

    /// Random seed; a random one is picked and printed when missing
    #[arg(long)]
    seed: Option<u64>,

    /// Write the maze to this PNG file using the Arcade palette
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Size of each maze pixel in the PNG
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Draw the path from entrance to exit
    #[arg(long)]
    solve: bool,

    /// Do not print the maze
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn to_config(&self) -> anyhow::Result<MazeConfig> {
        let mut config = match &self.config {
            Some(path) => MazeConfig::load(path)?,
            None => MazeConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(entrance) = self.entrance {
            config.entrance = entrance;
        }
        if let Some(exit) = self.exit {
            config.exit = exit;
        }
        if let Some(color) = self.start_color {
            config.start_color = color;
        }
        if let Some(color) = self.end_color {
            config.end_color = color;
        }
        if let Some(color) = self.default_color {
            config.default_color = color;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let args = Args::parse();
    let config = args.to_config()?;
    let maze = generate(&config)?;

    info!(
        "generated {}x{} maze, entrance {} exit {}",
        maze.width(),
        maze.height(),
        maze.entrance,
        maze.exit
    );
    if let Some(seed) = maze.seed {
        eprintln!("seed: {}", seed);
    }

    if !args.quiet {
        if args.solve {
            print!("{}", maze.display_solution());
        } else {
            print!("{}", maze);
        }
    }

    if let Some(path) = &args.output {
        to_image(&maze.grid, &ARCADE_PALETTE, args.scale)?
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
