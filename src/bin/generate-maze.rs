//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use maze_match_tools::maze_generator::MazeGenerator;

/// Random grid maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field height, random when omitted
    #[arg(long, requires = "width")]
    height: Option<usize>,

    /// Generated field width, random when omitted
    #[arg(long, requires = "height")]
    width: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate a maze, print it to stdout
fn main() -> anyhow::Result<()> {
    maze_match_tools::init_logging();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    // clap rejects one dimension without the other
    let maze = match (args.height, args.width) {
        (Some(height), Some(width)) => gen.generate_with_size(height, width),
        _ => gen.generate(),
    }
    .context("Could not generate maze")?;
    print!("{}", maze);
    Ok(())
}
