//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use maze_match_tools::{maze::MazeDescription, maze_solver};

/// Find a path from entry to exit in a grid maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print only the summary, without the drawing
    #[arg(short, long)]
    quiet: bool,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    maze_match_tools::init_logging();
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let maze: MazeDescription = text.parse().context("Invalid maze")?;

    match maze_solver::solve(&maze) {
        Some(solution) => {
            if !args.quiet {
                print!("{}", solution.render(&maze));
            }
            println!("Found a path of {} steps.", solution.steps());
        }
        None => println!("There is no path from entry to exit."),
    }
    Ok(())
}
