//! Maze generation and substring matching verification
//!
//! Independent tools share this crate:
//!
//! - [maze_generator] draws random grid mazes in the text format of [maze],
//!   used as input for maze solvers.
//! - [maze_solver] searches a path from entry to exit in such a maze.
//! - [verifier] runs an external substring matching program over the test
//!   cases of a [fixture] and checks its answers against [matching].
//!
//! # Examples
//! ```
//! use maze_match_tools::maze_generator::MazeGenerator;
//!
//! let mut gen = MazeGenerator::new(Some(42));
//! let maze = gen.generate().unwrap();
//! print!("{}", maze);
//! ```

pub mod fixture;
pub mod matching;
pub mod maze;
pub mod maze_generator;
pub mod maze_solver;
pub mod verifier;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
