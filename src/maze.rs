//! Grid maze description and its text format
//!
//! The format is:
//!
//! ```text
//! <height> <width>
//! <entry_row> <entry_col> <exit_row> <exit_col>
//! <height rows of width space-separated 0/1 tokens>
//! ```
//!
//! Coordinates are one-based in text and zero-based in [Position].
//!
//! # Examples
//! ```
//! use maze_match_tools::maze::MazeDescription;
//!
//! let text = "2 3\n1 1 2 3\n0 1 0\n0 0 0\n";
//! let maze: MazeDescription = text.parse().unwrap();
//! assert_eq!(maze.grid().width(), 3);
//! assert_eq!(maze.to_string(), text);
//! ```

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// Single square of the grid
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Cell {
    /// Walkable, printed as `0`
    Free,
    /// Obstacle, printed as `1`
    Blocked,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Free => write!(f, "0"),
            Cell::Blocked => write!(f, "1"),
        }
    }
}

/// Location in the grid, zero-based
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Rectangular matrix of cells, row-major
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
}

/// Errors from building or parsing a maze description
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeFormatError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("unexpected cell token `{token}` at row {row}")]
    InvalidCell { row: usize, token: String },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("{which} position {row} {col} is outside the grid")]
    OutOfBounds {
        which: &'static str,
        row: usize,
        col: usize,
    },
    #[error("{which} position {row} {col} is not a free cell")]
    NotFree {
        which: &'static str,
        row: usize,
        col: usize,
    },
}

impl Grid {
    /// Build a grid, checking that all rows have equal, non-zero length.
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self, MazeFormatError> {
        let width = cells.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(MazeFormatError::Empty);
        }
        if let Some((row, r)) = cells.iter().find_position(|r| r.len() != width) {
            return Err(MazeFormatError::RaggedRow {
                row,
                found: r.len(),
                expected: width,
            });
        }
        Ok(Self { cells, width })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at `pos`, or `None` outside the grid
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// All free positions in row-major order
    pub fn free_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, r)| {
                r.iter()
                    .positions(|c| *c == Cell::Free)
                    .map(move |col| Position { row, col })
            })
            .collect()
    }

    fn check_free(&self, which: &'static str, pos: Position) -> Result<(), MazeFormatError> {
        match self.get(pos) {
            Some(Cell::Free) => Ok(()),
            Some(Cell::Blocked) => Err(MazeFormatError::NotFree {
                which,
                row: pos.row,
                col: pos.col,
            }),
            None => Err(MazeFormatError::OutOfBounds {
                which,
                row: pos.row,
                col: pos.col,
            }),
        }
    }
}

/// Grid together with its entry and exit
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MazeDescription {
    grid: Grid,
    entry: Position,
    exit: Position,
}

impl MazeDescription {
    /// Combine grid and end points. Both end points must be free cells;
    /// they may coincide.
    pub fn new(grid: Grid, entry: Position, exit: Position) -> Result<Self, MazeFormatError> {
        grid.check_free("entry", entry)?;
        grid.check_free("exit", exit)?;
        Ok(Self { grid, entry, exit })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn exit(&self) -> Position {
        self.exit
    }
}

impl fmt::Display for MazeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.grid.height(), self.grid.width())?;
        writeln!(
            f,
            "{} {} {} {}",
            self.entry.row + 1,
            self.entry.col + 1,
            self.exit.row + 1,
            self.exit.col + 1
        )?;
        for row in self.grid.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for MazeDescription {
    type Err = MazeFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let header = lines.next().ok_or(MazeFormatError::Missing("header line"))?;
        let mut header = header.split_whitespace();
        let height = next_number(&mut header, "height")?;
        let width = next_number(&mut header, "width")?;

        let ends = lines
            .next()
            .ok_or(MazeFormatError::Missing("entry/exit line"))?;
        let mut ends = ends.split_whitespace();
        let entry = next_position(&mut ends, "entry")?;
        let exit = next_position(&mut ends, "exit")?;

        let cells = lines
            .take(height)
            .enumerate()
            .map(|(row, line)| {
                line.split_whitespace()
                    .map(|token| match token {
                        "0" => Ok(Cell::Free),
                        "1" => Ok(Cell::Blocked),
                        _ => Err(MazeFormatError::InvalidCell {
                            row,
                            token: token.to_string(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        if cells.len() != height {
            return Err(MazeFormatError::RowCount {
                expected: height,
                found: cells.len(),
            });
        }

        let grid = Grid::new(cells)?;
        if grid.width() != width {
            return Err(MazeFormatError::RaggedRow {
                row: 0,
                found: grid.width(),
                expected: width,
            });
        }
        Self::new(grid, entry, exit)
    }
}

fn next_number<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, MazeFormatError> {
    let token = tokens.next().ok_or(MazeFormatError::Missing(what))?;
    token
        .parse()
        .map_err(|_| MazeFormatError::InvalidNumber(token.to_string()))
}

/// Read a one-based `row col` pair into a zero-based position
fn next_position<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    which: &'static str,
) -> Result<Position, MazeFormatError> {
    let row = next_number(tokens, which)?;
    let col = next_number(tokens, which)?;
    if row == 0 || col == 0 {
        return Err(MazeFormatError::OutOfBounds { which, row, col });
    }
    Ok(Position {
        row: row - 1,
        col: col - 1,
    })
}
