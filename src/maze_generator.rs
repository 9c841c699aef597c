//! Map generation

use std::ops::Range;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, warn};

use crate::maze::{Cell, Grid, MazeDescription, Position};

/// Errors from maze generation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("cannot generate a {height}x{width} grid")]
    EmptyGrid { height: usize, width: usize },
    #[error("grid has no free cell for entry or exit")]
    NoFreeCell,
}

/// Random grid maze generator.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    /// Range of the random grid width
    pub const WIDTH_RANGE: Range<usize> = 10..50;
    /// Range of the height offset from width
    pub const HEIGHT_OFFSET_RANGE: Range<i64> = -4..4;
    /// Each cell is drawn from these, three to one towards free
    const CELL_CHOICES: [Cell; 4] = [Cell::Free, Cell::Free, Cell::Free, Cell::Blocked];
    /// Random draws before falling back to choosing among free cells
    const MAX_REJECTION_ATTEMPTS: usize = 10_000;

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a maze of random size
    ///
    /// Width is drawn from [Self::WIDTH_RANGE], height is width plus an
    /// offset from [Self::HEIGHT_OFFSET_RANGE].
    pub fn generate(&mut self) -> Result<MazeDescription, GenerateError> {
        let width = self.random.gen_range(Self::WIDTH_RANGE);
        let offset = self.random.gen_range(Self::HEIGHT_OFFSET_RANGE);
        let height = (width as i64 + offset) as usize;
        self.generate_with_size(height, width)
    }

    /// Generate a maze with fixed dimensions
    ///
    /// Cells are blocked independently with probability 1/4. Entry and exit
    /// are drawn independently among free cells and may coincide.
    pub fn generate_with_size(
        &mut self,
        height: usize,
        width: usize,
    ) -> Result<MazeDescription, GenerateError> {
        if height == 0 || width == 0 {
            return Err(GenerateError::EmptyGrid { height, width });
        }
        let cells: Vec<Vec<Cell>> = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| Self::CELL_CHOICES[self.random.gen_range(0..Self::CELL_CHOICES.len())])
                    .collect()
            })
            .collect();
        let grid = Grid::new(cells).map_err(|_| GenerateError::EmptyGrid { height, width })?;

        let entry = self.random_free_position(&grid)?;
        let exit = self.random_free_position(&grid)?;
        debug!(height, width, ?entry, ?exit, "generated maze");

        MazeDescription::new(grid, entry, exit).map_err(|_| GenerateError::NoFreeCell)
    }

    /// Pick random cells until a free one is hit
    ///
    /// Gives up after [Self::MAX_REJECTION_ATTEMPTS] draws and chooses
    /// uniformly among the free cells instead, which keeps the same
    /// distribution but terminates on a fully blocked grid.
    fn random_free_position(&mut self, grid: &Grid) -> Result<Position, GenerateError> {
        for _ in 0..Self::MAX_REJECTION_ATTEMPTS {
            let pos = Position {
                row: self.random.gen_range(0..grid.height()),
                col: self.random.gen_range(0..grid.width()),
            };
            if grid.get(pos) == Some(Cell::Free) {
                return Ok(pos);
            }
        }
        warn!(
            attempts = Self::MAX_REJECTION_ATTEMPTS,
            "rejection sampling exhausted, choosing among free cells"
        );
        grid.free_cells()
            .choose(&mut self.random)
            .copied()
            .ok_or(GenerateError::NoFreeCell)
    }
}
