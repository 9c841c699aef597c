//! Path search through a grid maze
//!
//! # Examples
//! ```
//! use maze_match_tools::maze::MazeDescription;
//! use maze_match_tools::maze_solver::solve;
//!
//! let maze: MazeDescription = "2 3\n1 1 2 3\n0 1 0\n0 0 0\n".parse().unwrap();
//! let solution = solve(&maze).unwrap();
//! assert_eq!(solution.steps(), 3);
//! ```

use std::fmt;

use crate::maze::{Cell, MazeDescription, Position};

/// Path from entry to exit, both included
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct MazeSolution {
    pub path: Vec<Position>,
}

/// Side of a cell that the path crosses
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Search order: up, right, down, left
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Depth-first search from entry to exit
///
/// Returns `None` when the exit cannot be reached. The path is simple (no
/// cell repeats) but not necessarily the shortest one.
pub fn solve(maze: &MazeDescription) -> Option<MazeSolution> {
    let grid = maze.grid();
    let mut visited = vec![vec![false; grid.width()]; grid.height()];
    visited[maze.entry().row][maze.entry().col] = true;

    // Each frame holds a cell and the next direction to try from it
    let mut stack = vec![(maze.entry(), 0)];
    while let Some(top) = stack.last_mut() {
        let (pos, dir) = *top;
        if pos == maze.exit() {
            return Some(MazeSolution {
                path: stack.iter().map(|(p, _)| *p).collect(),
            });
        }
        top.1 += 1;

        let Some(&(dy, dx)) = DIRECTIONS.get(dir) else {
            stack.pop();
            continue;
        };
        let next = match (pos.row.checked_add_signed(dy), pos.col.checked_add_signed(dx)) {
            (Some(row), Some(col)) => Position { row, col },
            _ => continue,
        };
        if grid.get(next) == Some(Cell::Free) && !visited[next.row][next.col] {
            visited[next.row][next.col] = true;
            stack.push((next, 0));
        }
    }
    None
}

impl MazeSolution {
    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Check that the path walks from entry to exit over free, adjacent cells
    pub fn is_valid(&self, maze: &MazeDescription) -> bool {
        self.path.first() == Some(&maze.entry())
            && self.path.last() == Some(&maze.exit())
            && self
                .path
                .iter()
                .all(|p| maze.grid().get(*p) == Some(Cell::Free))
            && self
                .path
                .windows(2)
                .all(|w| w[0].row.abs_diff(w[1].row) + w[0].col.abs_diff(w[1].col) == 1)
    }

    /// Draw the maze with the path inside a wall border
    ///
    /// `#` is a blocked cell, `.` a free one, `<` the entry and `>` the exit.
    pub fn render<'a>(&'a self, maze: &'a MazeDescription) -> SolutionView<'a> {
        SolutionView {
            maze,
            solution: self,
        }
    }

    fn glyphs(&self) -> Vec<(Position, char)> {
        self.path
            .windows(3)
            .map(|w| {
                let glyph = match (side_towards(w[1], w[0]), side_towards(w[1], w[2])) {
                    (Side::Top, Side::Bottom) | (Side::Bottom, Side::Top) => '│',
                    (Side::Left, Side::Right) | (Side::Right, Side::Left) => '─',
                    (Side::Top, Side::Right) | (Side::Right, Side::Top) => '└',
                    (Side::Top, Side::Left) | (Side::Left, Side::Top) => '┘',
                    (Side::Bottom, Side::Right) | (Side::Right, Side::Bottom) => '┌',
                    (Side::Bottom, Side::Left) | (Side::Left, Side::Bottom) => '┐',
                    _ => 'X',
                };
                (w[1], glyph)
            })
            .collect()
    }
}

/// Side of `from` facing its neighbour `to`
fn side_towards(from: Position, to: Position) -> Side {
    if to.row < from.row {
        Side::Top
    } else if to.row > from.row {
        Side::Bottom
    } else if to.col < from.col {
        Side::Left
    } else {
        Side::Right
    }
}

/// Printable drawing of a solved maze
pub struct SolutionView<'a> {
    maze: &'a MazeDescription,
    solution: &'a MazeSolution,
}

impl fmt::Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.maze.grid();
        let mut chars: Vec<Vec<char>> = grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Free => '.',
                        Cell::Blocked => '#',
                    })
                    .collect()
            })
            .collect();
        for (pos, glyph) in self.solution.glyphs() {
            chars[pos.row][pos.col] = glyph;
        }
        chars[self.maze.entry().row][self.maze.entry().col] = '<';
        chars[self.maze.exit().row][self.maze.exit().col] = '>';

        let border = "#".repeat(grid.width() + 2);
        writeln!(f, "{}", border)?;
        for row in chars {
            writeln!(f, "#{}#", row.into_iter().collect::<String>())?;
        }
        writeln!(f, "{}", border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_generator::MazeGenerator;

    const OPEN: &str = "3 3
1 1 3 3
0 0 0
1 1 0
0 0 0
";

    #[test]
    fn follows_the_only_corridor() {
        let maze: MazeDescription = OPEN.parse().unwrap();
        let solution = solve(&maze).unwrap();

        let path: Vec<(usize, usize)> = solution.path.iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(solution.steps(), 4);
        assert!(solution.is_valid(&maze));
    }

    #[test]
    fn walled_off_exit_has_no_path() {
        let maze: MazeDescription = "3 3\n1 1 3 3\n0 0 0\n1 1 1\n0 0 0\n".parse().unwrap();
        assert_eq!(solve(&maze), None);
    }

    #[test]
    fn entry_equal_to_exit() {
        let maze: MazeDescription = "1 2\n1 2 1 2\n1 0\n".parse().unwrap();
        let solution = solve(&maze).unwrap();
        assert_eq!(solution.steps(), 0);
        assert!(solution.is_valid(&maze));
    }

    #[test]
    fn render_draws_path() {
        let maze: MazeDescription = OPEN.parse().unwrap();
        let solution = solve(&maze).unwrap();

        assert_eq!(
            solution.render(&maze).to_string(),
            "#####\n#<─┐#\n###│#\n#..>#\n#####\n"
        );
    }

    #[test]
    fn rejects_broken_paths() {
        let maze: MazeDescription = OPEN.parse().unwrap();
        let jump = MazeSolution {
            path: vec![Position { row: 0, col: 0 }, Position { row: 2, col: 2 }],
        };
        let through_wall = MazeSolution {
            path: vec![
                Position { row: 0, col: 0 },
                Position { row: 1, col: 0 },
                Position { row: 2, col: 0 },
                Position { row: 2, col: 1 },
                Position { row: 2, col: 2 },
            ],
        };
        assert!(!jump.is_valid(&maze));
        assert!(!through_wall.is_valid(&maze));
    }

    #[test]
    fn solutions_of_generated_mazes_are_valid() {
        let mut gen = MazeGenerator::new(Some(5));
        let mut solved = 0;
        for _ in 0..50 {
            let maze = gen.generate().unwrap();
            if let Some(solution) = solve(&maze) {
                assert!(solution.is_valid(&maze));
                solved += 1;
            }
        }
        assert!(solved > 0);
    }
}
