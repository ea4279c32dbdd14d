use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Impassable wall (`#`).
    Wall,
    /// Open floor (`.`).
    Floor,
    /// An agent's starting cell (`@`). Traversable once the agent moves off.
    Start,
    /// A collectible key (`a`-`z`).
    Key(char),
    /// A door opened by the matching lowercase key (`A`-`Z`).
    Door(char),
}

impl Cell {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            '@' => Some(Cell::Start),
            'a'..='z' => Some(Cell::Key(c)),
            'A'..='Z' => Some(Cell::Door(c)),
            _ => None,
        }
    }
}

/// Row and column coordinates within a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular cell matrix, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Load a grid from a text file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.width + pos.col]
    }

    /// Iterate all cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &cell)| (Position::new(index / width, index % width), cell))
    }

    /// In-bounds orthogonal neighbours of `pos`.
    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> {
        let width = self.width;
        let height = self.height;
        let row = pos.row as isize;
        let col = pos.col as isize;
        [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)]
            .into_iter()
            .filter(move |&(r, c)| {
                r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width
            })
            .map(|(r, c)| Position::new(r as usize, c as usize))
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in s.trim_end_matches(['\r', '\n']).lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let expected = *width.get_or_insert(line.chars().count());
            let mut found = 0;

            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(Error::InvalidCell {
                    at: Position::new(row, col),
                    found: c,
                })?;
                cells.push(cell);
                found += 1;
            }

            if found != expected {
                return Err(Error::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }

        debug!(width, height, "parsed grid");

        Ok(Grid {
            cells,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_cell_kind() {
        let grid: Grid = "#.@aZ".parse().expect("grid parses");
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.cell(Position::new(0, 0)), Cell::Wall);
        assert_eq!(grid.cell(Position::new(0, 1)), Cell::Floor);
        assert_eq!(grid.cell(Position::new(0, 2)), Cell::Start);
        assert_eq!(grid.cell(Position::new(0, 3)), Cell::Key('a'));
        assert_eq!(grid.cell(Position::new(0, 4)), Cell::Door('Z'));
    }

    #[test]
    fn trailing_newline_is_ignored() {
        let grid: Grid = "@.a\n".parse().expect("grid parses");
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn ragged_row_is_rejected() {
        let error = "###\n##".parse::<Grid>().expect_err("ragged grid");
        assert!(matches!(
            error,
            Error::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn unknown_character_is_rejected() {
        let error = "@.?".parse::<Grid>().expect_err("invalid cell");
        assert!(matches!(error, Error::InvalidCell { found: '?', .. }));
    }

    #[test]
    fn empty_input_is_rejected() {
        let error = "".parse::<Grid>().expect_err("empty grid");
        assert!(matches!(error, Error::EmptyGrid));
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let grid: Grid = "@.\n..".parse().expect("grid parses");
        let corner: Vec<Position> = grid.neighbours(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let inner: Vec<Position> = grid.neighbours(Position::new(1, 1)).collect();
        assert_eq!(inner.len(), 2);
    }
}
