//! Occupancy grid
//!
//! Column-major cell storage indexed `[x][y]`. Every coordinate outside the
//! grid reads as inaccessible, which is what keeps rooms at the edge inside
//! the map during placement checks.

use serde::{Deserialize, Serialize};

use super::cell::{CellKind, RoomNumber};

/// Grid coordinate `(x, y)`
pub type Coord = (usize, usize);

/// The occupancy grid owned by one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellKind>>,
}

impl Grid {
    /// Create a grid with every cell blank
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![CellKind::Blank; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if coordinates are inside the grid
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Apply a signed offset to a coordinate, `None` when it leaves the grid
    pub fn offset(&self, (x, y): Coord, dx: isize, dy: isize) -> Option<Coord> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.in_bounds(nx, ny).then_some((nx, ny))
    }

    /// Cell at the given position, `None` when out of bounds
    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellKind> {
        self.cells.get(x).and_then(|column| column.get(y)).copied()
    }

    /// Check if a cell is blank; out-of-bounds cells never are
    pub fn is_blank(&self, x: usize, y: usize) -> bool {
        matches!(self.cell_at(x, y), Some(CellKind::Blank))
    }

    /// Overwrite a cell; writes outside the grid are ignored
    pub fn set_cell(&mut self, x: usize, y: usize, value: CellKind) {
        if let Some(cell) = self.cells.get_mut(x).and_then(|column| column.get_mut(y)) {
            debug_assert!(
                cell.can_become(value),
                "illegal cell transition at ({x}, {y}): {cell:?} -> {value:?}"
            );
            *cell = value;
        }
    }

    /// Iterate over every cell as `((x, y), kind)`, column by column
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, column)| column.iter().enumerate().map(move |(y, c)| ((x, y), *c)))
    }

    /// Number of cells of the given kind
    pub fn count(&self, kind: CellKind) -> usize {
        self.iter().filter(|(_, c)| *c == kind).count()
    }

    /// Interior cells owned by a room
    pub fn room_cells(&self, room: RoomNumber) -> Vec<Coord> {
        self.iter()
            .filter(|(_, c)| c.room_number() == Some(room))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Row-by-row symbol dump for debugging
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.cells[x][y].symbol());
            }
            out.push('\n');
        }
        out
    }
}
