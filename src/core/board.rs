use crate::core::{
    cell_index::CellIndex,
    mark::{Cell, Mark},
    rule_helper::{BOARD_SIDE, NUM_CELLS},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// One snapshot of the nine squares. Boards are values; placing a mark
/// yields a new board and leaves this one untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; NUM_CELLS]) -> Self {
        Self { cells }
    }

    /// Parses nine characters of `X`, `O` and `.`; whitespace and `|` are ignored.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut cells = [Cell::Empty; NUM_CELLS];
        let mut num_cells = 0;

        for ch in text.chars().filter(|ch| !ch.is_whitespace() && *ch != '|') {
            if num_cells == NUM_CELLS {
                return None;
            }

            cells[num_cells] = match ch.to_ascii_uppercase() {
                'X' => Cell::X,
                'O' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                _ => return None,
            };
            num_cells += 1;
        }

        (num_cells == NUM_CELLS).then_some(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    pub fn cell(&self, cell: CellIndex) -> Cell {
        self.cells[cell.0]
    }

    pub fn is_empty_at(&self, cell: CellIndex) -> bool {
        self.cell(cell).is_empty()
    }

    pub fn with_mark(&self, cell: CellIndex, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[cell.0] = mark.into();
        Self { cells }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn num_marks(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .positions(|cell| cell.is_empty())
            .map(CellIndex)
    }

    /// Cells whose contents differ between the two boards.
    pub fn diff(&self, other: &Board) -> Vec<CellIndex> {
        CellIndex::all()
            .filter(|cell| self.cell(*cell) != other.cell(*cell))
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIDE)
    }

    pub fn labels(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|cell| cell.label().to_string())
            .collect()
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, cell: CellIndex) -> &Self::Output {
        &self.cells[cell.0]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .rows()
            .map(|row| row.iter().join("|"))
            .join("\n");
        f.write_str(&text)
    }
}
