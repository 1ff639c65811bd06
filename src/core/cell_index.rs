use crate::core::rule_helper::{BOARD_SIDE, NUM_CELLS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row-major index of a square, `row * 3 + column`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CellIndex(pub usize);

impl CellIndex {
    pub fn new(idx: usize) -> Option<Self> {
        (idx < NUM_CELLS).then_some(CellIndex(idx))
    }

    /// Zero-indexed row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row >= BOARD_SIDE || column >= BOARD_SIDE {
            return None;
        }

        Some(CellIndex(row * BOARD_SIDE + column))
    }

    pub fn is_valid(self) -> bool {
        self.0 < NUM_CELLS
    }

    pub fn row(self) -> usize {
        self.0 / BOARD_SIDE
    }

    pub fn column(self) -> usize {
        self.0 % BOARD_SIDE
    }

    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..NUM_CELLS).map(CellIndex)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a ply landed, kept alongside each history entry after the first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[readonly::make]
pub struct MoveAnnotation {
    pub row: usize,
    pub column: usize,
}

impl MoveAnnotation {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn from_cell(cell: CellIndex) -> Self {
        Self::new(cell.row(), cell.column())
    }

    pub fn display_row(&self) -> usize {
        self.row + 1
    }

    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

// 1-indexed, for people.
impl fmt::Display for MoveAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.display_row(), self.display_column())
    }
}
