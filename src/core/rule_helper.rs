use crate::core::mark::Mark;

pub const BOARD_SIDE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIDE * BOARD_SIDE;
pub const MAX_PLY: usize = NUM_CELLS;

pub const FIRST_MARK: Mark = Mark::X;

// Scan order matters; evaluation reports the first complete line.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark of the player to move once `ply` plies have been played.
pub fn next_mark(ply: usize) -> Mark {
    if ply % 2 == 0 {
        FIRST_MARK
    } else {
        FIRST_MARK.opposite()
    }
}

/// Mark placed by the `ply`-th ply, counting from 1.
pub fn mark_for_ply(ply: usize) -> Mark {
    next_mark(ply.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_mark_alternates_starting_with_x() {
        let marks = (0..5).map(next_mark).collect::<Vec<_>>();
        assert_eq!(marks, vec![Mark::X, Mark::O, Mark::X, Mark::O, Mark::X]);
    }

    #[test]
    fn odd_plies_are_x_and_even_plies_are_o() {
        for ply in 1..=MAX_PLY {
            let expected = if ply % 2 == 1 { Mark::X } else { Mark::O };
            assert_eq!(mark_for_ply(ply), expected, "ply {ply}");
        }
    }

    #[test]
    fn winning_lines_cover_each_cell() {
        for cell in 0..NUM_CELLS {
            assert!(
                WINNING_LINES.iter().any(|line| line.contains(&cell)),
                "cell {cell} is on no line"
            );
        }
    }
}
