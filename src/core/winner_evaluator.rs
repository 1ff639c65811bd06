use crate::core::{
    board::Board,
    cell_index::CellIndex,
    mark::Mark,
    rule_helper::WINNING_LINES,
};

pub struct WinnerEvaluator;

impl WinnerEvaluator {
    /// Mark owning the first complete line, scanning rows, then columns, then diagonals.
    pub fn evaluate(board: &Board) -> Option<Mark> {
        Self::winning_line(board).and_then(|line| board.cell(line[0]).mark())
    }

    pub fn winning_line(board: &Board) -> Option<[CellIndex; 3]> {
        WINNING_LINES
            .iter()
            .map(|&[a, b, c]| [CellIndex(a), CellIndex(b), CellIndex(c)])
            .find(|&[a, b, c]| {
                let first = board.cell(a);
                !first.is_empty() && first == board.cell(b) && first == board.cell(c)
            })
    }

    /// A full board with no line.
    pub fn is_draw(board: &Board) -> bool {
        board.is_full() && Self::evaluate(board).is_none()
    }

    pub fn is_decided(board: &Board) -> bool {
        Self::evaluate(board).is_some() || board.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::from_text(text).unwrap_or_else(|| panic!("bad board text '{text}'"))
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(WinnerEvaluator::evaluate(&Board::empty()), None);
        assert!(!WinnerEvaluator::is_decided(&Board::empty()));
    }

    #[test]
    fn detects_every_line() {
        for line in WINNING_LINES {
            let mut cells = Board::empty();
            for idx in line {
                cells = cells.with_mark(CellIndex(idx), Mark::O);
            }
            assert_eq!(WinnerEvaluator::evaluate(&cells), Some(Mark::O), "line {line:?}");
            assert_eq!(
                WinnerEvaluator::winning_line(&cells),
                Some(line.map(CellIndex))
            );
        }
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        assert_eq!(WinnerEvaluator::evaluate(&board("XXO ... ...")), None);
        assert_eq!(WinnerEvaluator::evaluate(&board("X.. O.. X..")), None);
    }

    #[test]
    fn matches_line_table_for_every_board() {
        // Enumerate every board of X, O and empty cells (3^9) and compare
        // against a direct reading of the line table.
        for code in 0..3usize.pow(9) {
            let mut cells = Board::empty();
            let mut rest = code;
            for idx in 0..9 {
                match rest % 3 {
                    1 => cells = cells.with_mark(CellIndex(idx), Mark::X),
                    2 => cells = cells.with_mark(CellIndex(idx), Mark::O),
                    _ => {}
                }
                rest /= 3;
            }

            let expected = WINNING_LINES.iter().find_map(|line| {
                let marks = line.map(|idx| cells.cell(CellIndex(idx)).mark());
                match marks {
                    [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
                    _ => None,
                }
            });
            assert_eq!(WinnerEvaluator::evaluate(&cells), expected, "board\n{cells}");
        }
    }

    #[test]
    fn first_line_in_table_order_wins_ties() {
        // Both the top row and the left column are complete for X.
        let cells = board("XXX X.. X..");
        assert_eq!(
            WinnerEvaluator::winning_line(&cells),
            Some([CellIndex(0), CellIndex(1), CellIndex(2)])
        );
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let cells = board("XXO OOX XOX");
        assert!(WinnerEvaluator::is_draw(&cells));
        assert!(WinnerEvaluator::is_decided(&cells));
    }

    #[test]
    fn full_board_with_line_is_not_draw() {
        let cells = board("XXX OOX OXO");
        assert!(!WinnerEvaluator::is_draw(&cells));
        assert_eq!(WinnerEvaluator::evaluate(&cells), Some(Mark::X));
    }
}
