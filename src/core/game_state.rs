use crate::core::{
    board::Board,
    cell_index::{CellIndex, MoveAnnotation},
    game_options::GameOptions,
    game_status::GameStatus,
    mark::Mark,
    move_description::{HistoryOrder, MoveDescription},
    rule_helper::{self, MAX_PLY},
    winner_evaluator::WinnerEvaluator,
};
use crate::util::log::log_if;
use std::fmt;

/// One game: the board snapshots played so far and which one is showing.
///
/// Snapshot 0 is always the empty board and snapshot `k` is the board after
/// the `k`-th ply. Rewinding is destructive: jumping back discards every
/// later snapshot, so there is only ever one timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    options: GameOptions,
    history: Vec<Board>,
    annotations: Vec<MoveAnnotation>,
    current_move: usize,
}

impl GameState {
    pub fn at_start(options: GameOptions) -> Self {
        Self {
            options,
            history: vec![Board::empty()],
            annotations: Vec::new(),
            current_move: 0,
        }
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_board(&self) -> Board {
        self.history[self.current_move]
    }

    pub fn next_mark(&self) -> Mark {
        rule_helper::next_mark(self.current_move)
    }

    /// Annotation of the ply that produced snapshot `move_num`; game start has none.
    pub fn annotation(&self, move_num: usize) -> Option<MoveAnnotation> {
        move_num
            .checked_sub(1)
            .and_then(|idx| self.annotations.get(idx))
            .copied()
    }

    pub fn check_play(&self, cell: CellIndex) -> Result<(), PlayError> {
        if !cell.is_valid() {
            return Err(PlayError::OutOfRange { cell });
        }

        let status = self.status();
        if status.is_over() {
            return Err(PlayError::GameOver { status });
        }

        let board = self.current_board();
        if let Some(mark) = board.cell(cell).mark() {
            return Err(PlayError::Occupied { cell, mark });
        }

        Ok(())
    }

    /// Places the next mark on `cell`. Illegal plays leave the game untouched
    /// and return the current board with `false`.
    pub fn play(&mut self, cell: CellIndex) -> (Board, bool) {
        if self.check_play(cell).is_err() {
            return (self.current_board(), false);
        }

        let mark = self.next_mark();
        let new_board = self.current_board().with_mark(cell, mark);

        self.history.truncate(self.current_move + 1);
        self.annotations.truncate(self.current_move);
        self.history.push(new_board);
        self.current_move = self.history.len() - 1;

        if self.options.track_annotations {
            self.annotations.push(MoveAnnotation::from_cell(cell));
        }

        log_if(self.options.is_log_enabled, || {
            format!(
                "{mark}@{cell} {} -> {}",
                MoveAnnotation::from_cell(cell),
                self.status()
            )
        });

        (new_board, true)
    }

    /// Rewinds to `move_num` and throws away everything after it.
    pub fn jump_to(&mut self, move_num: usize) -> bool {
        if move_num >= self.history.len() {
            return false;
        }

        self.current_move = move_num;
        self.history.truncate(move_num + 1);
        self.annotations.truncate(move_num);

        log_if(self.options.is_log_enabled, || {
            format!("(JUMP to move #{move_num})")
        });

        true
    }

    pub fn status(&self) -> GameStatus {
        let board = self.current_board();

        if let Some(winner) = WinnerEvaluator::evaluate(&board) {
            GameStatus::Won { winner }
        } else if board.is_full() {
            debug_assert_eq!(self.current_move, MAX_PLY);
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_mark(),
            }
        }
    }

    pub fn winning_line(&self) -> Option<[CellIndex; 3]> {
        WinnerEvaluator::winning_line(&self.current_board())
    }

    pub fn describe_move(&self, move_num: usize) -> Option<MoveDescription> {
        if move_num >= self.history.len() {
            return None;
        }

        Some(MoveDescription::new(
            move_num,
            self.annotation(move_num),
            move_num == self.current_move,
        ))
    }

    pub fn move_descriptions(&self, order: HistoryOrder) -> Vec<MoveDescription> {
        let mut descriptions = (0..self.history.len())
            .filter_map(|move_num| self.describe_move(move_num))
            .collect::<Vec<_>>();

        if order == HistoryOrder::Descending {
            descriptions.reverse();
        }

        descriptions
    }

    pub fn summary(&self, indentation_level: usize) -> String {
        let leading_text = " ".repeat(indentation_level);
        let mut sb = format!(
            "{leading_text}Move {}, {}",
            self.current_move,
            self.status()
        );

        for line in self.current_board().to_string().lines() {
            sb.push_str(&format!("\n{leading_text}  {line}"));
        }

        sb
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::at_start(GameOptions::default())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(0))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayError {
    OutOfRange { cell: CellIndex },
    Occupied { cell: CellIndex, mark: Mark },
    GameOver { status: GameStatus },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::OutOfRange { cell } => write!(f, "cell {cell} is off the board"),
            PlayError::Occupied { cell, mark } => write!(f, "cell {cell} already holds {mark}"),
            PlayError::GameOver { status } => write!(f, "game is over ({status})"),
        }
    }
}

impl std::error::Error for PlayError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mark::Cell;

    fn played(cells: &[usize]) -> GameState {
        let mut state = GameState::default();
        for &cell in cells {
            let (_, is_legal) = state.play(CellIndex(cell));
            assert!(is_legal, "play at {cell} should be legal\n{state}");
        }
        state
    }

    #[test]
    fn at_start_has_single_empty_snapshot() {
        let state = GameState::default();
        assert_eq!(state.history(), &[Board::empty()]);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::X });
        assert_eq!(state.annotation(0), None);
    }

    #[test]
    fn play_appends_snapshot_and_advances() {
        let mut state = GameState::default();
        let (board, is_legal) = state.play(CellIndex(4));

        assert!(is_legal);
        assert_eq!(board.cell(CellIndex(4)), Cell::X);
        assert_eq!(state.history_len(), 2);
        assert_eq!(state.current_move(), 1);
        assert_eq!(state.current_board(), board);
        assert_eq!(state.history()[0], Board::empty());
        assert_eq!(state.annotation(1), Some(MoveAnnotation::new(1, 1)));
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::O });
    }

    #[test]
    fn occupied_cell_is_a_no_op() {
        let mut state = played(&[0, 4]);
        let before = state.clone();

        let (board, is_legal) = state.play(CellIndex(4));

        assert!(!is_legal);
        assert_eq!(board, before.current_board());
        assert_eq!(state, before);
        assert_eq!(
            state.check_play(CellIndex(4)),
            Err(PlayError::Occupied {
                cell: CellIndex(4),
                mark: Mark::O
            })
        );
    }

    #[test]
    fn out_of_range_cell_is_a_no_op() {
        let mut state = played(&[0]);
        let before = state.clone();

        let (_, is_legal) = state.play(CellIndex(9));

        assert!(!is_legal);
        assert_eq!(state, before);
        assert_eq!(
            state.check_play(CellIndex(9)),
            Err(PlayError::OutOfRange { cell: CellIndex(9) })
        );
    }

    #[test]
    fn snapshots_differ_by_one_cell_and_alternate_marks() {
        let state = played(&[4, 0, 8, 2, 1, 7]);

        assert_eq!(state.history_len(), state.current_move() + 1);
        for (ply, pair) in state.history().windows(2).enumerate() {
            let changed = pair[1].diff(&pair[0]);
            assert_eq!(changed.len(), 1, "ply {}", ply + 1);
            assert_eq!(
                pair[1].cell(changed[0]).mark(),
                Some(rule_helper::mark_for_ply(ply + 1))
            );
        }
    }

    #[test]
    fn top_row_wins_for_x() {
        let mut state = played(&[0, 4, 1, 5]);
        assert_eq!(state.status().to_string(), "Next player: X");

        let (_, is_legal) = state.play(CellIndex(2));

        assert!(is_legal);
        assert_eq!(state.status(), GameStatus::Won { winner: Mark::X });
        assert_eq!(state.status().to_string(), "Winner: X");
        assert_eq!(
            state.winning_line(),
            Some([CellIndex(0), CellIndex(1), CellIndex(2)])
        );
    }

    #[test]
    fn won_game_refuses_further_plays() {
        let mut state = played(&[0, 4, 1, 5, 2]);
        let before = state.clone();

        let (_, is_legal) = state.play(CellIndex(8));

        assert!(!is_legal);
        assert_eq!(state, before);
        assert!(matches!(
            state.check_play(CellIndex(8)),
            Err(PlayError::GameOver { .. })
        ));
    }

    #[test]
    fn full_board_without_line_is_draw_and_terminal() {
        // X: 0, 1, 5, 6, 8; O: 2, 3, 4, 7
        let mut state = played(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.status().to_string(), "It's a draw.");
        assert_eq!(state.current_move(), MAX_PLY);

        let before = state.clone();
        for cell in CellIndex::all() {
            let (_, is_legal) = state.play(cell);
            assert!(!is_legal);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn jump_to_discards_future_and_annotations() {
        let mut state = played(&[0, 4]);
        assert!(state.jump_to(0));

        assert_eq!(state.history_len(), 1);
        assert_eq!(state.current_move(), 0);
        assert_eq!(state.annotation(1), None);

        let (_, is_legal) = state.play(CellIndex(1));

        assert!(is_legal);
        assert_eq!(state.history_len(), 2);
        assert_eq!(state.history()[1].cell(CellIndex(1)), Cell::X);
        assert_eq!(state.history()[1].cell(CellIndex(4)), Cell::Empty);
        assert_eq!(state.annotation(1), Some(MoveAnnotation::new(0, 1)));
        assert_eq!(state.annotation(2), None);
    }

    #[test]
    fn jump_to_middle_keeps_earlier_snapshots() {
        let mut state = played(&[0, 4, 8, 2]);
        let kept = state.history()[..3].to_vec();

        assert!(state.jump_to(2));

        assert_eq!(state.history(), kept.as_slice());
        assert_eq!(state.next_mark(), Mark::X);
        assert_eq!(state.annotation(2), Some(MoveAnnotation::new(1, 1)));
        assert_eq!(state.annotation(3), None);
    }

    #[test]
    fn jump_to_out_of_range_changes_nothing() {
        let mut state = played(&[0, 4]);
        let before = state.clone();

        assert!(!state.jump_to(3));
        assert_eq!(state, before);
    }

    #[test]
    fn jump_out_of_terminal_state_resumes_play() {
        let mut state = played(&[0, 4, 1, 5, 2]);
        assert!(state.status().is_over());

        assert!(state.jump_to(4));

        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::X });
        let (_, is_legal) = state.play(CellIndex(8));
        assert!(is_legal);
        assert_eq!(state.status(), GameStatus::InProgress { next: Mark::O });
    }

    #[test]
    fn untracked_annotations_stay_empty() {
        let mut state = GameState::at_start(GameOptions::new(false, false));
        state.play(CellIndex(3));
        state.play(CellIndex(5));

        assert_eq!(state.annotation(1), None);
        assert_eq!(
            state.describe_move(1).map(|d| d.to_string()),
            Some("Go to move #1".to_string())
        );
    }

    #[test]
    fn describe_move_marks_current_entry() {
        let state = played(&[0, 3, 7]);

        let texts = (0..=3)
            .filter_map(|move_num| state.describe_move(move_num))
            .map(|description| description.to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            texts,
            vec![
                "Go to game start",
                "Go to move #1 (1, 1)",
                "Go to move #2 (2, 1)",
                "You are at move #3",
            ]
        );
        assert_eq!(state.describe_move(4), None);
    }

    #[test]
    fn move_descriptions_follow_requested_order() {
        let state = played(&[0, 3]);

        let ascending = state
            .move_descriptions(HistoryOrder::Ascending)
            .iter()
            .map(|description| description.move_num)
            .collect::<Vec<_>>();
        let descending = state
            .move_descriptions(HistoryOrder::Descending)
            .iter()
            .map(|description| description.move_num)
            .collect::<Vec<_>>();

        assert_eq!(ascending, vec![0, 1, 2]);
        assert_eq!(descending, vec![2, 1, 0]);
    }

    #[test]
    fn summary_shows_status_and_board() {
        let state = played(&[4]);
        assert_eq!(
            state.summary(1),
            " Move 1, Next player: O\n   .|.|.\n   .|X|.\n   .|.|."
        );
    }

    #[test]
    fn play_error_messages() {
        assert_eq!(
            PlayError::Occupied {
                cell: CellIndex(2),
                mark: Mark::X
            }
            .to_string(),
            "cell 2 already holds X"
        );
        assert_eq!(
            PlayError::GameOver {
                status: GameStatus::Draw
            }
            .to_string(),
            "game is over (It's a draw.)"
        );
    }
}
