use crate::core::mark::Mark;
use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GameStatus {
    InProgress { next: Mark },
    Won { winner: Mark },
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn next_mark(self) -> Option<Mark> {
        match self {
            GameStatus::InProgress { next } => Some(next),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {next}"),
            GameStatus::Won { winner } => write!(f, "Winner: {winner}"),
            GameStatus::Draw => f.write_str("It's a draw."),
        }
    }
}
