use crate::core::cell_index::MoveAnnotation;
use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryOrder {
    #[default]
    Ascending,
    Descending,
}

impl HistoryOrder {
    pub fn toggled(self) -> Self {
        match self {
            HistoryOrder::Ascending => HistoryOrder::Descending,
            HistoryOrder::Descending => HistoryOrder::Ascending,
        }
    }
}

/// One line of the move list: either a jump target or the "you are here" marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[readonly::make]
pub struct MoveDescription {
    pub move_num: usize,
    pub annotation: Option<MoveAnnotation>,
    pub is_current: bool,
}

impl MoveDescription {
    pub fn new(move_num: usize, annotation: Option<MoveAnnotation>, is_current: bool) -> Self {
        Self {
            move_num,
            annotation,
            is_current,
        }
    }

    pub fn is_game_start(&self) -> bool {
        self.move_num == 0
    }

    pub fn is_jump_target(&self) -> bool {
        !self.is_current
    }
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_current {
            return write!(f, "You are at move #{}", self.move_num);
        }

        if self.is_game_start() {
            return f.write_str("Go to game start");
        }

        write!(f, "Go to move #{}", self.move_num)?;
        if let Some(annotation) = self.annotation {
            write!(f, " {annotation}")?;
        }
        Ok(())
    }
}
