use serde::Serialize;
use tsify::Tsify;
use wasm_bindgen::prelude::*;

pub mod core;
pub mod util;

use crate::core::{
    cell_index::CellIndex,
    game_options::GameOptions,
    game_state::GameState,
    game_status::GameStatus,
    move_description::{HistoryOrder, MoveDescription},
};

#[derive(Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    kind: String,
    mark: Option<String>,
    text: String,
}

impl From<GameStatus> for StatusView {
    fn from(status: GameStatus) -> Self {
        let (kind, mark) = match status {
            GameStatus::InProgress { next } => ("inProgress", Some(next)),
            GameStatus::Won { winner } => ("won", Some(winner)),
            GameStatus::Draw => ("draw", None),
        };

        Self {
            kind: kind.to_string(),
            mark: mark.map(|mark| mark.to_string()),
            text: status.to_string(),
        }
    }
}

#[derive(Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryView {
    #[serde(rename = "move")]
    move_num: usize,
    description: String,
    is_current: bool,
    row: Option<usize>,
    column: Option<usize>,
}

impl From<MoveDescription> for HistoryEntryView {
    fn from(description: MoveDescription) -> Self {
        Self {
            move_num: description.move_num,
            description: description.to_string(),
            is_current: description.is_current,
            row: description.annotation.map(|annotation| annotation.display_row()),
            column: description
                .annotation
                .map(|annotation| annotation.display_column()),
        }
    }
}

fn to_history_json(entries: &[HistoryEntryView]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
}

/// One independent game for the page to drive. The list order is display
/// state only and never touches the game itself.
#[wasm_bindgen]
pub struct GameHandle {
    state: GameState,
    history_order: HistoryOrder,
}

#[wasm_bindgen]
impl GameHandle {
    pub fn summary(&self, indentation_level: usize) -> String {
        self.state.summary(indentation_level)
    }

    pub fn play(&mut self, cell: u32) -> bool {
        let (_, is_legal) = self.state.play(CellIndex(cell as usize));
        is_legal
    }

    /// Empty when the play would be accepted.
    #[wasm_bindgen(js_name = "checkPlay")]
    pub fn check_play(&self, cell: u32) -> String {
        match self.state.check_play(CellIndex(cell as usize)) {
            Ok(()) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[wasm_bindgen(js_name = "jumpTo")]
    pub fn jump_to(&mut self, move_num: u32) -> bool {
        self.state.jump_to(move_num as usize)
    }

    pub fn squares(&self) -> Vec<String> {
        self.state.current_board().labels()
    }

    #[wasm_bindgen(js_name = "winningLine")]
    pub fn winning_line(&self) -> Vec<u32> {
        self.state
            .winning_line()
            .map(|line| line.iter().map(|cell| cell.0 as u32).collect())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = "statusText")]
    pub fn status_text(&self) -> String {
        self.state.status().to_string()
    }

    pub fn status(&self) -> Result<JsValue, JsValue> {
        let view = StatusView::from(self.state.status());
        serde_wasm_bindgen::to_value(&view).map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = "isGameOver")]
    pub fn is_game_over(&self) -> bool {
        self.state.status().is_over()
    }

    #[wasm_bindgen(js_name = "currentMove")]
    pub fn current_move(&self) -> u32 {
        self.state.current_move() as u32
    }

    #[wasm_bindgen(js_name = "historyLength")]
    pub fn history_length(&self) -> u32 {
        self.state.history_len() as u32
    }

    #[wasm_bindgen(js_name = "describeMove")]
    pub fn describe_move(&self, move_num: u32) -> String {
        self.state
            .describe_move(move_num as usize)
            .map(|description| description.to_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = "historyJson")]
    pub fn history_json(&self) -> String {
        let entries = self
            .state
            .move_descriptions(self.history_order)
            .into_iter()
            .map(HistoryEntryView::from)
            .collect::<Vec<_>>();
        to_history_json(&entries)
    }

    /// Returns whether the list now reads newest first.
    #[wasm_bindgen(js_name = "toggleHistoryOrder")]
    pub fn toggle_history_order(&mut self) -> bool {
        self.history_order = self.history_order.toggled();
        self.is_history_descending()
    }

    #[wasm_bindgen(js_name = "isHistoryDescending")]
    pub fn is_history_descending(&self) -> bool {
        self.history_order == HistoryOrder::Descending
    }

    #[wasm_bindgen(js_name = "resetGame")]
    pub fn reset_game(&mut self) {
        self.state = GameState::at_start(self.state.options());
    }
}

impl GameHandle {
    pub fn with_options(options: GameOptions) -> Self {
        Self {
            state: GameState::at_start(options),
            history_order: HistoryOrder::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[wasm_bindgen(js_name = "newGame")]
pub fn new_game() -> GameHandle {
    GameHandle::with_options(GameOptions::default())
}

#[wasm_bindgen(js_name = "newGameWithOptions")]
pub fn new_game_with_options(options_json: &str) -> Result<GameHandle, JsValue> {
    let options = GameOptions::from_json_str(options_json)
        .map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))?;
    Ok(GameHandle::with_options(options))
}
