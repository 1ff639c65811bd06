pub mod board;
pub mod cell_index;
pub mod game_options;
pub mod game_state;
pub mod game_status;
pub mod mark;
pub mod move_description;
pub mod rule_helper;
pub mod winner_evaluator;
