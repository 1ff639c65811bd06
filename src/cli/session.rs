use crossterm::style::{StyledContent, Stylize};
use itertools::Itertools;
use std::io::{self, Write};
use tic_tac_toe_rust::core::{
    board::Board,
    cell_index::CellIndex,
    game_options::GameOptions,
    game_state::GameState,
    mark::{Cell, Mark},
    move_description::HistoryOrder,
};

pub struct Session {
    options: GameOptions,
    game: GameState,
    history_order: HistoryOrder,
    should_quit: bool,
}

impl Session {
    pub fn new(cli_args: impl IntoIterator<Item = String>) -> Self {
        let is_quiet = cli_args
            .into_iter()
            .any(|arg| arg == "-q" || arg == "--quiet");
        let options = GameOptions::with_log(!is_quiet);

        Self {
            options,
            game: GameState::at_start(options),
            history_order: HistoryOrder::default(),
            should_quit: false,
        }
    }

    pub fn start(&mut self) {
        self.print_game();
        self.interpretation_loop();
    }

    fn interpretation_loop(&mut self) {
        let stdin = io::stdin();

        loop {
            let prompt = self.user_prompt_text();
            print!("{prompt}");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => return,
                Ok(_) => {
                    let line = line.trim_end_matches(['\r', '\n']).to_string();
                    for subline in line.split(';') {
                        self.interpret_directive(subline);
                        if self.should_quit {
                            return;
                        }
                    }
                }
                Err(_) => return,
            }
        }
    }

    fn without_comments(&self, directive: &str) -> String {
        let mut working = directive.to_string();
        while let Some(start_idx) = working.find('(') {
            if let Some(end_rel) = working[start_idx..].find(')') {
                let end_idx = start_idx + end_rel;
                working.replace_range(start_idx..=end_idx, "");
            } else {
                working.truncate(start_idx);
                break;
            }
        }
        working
    }

    fn interpret_directive(&mut self, directive: &str) {
        const TAG_QUIT: &str = "q";
        const TAG_DISPLAY: &str = "d";
        const TAG_RESET: &str = "r";
        const TAG_REPEAT: &str = "x";
        const TAG_HISTORY: &str = "h";
        const TAG_ORDER: &str = "o";
        const TAG_JUMP: &str = "j";
        const TAG_JUMP_LONG: &str = "jump";

        let directive = self.without_comments(directive);
        let tokens = directive
            .split_whitespace()
            .map(|token| token.to_string())
            .collect::<Vec<_>>();
        let directive_tag = tokens
            .first()
            .map(|token| token.to_lowercase())
            .unwrap_or_default();

        if directive.trim().is_empty() {
            return;
        }

        if directive_tag == TAG_QUIT {
            self.should_quit = true;
        } else if directive_tag == TAG_DISPLAY {
            self.print_game();
        } else if directive_tag == TAG_RESET {
            println!("(RESET)");
            self.game = GameState::at_start(self.options);
            self.print_game();
        } else if directive_tag == TAG_REPEAT {
            match tokens.get(1).map(|token| token.parse::<usize>()) {
                Some(Ok(num_repeats)) => {
                    let directive_text = tokens.iter().skip(2).join(" ");
                    println!("(REPEAT {num_repeats}: {directive_text})");
                    for _ in 0..num_repeats {
                        self.interpret_directive(&directive_text);
                    }
                }
                _ => println!(
                    "directive {directive_tag} needs repetition count and directive to repeat"
                ),
            }
        } else if directive_tag == TAG_HISTORY {
            self.print_history();
        } else if directive_tag == TAG_ORDER {
            self.history_order = self.history_order.toggled();
            self.print_history();
        } else if directive_tag == TAG_JUMP || directive_tag == TAG_JUMP_LONG {
            match tokens.get(1).map(|token| token.parse::<usize>()) {
                Some(Ok(move_num)) => {
                    if self.game.jump_to(move_num) {
                        self.print_game();
                    } else {
                        println!(
                            "  no move #{move_num}; history ends at move #{}",
                            self.game.history_len() - 1
                        );
                    }
                }
                _ => println!("  {TAG_JUMP_LONG} directive needs one integer token"),
            }
        } else if directive_tag
            .chars()
            .next()
            .map(|ch| ch.is_ascii_digit())
            .unwrap_or(false)
        {
            self.do_play_tokens(&tokens);
        } else {
            let mut explanations = vec![
                "d       | display board and status",
                "h       | display move history",
                "j/jump [int] | go back to move [int], discarding later moves",
                "o       | toggle history order",
                "q       | quit",
                "r       | reset game",
                "x [n] [cmd] | repeat [cmd] n times",
                "[cellIdx] or [row,col] | play cell 0-8, or 1-indexed row,col",
            ];
            explanations.sort();
            println!("  unrecognized directive '{directive}'");
            for explanation in explanations {
                println!("  {explanation}");
            }
        }
    }

    fn do_play_tokens(&mut self, tokens: &[String]) {
        let mut cells = Vec::new();

        for token in tokens {
            match parse_cell_token(token) {
                Some(cell) => cells.push(cell),
                None => {
                    println!("  failed parse for cell from '{token}'");
                    return;
                }
            }
        }

        for cell in cells {
            if let Err(err) = self.game.check_play(cell) {
                println!("  invalid play: {err}");
                break;
            }
            self.game.play(cell);
        }

        self.print_game();
    }

    fn print_game(&self) {
        println!("  Move {}, {}", self.game.current_move(), self.game.status());
        for line in render_board(&self.game.current_board()) {
            println!("    {line}");
        }
    }

    fn print_history(&self) {
        for description in self.game.move_descriptions(self.history_order) {
            println!("  {description}");
        }
    }

    fn user_prompt_text(&self) -> String {
        let status = self.game.status();
        match status.next_mark() {
            Some(mark) => format!("{}> ", styled_mark(mark)),
            None => format!("{}> ", status.to_string().to_uppercase()),
        }
    }
}

/// Accepts a bare cell index or a 1-indexed `row,col` pair.
fn parse_cell_token(token: &str) -> Option<CellIndex> {
    let subtokens = token.split([',', '@']).collect::<Vec<_>>();
    match subtokens.as_slice() {
        [idx] => idx.parse::<usize>().ok().and_then(CellIndex::new),
        [row, col] => {
            let row = row.parse::<usize>().ok()?.checked_sub(1)?;
            let col = col.parse::<usize>().ok()?.checked_sub(1)?;
            CellIndex::from_row_column(row, col)
        }
        _ => None,
    }
}

fn styled_mark(mark: Mark) -> StyledContent<&'static str> {
    match mark {
        Mark::X => mark.as_str().red().bold(),
        Mark::O => mark.as_str().blue().bold(),
    }
}

fn render_board(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".dark_grey().to_string(),
                    Cell::X => styled_mark(Mark::X).to_string(),
                    Cell::O => styled_mark(Mark::O).to_string(),
                })
                .join("|")
        })
        .collect()
}
