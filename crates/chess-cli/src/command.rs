//! Parsing of lines typed at the prompt.

use chess_core::Square;

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click on a square (`e2`).
    Click(Square),
    /// Two clicks in one line (`e2e4`).
    Move(Square, Square),
    /// Take back the last move.
    Undo,
    /// Print the move list.
    Moves,
    /// Redraw the board.
    Board,
    /// Start a new game.
    Reset,
    /// Print the command summary.
    Help,
    /// Leave the program.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses one input line. Never fails; unrecognised input is [`Command::Unknown`].
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "undo" | "u" => Command::Undo,
            "moves" | "history" => Command::Moves,
            "board" | "b" => Command::Board,
            "reset" | "new" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Self::parse_squares(input).unwrap_or_else(|| Command::Unknown(input.to_string())),
        }
    }

    fn parse_squares(input: &str) -> Option<Self> {
        match input.len() {
            2 => Square::from_algebraic(input).map(Command::Click),
            4 => {
                let from = Square::from_algebraic(input.get(0..2)?)?;
                let to = Square::from_algebraic(input.get(2..4)?)?;
                Some(Command::Move(from, to))
            }
            _ => None,
        }
    }
}

/// Text printed for [`Command::Help`].
pub const HELP: &str = "\
Commands:
  <square>      click a square, e.g. e2 (select, then click a destination)
  <from><to>    both clicks at once, e.g. e2e4
  undo, u       take back the last move
  moves         show the move list
  board, b      redraw the board
  reset, new    start a new game
  help, ?       show this help
  quit, q       exit";
