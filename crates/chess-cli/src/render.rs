//! Text renderer for terminal output.

use crate::config::DisplayConfig;
use chess_core::Square;
use chess_engine::{Frame, Render};
use std::fmt::Write;

/// Renders frames as a text grid into an internal buffer.
///
/// Each cell is three characters wide: the selected piece is drawn as
/// `(x)`, highlighted destinations as `[x]`, other squares as ` x `.
#[derive(Debug, Default)]
pub struct TextRenderer {
    display: DisplayConfig,
    buffer: String,
}

impl TextRenderer {
    pub fn new(display: DisplayConfig) -> Self {
        TextRenderer {
            display,
            buffer: String::new(),
        }
    }

    /// Returns and clears everything rendered so far.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn file_header(&self) -> String {
        let mut line = String::from("  ");
        for file in 'a'..='h' {
            let _ = write!(line, " {} ", file);
        }
        line.trim_end().to_string()
    }

    fn cell(&self, frame: &Frame<'_>, square: Square) -> String {
        let glyph = match frame.board.get(square) {
            Some(piece) if self.display.unicode => piece.symbol(),
            Some(piece) => piece.to_placement_char(),
            None => '.',
        };
        if frame.selected == Some(square) {
            format!("({})", glyph)
        } else if frame.is_highlighted(square) {
            format!("[{}]", glyph)
        } else {
            format!(" {} ", glyph)
        }
    }
}

impl Render for TextRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        let mut out = String::new();
        let coordinates = self.display.coordinates;

        if coordinates {
            let _ = writeln!(out, "{}", self.file_header());
        }
        for row in 0..8u8 {
            let mut line = String::new();
            for col in 0..8u8 {
                if let Some(square) = Square::new(row, col) {
                    if coordinates && col == 0 {
                        let _ = write!(line, "{} ", square.rank_char());
                    }
                    line.push_str(&self.cell(frame, square));
                    if coordinates && col == 7 {
                        let _ = write!(line, " {}", square.rank_char());
                    }
                }
            }
            let _ = writeln!(out, "{}", line);
        }
        if coordinates {
            let _ = writeln!(out, "{}", self.file_header());
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", frame.turn_indicator());
        for entry in frame.move_list() {
            let _ = writeln!(out, "{}", entry);
        }

        self.buffer.push_str(&out);
    }
}
