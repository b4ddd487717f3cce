//! Render interface.
//!
//! A [`Session`](crate::Session) never draws itself. It hands a borrowed
//! [`Frame`] to any [`Render`] implementation, which projects it however it
//! likes (terminal grid, GUI, test recorder).

use chess_core::{Board, Color, MoveRecord, Square};

/// Everything a front end needs to draw one state of a session.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub board: &'a Board,
    pub turn: Color,
    /// Origin of the current selection, if a piece is selected.
    pub selected: Option<Square>,
    /// Legal destinations of the selected piece.
    pub highlights: &'a [Square],
    /// Applied moves, oldest first.
    pub history: &'a [MoveRecord],
}

impl Frame<'_> {
    /// Returns "White to move" or "Black to move".
    pub fn turn_indicator(&self) -> &'static str {
        self.turn.to_move_label()
    }

    /// Returns the numbered move list, newest first.
    pub fn move_list(&self) -> Vec<String> {
        move_list(self.history)
    }

    /// Returns true if `square` is a highlighted destination.
    pub fn is_highlighted(&self, square: Square) -> bool {
        self.highlights.contains(&square)
    }
}

/// Consumer of session frames.
pub trait Render {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Formats a history as `"{ply}. {notation}"` entries, newest first.
pub fn move_list(history: &[MoveRecord]) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, record)| format!("{}. {}", i + 1, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind};

    fn pawn_push(from: &str, to: &str, color: Color) -> MoveRecord {
        MoveRecord {
            from: Square::from_algebraic(from).unwrap(),
            to: Square::from_algebraic(to).unwrap(),
            moved: Piece::new(PieceKind::Pawn, color),
            captured: None,
            promoted: false,
        }
    }

    #[test]
    fn move_list_is_newest_first() {
        let history = [
            pawn_push("a2", "a4", Color::White),
            pawn_push("b7", "b5", Color::Black),
        ];
        assert_eq!(move_list(&history), vec!["2. b7b5", "1. a2a4"]);
        assert!(move_list(&[]).is_empty());
    }

    #[test]
    fn frame_queries() {
        let board = Board::initial();
        let e3 = Square::from_algebraic("e3").unwrap();
        let highlights = [e3];
        let frame = Frame {
            board: &board,
            turn: Color::Black,
            selected: Square::from_algebraic("e2"),
            highlights: &highlights,
            history: &[],
        };
        assert_eq!(frame.turn_indicator(), "Black to move");
        assert!(frame.is_highlighted(e3));
        assert!(!frame.is_highlighted(Square::from_algebraic("e4").unwrap()));
    }
}
