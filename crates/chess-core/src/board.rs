//! Square-occupancy board and piece-placement parsing.

use crate::{Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a piece-placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {squares} squares, expected 8")]
    InvalidRowWidth { row: usize, squares: u32 },
}

/// An 8x8 board mapping each square to at most one piece.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Piece placement of the standard starting position, row 0 first.
    pub const INITIAL_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting position.
    pub fn initial() -> Self {
        Self::from_placement(Self::INITIAL_PLACEMENT).expect("INITIAL_PLACEMENT is valid")
    }

    /// Parses the piece-placement field of a FEN string.
    ///
    /// The first `/`-separated segment is row 0 (rank 8). Uppercase letters
    /// are White, lowercase Black, digits count empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::InvalidRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0u32;
            for ch in row_str.chars() {
                if let Some(run) = ch.to_digit(10) {
                    col += run;
                } else if let Some(piece) = Piece::from_placement_char(ch) {
                    if col < 8 {
                        board.squares[row * 8 + col as usize] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { ch, row });
                }
            }
            if col != 8 {
                return Err(PlacementError::InvalidRowWidth { row, squares: col });
            }
        }

        Ok(board)
    }

    /// Serializes the board as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(71);
        for row in 0..8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for col in 0..8 {
                match self.squares[row * 8 + col] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_placement_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Returns true if `square` holds a piece.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Places `piece` on `square` (or clears it with `None`), returning the
    /// previous occupant.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.index() as usize], piece)
    }

    /// Removes and returns the piece on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Iterates over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            for col in 0..8u8 {
                let ch = Square::new(row, col)
                    .and_then(|sq| self.get(sq))
                    .map_or('.', Piece::to_placement_char);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn initial_layout() {
        let board = Board::initial();
        assert_eq!(
            board.get(sq("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.get(sq("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.get(sq("a2")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(!board.is_occupied(sq("e4")));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn white_pawns_on_row_six() {
        let board = Board::initial();
        for col in 0..8 {
            let piece = board.get(Square::new(6, col).unwrap()).unwrap();
            assert_eq!(piece, Piece::new(PieceKind::Pawn, Color::White));
        }
    }

    #[test]
    fn placement_roundtrip() {
        let placement = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.to_placement(), placement);
        assert_eq!(Board::initial().to_placement(), Board::INITIAL_PLACEMENT);
    }

    #[test]
    fn invalid_row_count() {
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRowCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidCharacter { ch: 'X', row: 6 })
        );
    }

    #[test]
    fn invalid_row_width() {
        assert_eq!(
            Board::from_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::InvalidRowWidth { row: 0, squares: 9 })
        );
        assert_eq!(
            Board::from_placement("7/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRowWidth { row: 0, squares: 7 })
        );
    }

    #[test]
    fn set_and_take() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(board.set(sq("c6"), Some(knight)), None);
        assert_eq!(board.get(sq("c6")), Some(knight));
        assert_eq!(board.take(sq("c6")), Some(knight));
        assert!(!board.is_occupied(sq("c6")));
    }

    #[test]
    fn display_grid() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }

    #[test]
    fn placement_error_display() {
        let err = PlacementError::InvalidRowCount(3);
        assert!(format!("{}", err).contains("3"));

        let err = PlacementError::InvalidCharacter { ch: 'x', row: 2 };
        assert!(format!("{}", err).contains("'x'"));
    }
}
