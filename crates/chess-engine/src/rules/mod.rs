//! Move legality rules.
//!
//! This module provides the [`RuleSet`] trait and the [`GeometricRules`]
//! implementation used by [`Session`](crate::Session). Legality here is purely
//! geometric: a move is legal if the piece kind can travel that way and its
//! path is clear. Check, castling and en passant are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_core::{Board, Square};
//! use chess_engine::rules::{is_legal_move, legal_destinations};
//!
//! let board = Board::initial();
//! let b1 = Square::from_algebraic("b1").unwrap();
//! let knight = board.get(b1).unwrap();
//!
//! assert!(is_legal_move(knight, b1, Square::from_algebraic("c3").unwrap(), &board));
//! assert_eq!(legal_destinations(knight, b1, &board).len(), 2);
//! ```

mod standard;

pub use standard::{GeometricRules, StepRule};

use chess_core::{Board, Piece, Square};

/// Trait for a set of move rules.
///
/// Implementations must be pure: the answer depends only on the arguments.
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns true if `piece` may move from `from` to `to` on `board`.
    fn is_legal_move(&self, piece: Piece, from: Square, to: Square, board: &Board) -> bool;

    /// Returns every square `piece` standing on `from` may move to.
    fn legal_destinations(&self, piece: Piece, from: Square, board: &Board) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_legal_move(piece, from, to, board))
            .collect()
    }
}

/// Returns true if `piece` may move from `from` to `to` under [`GeometricRules`].
#[inline]
pub fn is_legal_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    GeometricRules.is_legal_move(piece, from, to, board)
}

/// Returns the legal destinations of `piece` on `from` under [`GeometricRules`].
pub fn legal_destinations(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    GeometricRules.legal_destinations(piece, from, board)
}
