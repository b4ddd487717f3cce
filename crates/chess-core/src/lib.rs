//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rule engine and
//! the front end:
//! - [`PieceKind`], [`Piece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates (row 0 is Black's back rank)
//! - [`Board`] for square occupancy, with piece-placement parsing
//! - [`MoveRecord`] for applied moves and their notation

mod board;
mod color;
mod mov;
mod piece;
mod square;

pub use board::{Board, PlacementError};
pub use color::Color;
pub use mov::MoveRecord;
pub use piece::{Piece, PieceKind};
pub use square::Square;
