//! Geometric move rules.

use super::RuleSet;
use chess_core::{Board, Color, Piece, PieceKind, Square};

/// Per-kind legality predicate: `(color, from, to, board) -> legal`.
pub type StepRule = fn(Color, Square, Square, &Board) -> bool;

/// Geometric move rules for the six standard piece kinds.
///
/// - Pawns advance one square onto an empty square, two from their start row,
///   and capture one square diagonally forward
/// - Bishops, rooks and queens slide along clear lines
/// - Knights jump; kings step one square
///
/// The pawn double step checks only that the destination is empty; the
/// square passed over is not inspected. King safety is never considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricRules;

impl GeometricRules {
    /// Returns the legality predicate for a piece kind.
    pub fn step_rule(kind: PieceKind) -> StepRule {
        match kind {
            PieceKind::Pawn => pawn_step,
            PieceKind::Knight => knight_step,
            PieceKind::Bishop => bishop_step,
            PieceKind::Rook => rook_step,
            PieceKind::Queen => queen_step,
            PieceKind::King => king_step,
        }
    }
}

impl RuleSet for GeometricRules {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn is_legal_move(&self, piece: Piece, from: Square, to: Square, board: &Board) -> bool {
        if from == to {
            return false;
        }
        if board.get(to).is_some_and(|target| target.color == piece.color) {
            return false;
        }
        Self::step_rule(piece.kind)(piece.color, from, to, board)
    }
}

/// Signed (row, col) delta from `from` to `to`.
#[inline]
fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, column or diagonal.
fn path_clear(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = delta(from, to);
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut current = from.offset(step_r, step_c);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        current = sq.offset(step_r, step_c);
    }
    true
}

fn pawn_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = delta(from, to);
    let forward = color.pawn_direction();

    if from.row() == color.pawn_start_row() && dr == 2 * forward && dc == 0 {
        return !board.is_occupied(to);
    }

    if dr != forward || dc.abs() > 1 {
        return false;
    }
    if dc == 0 {
        !board.is_occupied(to)
    } else {
        board.is_occupied(to)
    }
}

fn knight_step(_: Color, from: Square, to: Square, _: &Board) -> bool {
    let (dr, dc) = delta(from, to);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

fn bishop_step(_: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = delta(from, to);
    dr != 0 && dr.abs() == dc.abs() && path_clear(from, to, board)
}

fn rook_step(_: Color, from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = delta(from, to);
    (dr == 0) != (dc == 0) && path_clear(from, to, board)
}

fn queen_step(color: Color, from: Square, to: Square, board: &Board) -> bool {
    rook_step(color, from, to, board) || bishop_step(color, from, to, board)
}

fn king_step(_: Color, from: Square, to: Square, _: &Board) -> bool {
    let (dr, dc) = delta(from, to);
    dr.abs() <= 1 && dc.abs() <= 1
}
