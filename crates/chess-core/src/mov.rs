//! Applied-move records.

use crate::{Piece, PieceKind, Square};
use std::fmt;

/// A move that has been applied to a board.
///
/// `moved` is the piece as it stood on `from` before the move, so a
/// promoting pawn is recorded as a pawn. Records are never mutated after
/// they are appended to a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl MoveRecord {
    /// Returns true if the move removed an opposing piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns the piece that stands on `to` after the move.
    pub const fn placed(&self) -> Piece {
        if self.promoted {
            self.moved.with_kind(PieceKind::Queen)
        } else {
            self.moved
        }
    }

    /// Returns the move in long algebraic form, e.g. `a2a4`, `Nb1c3`,
    /// `e4xd5`, `b7xa8=Q`.
    pub fn to_notation(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.moved.kind.notation_letter(),
            self.from,
            if self.is_capture() { "x" } else { "" },
            self.to,
            if self.promoted { "=Q" } else { "" },
        )
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn record(
        kind: PieceKind,
        from: &str,
        to: &str,
        captured: Option<Piece>,
        promoted: bool,
    ) -> MoveRecord {
        MoveRecord {
            from: Square::from_algebraic(from).unwrap(),
            to: Square::from_algebraic(to).unwrap(),
            moved: Piece::new(kind, Color::White),
            captured,
            promoted,
        }
    }

    #[test]
    fn pawn_move_has_no_letter() {
        let m = record(PieceKind::Pawn, "a2", "a4", None, false);
        assert_eq!(m.to_notation(), "a2a4");
    }

    #[test]
    fn piece_letter_prefix() {
        let m = record(PieceKind::Knight, "b1", "c3", None, false);
        assert_eq!(m.to_notation(), "Nb1c3");
        let m = record(PieceKind::King, "e1", "e2", None, false);
        assert_eq!(format!("{}", m), "Ke1e2");
    }

    #[test]
    fn capture_marker() {
        let victim = Some(Piece::new(PieceKind::Pawn, Color::Black));
        let m = record(PieceKind::Pawn, "e4", "d5", victim, false);
        assert!(m.is_capture());
        assert_eq!(m.to_notation(), "e4xd5");
    }

    #[test]
    fn promotion_suffix() {
        let victim = Some(Piece::new(PieceKind::Rook, Color::Black));
        let m = record(PieceKind::Pawn, "b7", "a8", victim, true);
        assert_eq!(m.to_notation(), "b7xa8=Q");
        assert_eq!(m.placed().kind, PieceKind::Queen);
        assert_eq!(m.moved.kind, PieceKind::Pawn);
    }
}
