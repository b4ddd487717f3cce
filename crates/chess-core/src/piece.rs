//! Chess piece representation.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the letter used in move notation (empty for pawns).
    pub const fn notation_letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece of a given kind and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the placement character (uppercase White, lowercase Black).
    pub const fn to_placement_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a placement character into a piece.
    pub const fn from_placement_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { kind, color })
    }

    /// Returns the Unicode glyph shown for this piece.
    pub const fn symbol(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }

    /// Returns this piece with its kind replaced.
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Self {
        Piece {
            kind,
            color: self.color,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_placement_char() {
        assert_eq!(Piece::new(PieceKind::Pawn, Color::White).to_placement_char(), 'P');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).to_placement_char(), 'p');
        assert_eq!(Piece::new(PieceKind::King, Color::White).to_placement_char(), 'K');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black).to_placement_char(), 'n');
    }

    #[test]
    fn piece_from_placement_char() {
        assert_eq!(
            Piece::from_placement_char('P'),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            Piece::from_placement_char('q'),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(Piece::from_placement_char('x'), None);
        assert_eq!(Piece::from_placement_char('8'), None);
    }

    #[test]
    fn notation_letters() {
        assert_eq!(PieceKind::Pawn.notation_letter(), "");
        assert_eq!(PieceKind::Knight.notation_letter(), "N");
        assert_eq!(PieceKind::Queen.notation_letter(), "Q");
        assert_eq!(PieceKind::King.notation_letter(), "K");
    }

    #[test]
    fn symbol_follows_kind() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(pawn.symbol(), '♙');
        assert_eq!(pawn.with_kind(PieceKind::Queen).symbol(), '♕');
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).symbol(), '♟');
    }
}
