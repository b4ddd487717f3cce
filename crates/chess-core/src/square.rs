//! Board square representation.

use std::fmt;

/// A square on the chess board, indexed 0-63.
///
/// Squares are laid out row-major from Black's back rank:
/// - a8 = 0 (row 0, col 0), b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
///
/// The file letter is the column (`a` = col 0) and the rank number is
/// `8 - row`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column (each 0-7).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Square::new(b'8' - rank, file - b'a')
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square `dr` rows and `dc` columns away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(e4.index(), 36);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("a1"), Square::new(7, 0));
        assert_eq!(Square::from_algebraic("h1"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("E2"), Square::new(6, 4));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
        assert_eq!(Square::from_algebraic("e22"), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h1");
        assert_eq!(Square::new(6, 0).unwrap().to_algebraic(), "a2");
    }

    #[test]
    fn square_offset() {
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!(e2.offset(-2, 0), Square::from_algebraic("e4"));
        assert_eq!(e2.offset(2, 0), None);
        assert_eq!(e2.offset(0, -5), None);
    }

    #[test]
    fn all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_algebraic(), "a8");
        assert_eq!(squares[63].to_algebraic(), "h1");
    }
}
