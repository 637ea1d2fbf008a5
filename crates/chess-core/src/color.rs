//! Side representation.

use crate::Square;

/// The two sides in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both sides, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Index delta of a single pawn step (+8 for White, -8 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }

    /// Rank (0-7) this side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank (0-7) this side's pawns promote on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Home square of this side's king.
    #[inline]
    pub const fn king_home(self) -> Square {
        match self {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Starting square of the rook on the king's side.
    #[inline]
    pub const fn kingside_rook_home(self) -> Square {
        match self {
            Color::White => Square::H1,
            Color::Black => Square::H8,
        }
    }

    /// Starting square of the rook on the queen's side.
    #[inline]
    pub const fn queenside_rook_home(self) -> Square {
        match self {
            Color::White => Square::A1,
            Color::Black => Square::A8,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
    }

    #[test]
    fn forward_step() {
        assert_eq!(Color::White.forward(), 8);
        assert_eq!(Color::Black.forward(), -8);
    }

    #[test]
    fn home_squares() {
        assert_eq!(Color::White.king_home().name(), "e1");
        assert_eq!(Color::Black.king_home().name(), "e8");
        assert_eq!(Color::White.kingside_rook_home().name(), "h1");
        assert_eq!(Color::Black.queenside_rook_home().name(), "a8");
    }

    #[test]
    fn pawn_ranks() {
        assert_eq!(Color::White.pawn_rank(), 1);
        assert_eq!(Color::Black.pawn_rank(), 6);
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
