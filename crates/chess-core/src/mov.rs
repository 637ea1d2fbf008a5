//! Move representation.

use crate::{PieceKind, Square, SquareError};
use std::fmt;
use thiserror::Error;

/// Extra board change a special move performs after the mover lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideEffect {
    /// Castling: the rook jumps from its home square next to the king.
    RelocateRook { from: Square, to: Square },
    /// En passant: the captured pawn stands behind the destination square.
    RemovePawn(Square),
    /// The pawn on the destination becomes this kind.
    Promote(PieceKind),
}

/// A chess move: the moving kind, its squares and an optional side effect.
///
/// A move is plain data. Once generated against a position it can be
/// compared, hashed, and applied to that position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: PieceKind,
    from: Square,
    to: Square,
    effect: Option<SideEffect>,
}

impl Move {
    /// Creates a plain move with no side effect.
    #[inline]
    pub const fn new(piece: PieceKind, from: Square, to: Square) -> Self {
        Move {
            piece,
            from,
            to,
            effect: None,
        }
    }

    /// Creates a move carrying a side effect.
    #[inline]
    pub const fn with_effect(piece: PieceKind, from: Square, to: Square, effect: SideEffect) -> Self {
        Move {
            piece,
            from,
            to,
            effect: Some(effect),
        }
    }

    /// Returns the kind of the moving piece.
    #[inline]
    pub const fn piece(self) -> PieceKind {
        self.piece
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the side effect, if this is a special move.
    #[inline]
    pub const fn effect(self) -> Option<SideEffect> {
        self.effect
    }

    /// Returns the promotion kind if this move promotes.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.effect {
            Some(SideEffect::Promote(kind)) => Some(kind),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self.effect, Some(SideEffect::RelocateRook { .. }))
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.effect, Some(SideEffect::RemovePawn(_)))
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion() {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses UCI text into its squares and optional promotion kind.
    ///
    /// The result still has to be matched against a position's legal moves
    /// to recover the moving kind and side effect.
    pub fn parse_uci(s: &str) -> Result<(Square, Square, Option<PieceKind>), MoveTextError> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveTextError::InvalidLength(s.to_string()));
        }
        let from = Square::from_name(&s[0..2])?;
        let to = Square::from_name(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveTextError::InvalidPromotion(c)),
            },
        };
        Ok((from, to, promotion))
    }
}

/// Errors from parsing move text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveTextError {
    #[error("invalid move text '{0}': expected 4 or 5 characters")]
    InvalidLength(String),

    #[error(transparent)]
    Square(#[from] SquareError),

    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(char),
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece.to_char(), self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
