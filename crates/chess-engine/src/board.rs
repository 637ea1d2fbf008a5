//! Piece placement.
//!
//! A [`Board`] is a fixed 64-slot array of optional pieces indexed by square.
//! It is `Copy`, so a successor position simply copies the array and edits
//! its own copy.

use chess_core::{Color, Piece, PieceKind, Square};
use std::fmt;

/// Piece placement: zero or one piece per square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// A board with no pieces.
    pub const EMPTY: Board = Board {
        squares: [None; 64],
    };

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if nothing stands on `sq`.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Places `piece` on its own square, replacing whatever stood there.
    #[inline]
    pub fn put(&mut self, piece: Piece) {
        self.squares[piece.square.index() as usize] = Some(piece);
    }

    /// Removes and returns the piece on `sq`.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Iterates over every piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    /// Iterates over the pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Returns true if `sq` holds a piece of `color` and `kind`.
    #[inline]
    pub fn has(&self, sq: Square, color: Color, kind: PieceKind) -> bool {
        matches!(self.get(sq), Some(p) if p.color == color && p.kind == kind)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.pieces().count()
    }

    /// Serializes the placement field of a FEN string.
    pub fn to_fen_placement(&self) -> String {
        let mut fen = String::with_capacity(64);
        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                let piece = Square::from_coords(file, rank).and_then(|sq| self.get(sq));
                match piece {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_fen_placement())
    }
}
