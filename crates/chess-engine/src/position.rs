//! Chess position representation.

use std::fmt;
use std::sync::OnceLock;

use chess_core::{Color, FenError, FenParser, Move, PieceKind, Square};
use thiserror::Error;

use crate::movegen::{self, make_move};
use crate::{Board, GameStatus};

/// Errors raised while building a position from a FEN string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("invalid position: {0} has no king")]
    MissingKing(Color),

    #[error("invalid position: {0} has more than one king")]
    MultipleKings(Color),
}

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Builds rights from per-side `(kingside, queenside)` pairs.
    pub fn from_sides(sides: [(bool, bool); 2]) -> Self {
        let mut rights = Self::NONE;
        for color in Color::ALL {
            let (kingside, queenside) = sides[color.index()];
            if kingside {
                rights.0 |= Self::kingside_flag(color);
            }
            if queenside {
                rights.0 |= Self::queenside_flag(color);
            }
        }
        rights
    }

    const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        (self.0 & Self::kingside_flag(color)) != 0
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        (self.0 & Self::queenside_flag(color)) != 0
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0 &= !(Self::kingside_flag(color) | Self::queenside_flag(color));
    }

    /// Removes the right tied to a rook starting on `sq`, if any.
    ///
    /// Called for both squares of every move: a right dies as soon as its
    /// rook leaves home or is captured there.
    pub fn remove_for_square(&mut self, sq: Square) {
        for color in Color::ALL {
            if sq == color.kingside_rook_home() {
                self.0 &= !Self::kingside_flag(color);
            } else if sq == color.queenside_rook_home() {
                self.0 &= !Self::queenside_flag(color);
            }
        }
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Serializes the castling field of a FEN string.
    pub fn to_fen_field(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        let mut field = String::with_capacity(4);
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                field.push(c);
            }
        }
        field
    }
}

/// Complete, immutable chess position state.
///
/// Every move produces a new `Position`; nothing is mutated after
/// construction. The check flag and the legal move list are computed on first
/// query and memoized per instance.
#[derive(Clone)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    king_squares: [Square; 2],
    halfmove_clock: u32,
    fullmove_number: u32,
    simulation_depth: u8,
    in_check: OnceLock<bool>,
    legal_moves: OnceLock<Vec<Move>>,
}

/// Raw state handed to [`Position::from_parts`] by the move applier.
pub(crate) struct PositionParts {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub king_squares: [Square; 2],
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub simulation_depth: u8,
}

impl Position {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from a FEN string.
    ///
    /// King squares are found by scanning the placement; each side must have
    /// exactly one king.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let parsed = FenParser::parse(fen)?;

        let mut board = Board::EMPTY;
        let mut kings: [Option<Square>; 2] = [None; 2];
        for piece in parsed.pieces {
            if piece.kind == PieceKind::King
                && kings[piece.color.index()].replace(piece.square).is_some()
            {
                return Err(PositionError::MultipleKings(piece.color));
            }
            board.put(piece);
        }

        let white_king = kings[Color::White.index()].ok_or(PositionError::MissingKing(Color::White))?;
        let black_king = kings[Color::Black.index()].ok_or(PositionError::MissingKing(Color::Black))?;

        Ok(Self::from_parts(PositionParts {
            board,
            side_to_move: parsed.active_color,
            castling: CastlingRights::from_sides(parsed.castling),
            en_passant: parsed.en_passant,
            king_squares: [white_king, black_king],
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
            simulation_depth: 0,
        }))
    }

    pub(crate) fn from_parts(parts: PositionParts) -> Self {
        debug_assert!(
            Color::ALL.iter().all(|&c| parts
                .board
                .has(parts.king_squares[c.index()], c, PieceKind::King)),
            "cached king squares must hold kings"
        );
        Position {
            board: parts.board,
            side_to_move: parts.side_to_move,
            castling: parts.castling,
            en_passant: parts.en_passant,
            king_squares: parts.king_squares,
            halfmove_clock: parts.halfmove_clock,
            fullmove_number: parts.fullmove_number,
            simulation_depth: parts.simulation_depth,
            in_check: OnceLock::new(),
            legal_moves: OnceLock::new(),
        }
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.board.to_fen_placement(),
            self.side_to_move.to_fen_char(),
            self.castling.to_fen_field(),
            self.en_passant
                .map_or_else(|| "-".to_string(), |sq| sq.name()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Returns the piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<chess_core::Piece> {
        self.board.get(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant this move.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the cached square of `color`'s king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub(crate) fn king_squares(&self) -> [Square; 2] {
        self.king_squares
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// How many "is this move safe" probes deep this position was built.
    ///
    /// Positions reachable by play are always at depth 0.
    #[inline]
    pub fn simulation_depth(&self) -> u8 {
        self.simulation_depth
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        *self
            .in_check
            .get_or_init(|| movegen::is_king_attacked(self, self.side_to_move))
    }

    /// Returns every legal move for the side to move.
    pub fn legal_moves(&self) -> &[Move] {
        self.legal_moves
            .get_or_init(|| movegen::generate_legal_moves(self))
    }

    /// Returns the legal moves of the piece on `from`.
    ///
    /// Empty when the square is vacant or holds a piece of the side not to
    /// move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .copied()
            .filter(|m| m.from() == from)
            .collect()
    }

    /// Returns the legal destination squares of the piece on `from`.
    ///
    /// A promoting pawn reaches its square through four moves; the square is
    /// listed once.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut squares: Vec<Square> = self
            .legal_moves_from(from)
            .into_iter()
            .map(|m| m.to())
            .collect();
        squares.dedup();
        squares
    }

    /// Looks up the legal move between two squares.
    ///
    /// When `promotion` is `None` and the move promotes, the queen promotion
    /// is returned.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        self.legal_moves().iter().copied().find(|m| {
            m.from() == from
                && m.to() == to
                && match promotion {
                    Some(kind) => m.promotion() == Some(kind),
                    None => matches!(m.promotion(), None | Some(PieceKind::Queen)),
                }
        })
    }

    /// Applies a move and returns the successor position.
    ///
    /// # Panics
    ///
    /// Panics if no piece stands on the move's source square.
    pub fn play(&self, m: Move) -> Position {
        make_move(self, m)
    }

    /// Returns the game status of this position.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("simulation_depth", &self.simulation_depth)
            .finish()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
