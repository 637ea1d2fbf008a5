//! FEN (Forsyth-Edwards Notation) tokenizing.

use thiserror::Error;

use crate::{Color, Piece, Square};

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Tokenized FEN data.
///
/// Placement is already expanded into pieces; the engine turns this into
/// its own position representation and checks board-level invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Every piece on the board, in FEN reading order (a8 first).
    pub pieces: Vec<Piece>,
    /// Side to move.
    pub active_color: Color,
    /// Castling availability as `[white, black]` × `(kingside, queenside)`.
    pub castling: [(bool, bool); 2],
    /// En passant target square.
    pub en_passant: Option<Square>,
    /// Halfmove clock (0 when the field is omitted).
    pub halfmove_clock: u32,
    /// Fullmove number (1 when the field is omitted).
    pub fullmove_number: u32,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. The two clock fields are optional.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 4 && parts.len() != 6 {
            return Err(FenError::InvalidFieldCount(parts.len()));
        }

        let pieces = Self::parse_piece_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = Self::parse_castling(parts[2])?;
        let en_passant = Self::parse_en_passant(parts[3])?;

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let halfmove = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let fullmove = parts[5]
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (halfmove, fullmove)
        } else {
            (0, 1)
        };

        Ok(FenParser {
            pieces,
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_piece_placement(placement: &str) -> Result<Vec<Piece>, FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut pieces = Vec::with_capacity(32);
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run as u8;
                } else if let Some((kind, color)) = Piece::from_fen_char(c) {
                    if let Some(square) = Square::from_coords(file, rank) {
                        pieces.push(Piece::new(color, kind, square));
                    }
                    file += 1;
                } else {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c,
                        rank + 1
                    )));
                }
                if file > 8 {
                    break;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} does not describe exactly 8 squares",
                    rank + 1
                )));
            }
        }

        Ok(pieces)
    }

    fn parse_castling(castling: &str) -> Result<[(bool, bool); 2], FenError> {
        let mut rights = [(false, false); 2];
        if castling == "-" {
            return Ok(rights);
        }

        for c in castling.chars() {
            match c {
                'K' => rights[Color::White.index()].0 = true,
                'Q' => rights[Color::White.index()].1 = true,
                'k' => rights[Color::Black.index()].0 = true,
                'q' => rights[Color::Black.index()].1 = true,
                _ => {
                    return Err(FenError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            }
        }

        Ok(rights)
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_name(ep) {
            Ok(square) if square.rank() == 2 || square.rank() == 5 => Ok(Some(square)),
            _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
        }
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fen = FenParser::parse(FenParser::STARTPOS).unwrap();
        assert_eq!(fen.pieces.len(), 32);
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.castling, [(true, true), (true, true)]);
        assert_eq!(fen.en_passant, None);
        assert_eq!(fen.halfmove_clock, 0);
        assert_eq!(fen.fullmove_number, 1);
    }

    #[test]
    fn placement_reads_rank_eight_first() {
        let fen = FenParser::parse("K7/q7/8/8/8/8/8/k7 w - - 0 1").unwrap();
        assert_eq!(
            fen.pieces,
            vec![
                Piece::new(Color::White, PieceKind::King, Square::A8),
                Piece::new(
                    Color::Black,
                    PieceKind::Queen,
                    Square::from_name("a7").unwrap()
                ),
                Piece::new(Color::Black, PieceKind::King, Square::A1),
            ]
        );
    }

    #[test]
    fn clocks_are_optional() {
        let fen = FenParser::parse("4k3/8/8/8/8/8/8/4K3 b - -").unwrap();
        assert_eq!(fen.active_color, Color::Black);
        assert_eq!(fen.halfmove_clock, 0);
        assert_eq!(fen.fullmove_number, 1);
    }

    #[test]
    fn parse_custom_position() {
        let fen =
            FenParser::parse("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.halfmove_clock, 2);
        assert_eq!(fen.fullmove_number, 3);
    }

    #[test]
    fn invalid_field_count() {
        assert_eq!(
            FenParser::parse("invalid"),
            Err(FenError::InvalidFieldCount(1))
        );
        assert_eq!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0"),
            Err(FenError::InvalidFieldCount(5))
        );
    }

    #[test]
    fn invalid_active_color() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPP0PPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_squares() {
        assert!(matches!(
            FenParser::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            FenParser::parse("45/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_castling_rights() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
    }

    #[test]
    fn partial_castling() {
        let fen = FenParser::parse("8/8/8/8/8/8/8/8 w Kq - 0 1").unwrap();
        assert_eq!(fen.castling, [(true, false), (false, true)]);
    }

    #[test]
    fn en_passant_square() {
        let fen = FenParser::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
        assert_eq!(fen.en_passant, Square::from_name("e3").ok());

        let fen = FenParser::parse("8/8/8/8/8/8/8/8 b - d6 0 1").unwrap();
        assert_eq!(fen.en_passant, Square::from_name("d6").ok());
    }

    #[test]
    fn invalid_en_passant() {
        for bad in ["abc", "x3", "e4", "e9"] {
            let fen = format!("8/8/8/8/8/8/8/8 w - {} 0 1", bad);
            assert!(
                matches!(
                    FenParser::parse(&fen),
                    Err(FenError::InvalidEnPassantSquare(_))
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn invalid_clocks() {
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - abc 1"),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 xyz"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
        assert!(matches!(
            FenParser::parse("8/8/8/8/8/8/8/8 w - - 0 0"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidFieldCount(3);
        assert!(format!("{}", err).contains("3"));

        let err = FenError::InvalidActiveColor("x".to_string());
        assert!(format!("{}", err).contains("x"));

        let err = FenError::InvalidEnPassantSquare("z9".to_string());
        assert!(format!("{}", err).contains("z9"));
    }
}
