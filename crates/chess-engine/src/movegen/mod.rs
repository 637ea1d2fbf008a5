//! Move generation.
//!
//! Generation happens in two layers. [`pseudo_legal_moves`] asks each piece
//! of the side to move for the moves its pattern allows on the current
//! occupancy. The legality filter then plays every candidate on a scratch
//! position and drops those that leave the mover's king attacked.
//!
//! Attack probing only ever looks at the opponent's pseudo-legal attack set,
//! never at its legal moves, so legality for one side bottoms out in the
//! other side's unfiltered patterns. Scratch positions carry an increased
//! simulation depth; past [`MAX_SIMULATION_DEPTH`] generation yields nothing
//! and no square counts as attacked, which bounds the recursion.

mod apply;
pub mod perft;
mod rules;

use crate::Position;
use chess_core::{Color, Move, Square};

pub use apply::make_move;
pub(crate) use apply::simulate;
use rules::Mode;

/// Deepest simulation level at which moves are still generated.
pub const MAX_SIMULATION_DEPTH: u8 = 2;

/// Generates all legal moves for the side to move.
///
/// Prefer [`Position::legal_moves`], which memoizes this.
pub fn generate_legal_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move();
    let mut moves = pseudo_legal_moves(position);
    moves.retain(|&m| leaves_king_safe(position, m, us));
    moves
}

/// Generates the pseudo-legal moves of the side to move: every move the
/// piece patterns allow, ignoring whether the mover's king ends up attacked.
pub fn pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    if position.simulation_depth() > MAX_SIMULATION_DEPTH {
        return moves;
    }
    for piece in position.board().pieces_of(position.side_to_move()) {
        rules::generate(position, piece, Mode::Moves, &mut moves);
    }
    moves
}

/// Generates the pseudo-legal moves of the piece on `from`, whichever side
/// it belongs to.
pub fn pseudo_legal_moves_from(position: &Position, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    if position.simulation_depth() > MAX_SIMULATION_DEPTH {
        return moves;
    }
    if let Some(piece) = position.piece_at(from) {
        rules::generate(position, piece, Mode::Moves, &mut moves);
    }
    moves
}

/// Returns true if `m`, played in `position`, leaves `us`'s king unattacked.
fn leaves_king_safe(position: &Position, m: Move, us: Color) -> bool {
    let scratch = simulate(position, m);
    !is_square_attacked(&scratch, scratch.king_square(us), us.opposite())
}

/// Returns true if `by_color` attacks `sq` in `position`.
pub fn is_square_attacked(position: &Position, sq: Square, by_color: Color) -> bool {
    if position.simulation_depth() > MAX_SIMULATION_DEPTH {
        return false;
    }
    let mut targets = Vec::with_capacity(32);
    position.board().pieces_of(by_color).any(|piece| {
        targets.clear();
        rules::generate(position, piece, Mode::Attacks, &mut targets);
        targets.iter().any(|m| m.to() == sq)
    })
}

/// Returns true if the king of the given color is attacked.
pub fn is_king_attacked(position: &Position, king_color: Color) -> bool {
    is_square_attacked(position, position.king_square(king_color), king_color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{PieceKind, SideEffect};

    fn sq(name: &str) -> Square {
        Square::from_name(name).unwrap()
    }

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn has_move(position: &Position, from: &str, to: &str) -> bool {
        position
            .legal_moves()
            .iter()
            .any(|m| m.from() == sq(from) && m.to() == sq(to))
    }

    #[test]
    fn generate_moves_startpos() {
        let position = Position::startpos();
        let moves = generate_legal_moves(&position);
        assert_eq!(moves.len(), 20); // 16 pawn moves + 4 knight moves
    }

    #[test]
    fn is_square_attacked_startpos() {
        let position = Position::startpos();
        assert!(is_square_attacked(&position, sq("e3"), Color::White));
        assert!(is_square_attacked(&position, sq("f3"), Color::White));
        assert!(!is_square_attacked(&position, sq("e4"), Color::White));
        assert!(is_square_attacked(&position, sq("c6"), Color::Black));
    }

    #[test]
    fn pawn_pushes_do_not_attack() {
        let position = pos("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(!is_square_attacked(&position, sq("e3"), Color::White));
        assert!(is_square_attacked(&position, sq("d3"), Color::White));
        assert!(is_square_attacked(&position, sq("f3"), Color::White));
    }

    #[test]
    fn is_king_attacked_startpos() {
        let position = Position::startpos();
        assert!(!is_king_attacked(&position, Color::White));
        assert!(!is_king_attacked(&position, Color::Black));
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // The e2 knight shields its king from the e8 rook.
        let position = pos("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(position.legal_moves_from(sq("e2")).is_empty());
        assert!(!pseudo_legal_moves_from(&position, sq("e2")).is_empty());
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let position = pos("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(position.is_check());
        for m in position.legal_moves() {
            assert_ne!(m.to().rank(), 0, "{m} stays on the attacked rank");
        }
        assert!(has_move(&position, "e1", "e2"));
    }

    #[test]
    fn check_must_be_answered() {
        // Three king steps and the bishop block on c1.
        let position = pos("4k3/8/8/8/8/4B3/8/r3K2R w K - 0 1");
        assert!(position.is_check());
        assert_eq!(position.legal_moves().len(), 4);
        assert!(has_move(&position, "e3", "c1"));
        assert!(!has_move(&position, "h1", "h8"));
        assert!(!has_move(&position, "e1", "g1"));
        assert!(position
            .legal_moves()
            .iter()
            .all(|m| m.piece() == PieceKind::King || m.to() == Square::C1));
    }

    #[test]
    fn castling_kingside() {
        let position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let castle = position.find_move(Square::E1, Square::G1, None).unwrap();
        assert_eq!(
            castle.effect(),
            Some(SideEffect::RelocateRook {
                from: Square::H1,
                to: Square::F1
            })
        );
    }

    #[test]
    fn castling_queenside() {
        let position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let castle = position.find_move(Square::E1, Square::C1, None).unwrap();
        assert_eq!(
            castle.effect(),
            Some(SideEffect::RelocateRook {
                from: Square::A1,
                to: Square::D1
            })
        );
    }

    #[test]
    fn no_castling_through_check() {
        // The f-file rook covers f1.
        let position = pos("r3k3/ppppp1pp/8/5r2/8/8/PPPPP2P/R3K2R w KQq - 0 1");
        assert!(!position.legal_moves().iter().any(|m| m.to() == Square::G1 && m.is_castling()));
        assert!(position.find_move(Square::E1, Square::C1, None).is_some());
    }

    #[test]
    fn no_queenside_castling_through_check() {
        // The d-file rook covers d1, the king's transit square.
        let position = pos("r2rk3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(position.find_move(Square::E1, Square::C1, None).is_none());
        assert!(position.find_move(Square::E1, Square::G1, None).is_some());

        // The c-file rook covers c1, the king's destination.
        let position = pos("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(position.find_move(Square::E1, Square::C1, None).is_none());
        assert!(position.find_move(Square::E1, Square::G1, None).is_some());
    }

    #[test]
    fn no_castling_without_rook_on_home_square() {
        let position = pos("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
        assert!(!position.legal_moves().iter().any(|m| m.is_castling()));
    }

    #[test]
    fn queenside_castling_needs_b_file_empty() {
        let position = pos("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(position.find_move(Square::E1, Square::C1, None).is_none());
    }

    #[test]
    fn queenside_castling_ignores_attacked_b_file() {
        // b1 is attacked but the king never crosses it.
        let position = pos("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(position.find_move(Square::E1, Square::C1, None).is_some());
    }

    #[test]
    fn en_passant() {
        let position = pos("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1");
        let ep = position.find_move(sq("f5"), sq("e6"), None).unwrap();
        assert_eq!(ep.effect(), Some(SideEffect::RemovePawn(sq("e5"))));
    }

    #[test]
    fn en_passant_exposing_king_is_illegal() {
        // Taking on c6 would open the fifth rank to the h5 rook.
        let position = pos("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
        assert!(position.find_move(sq("b5"), sq("c6"), None).is_none());
        assert!(has_move(&position, "b5", "b6"));
    }

    #[test]
    fn promotion() {
        let position = pos("8/P7/8/8/8/8/8/4K2k w - - 0 1");
        let promotions: Vec<PieceKind> = position
            .legal_moves()
            .iter()
            .filter_map(|m| m.promotion())
            .collect();
        assert_eq!(promotions, PieceKind::PROMOTIONS.to_vec());
    }

    #[test]
    fn promotion_by_capture() {
        let position = pos("1n6/P7/8/8/8/8/8/4K2k w - - 0 1");
        let captures = position
            .legal_moves_from(sq("a7"))
            .iter()
            .filter(|m| m.to() == sq("b8"))
            .count();
        assert_eq!(captures, 4);
    }

    #[test]
    fn simulation_depth_guard_stops_generation() {
        let start = Position::startpos();
        let g1f3 = start.find_move(Square::G1, sq("f3"), None).unwrap();
        let one = simulate(&start, g1f3);
        let g8f6 = one.find_move(Square::G8, sq("f6"), None).unwrap();
        let two = simulate(&one, g8f6);
        let f3g1 = two.find_move(sq("f3"), Square::G1, None).unwrap();
        let three = simulate(&two, f3g1);

        assert_eq!(one.simulation_depth(), 1);
        assert_eq!(two.simulation_depth(), 2);
        assert_eq!(three.simulation_depth(), 3);
        assert!(!pseudo_legal_moves(&two).is_empty());
        assert!(pseudo_legal_moves(&three).is_empty());
        assert!(three.legal_moves().is_empty());
        assert!(!is_square_attacked(&three, sq("e6"), Color::Black));
    }

    #[test]
    fn played_moves_keep_depth_zero() {
        let start = Position::startpos();
        let m = start.find_move(sq("e2"), sq("e4"), None).unwrap();
        assert_eq!(make_move(&start, m).simulation_depth(), 0);
    }
}
