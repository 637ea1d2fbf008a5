//! Per-piece movement patterns.

use chess_core::{Color, Move, Piece, PieceKind, SideEffect, Square};

use super::is_square_attacked;
use crate::Position;

const KNIGHT_STEPS: [i8; 8] = [6, -6, 10, -10, 15, -15, 17, -17];
const KING_STEPS: [i8; 8] = [1, -1, 7, -7, 8, -8, 9, -9];
const BISHOP_STEPS: [i8; 4] = [7, -7, 9, -9];
const ROOK_STEPS: [i8; 4] = [1, -1, 8, -8];
const QUEEN_STEPS: [i8; 8] = [1, -1, 7, -7, 8, -8, 9, -9];

/// What a generation pass is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Candidate moves for the side to move.
    Moves,
    /// Squares the piece attacks. Pawns attack both diagonals whatever
    /// stands there; pushes and castling are left out.
    Attacks,
}

/// Appends the pseudo-legal moves (or attack targets) of `piece` to `out`.
pub(crate) fn generate(position: &Position, piece: Piece, mode: Mode, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => pawn(position, piece, mode, out),
        PieceKind::Knight => steps(position, piece, &KNIGHT_STEPS, mode, out),
        PieceKind::Bishop => slides(position, piece, &BISHOP_STEPS, mode, out),
        PieceKind::Rook => slides(position, piece, &ROOK_STEPS, mode, out),
        PieceKind::Queen => slides(position, piece, &QUEEN_STEPS, mode, out),
        PieceKind::King => {
            steps(position, piece, &KING_STEPS, mode, out);
            if mode == Mode::Moves {
                castling(position, piece, out);
            }
        }
    }
}

/// Returns whether `piece` may land on `to`: `Some(false)` for an empty
/// square, `Some(true)` for a capture, `None` if blocked.
#[inline]
fn landing(position: &Position, piece: Piece, to: Square, mode: Mode) -> Option<bool> {
    match position.piece_at(to) {
        None => Some(false),
        Some(other) if !other.is_enemy_of(piece) => None,
        // Kings are never captured by a real move.
        Some(other) if other.kind == PieceKind::King && mode == Mode::Moves => None,
        Some(_) => Some(true),
    }
}

fn steps(position: &Position, piece: Piece, deltas: &[i8], mode: Mode, out: &mut Vec<Move>) {
    for &delta in deltas {
        let Some(to) = piece.square.offset(delta) else {
            continue;
        };
        if landing(position, piece, to, mode).is_some() {
            out.push(Move::new(piece.kind, piece.square, to));
        }
    }
}

fn slides(position: &Position, piece: Piece, deltas: &[i8], mode: Mode, out: &mut Vec<Move>) {
    for &delta in deltas {
        let mut current = piece.square;
        while let Some(to) = current.offset(delta) {
            match landing(position, piece, to, mode) {
                Some(false) => out.push(Move::new(piece.kind, piece.square, to)),
                Some(true) => {
                    out.push(Move::new(piece.kind, piece.square, to));
                    break;
                }
                None => break,
            }
            current = to;
        }
    }
}

fn pawn(position: &Position, piece: Piece, mode: Mode, out: &mut Vec<Move>) {
    let color = piece.color;
    let forward = color.forward();
    let from = piece.square;

    for side in [-1, 1] {
        let Some(to) = from.offset(forward + side) else {
            continue;
        };
        if mode == Mode::Attacks {
            out.push(Move::new(PieceKind::Pawn, from, to));
            continue;
        }
        match landing(position, piece, to, mode) {
            Some(true) => push_pawn_move(color, from, to, out),
            // En passant lands on an empty square.
            Some(false) if position.en_passant() == Some(to) => {
                if let Some(victim) = to.offset(-forward) {
                    if position.board().has(victim, color.opposite(), PieceKind::Pawn) {
                        out.push(Move::with_effect(
                            PieceKind::Pawn,
                            from,
                            to,
                            SideEffect::RemovePawn(victim),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    if mode == Mode::Attacks {
        return;
    }

    let Some(one) = from.offset(forward).filter(|&sq| position.board().is_vacant(sq)) else {
        return;
    };
    push_pawn_move(color, from, one, out);

    if from.rank() == color.pawn_rank() {
        if let Some(two) = one.offset(forward).filter(|&sq| position.board().is_vacant(sq)) {
            out.push(Move::new(PieceKind::Pawn, from, two));
        }
    }
}

/// Pushes a pawn move, fanning out into the four promotions on the last rank.
fn push_pawn_move(color: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.rank() == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::with_effect(
                PieceKind::Pawn,
                from,
                to,
                SideEffect::Promote(kind),
            ));
        }
    } else {
        out.push(Move::new(PieceKind::Pawn, from, to));
    }
}

fn castling(position: &Position, king: Piece, out: &mut Vec<Move>) {
    let color = king.color;
    let home = color.king_home();
    if king.square != home {
        return;
    }
    let them = color.opposite();
    let rights = position.castling();
    if !rights.can_castle_kingside(color) && !rights.can_castle_queenside(color) {
        return;
    }
    if is_square_attacked(position, home, them) {
        return;
    }

    if rights.can_castle_kingside(color) {
        let rook_home = color.kingside_rook_home();
        if let (Some(transit), Some(dest)) = (home.offset(1), home.offset(2)) {
            if lane_is_clear(position, home, rook_home, color)
                && !is_square_attacked(position, transit, them)
                && !is_square_attacked(position, dest, them)
            {
                out.push(Move::with_effect(
                    PieceKind::King,
                    home,
                    dest,
                    SideEffect::RelocateRook {
                        from: rook_home,
                        to: transit,
                    },
                ));
            }
        }
    }

    if rights.can_castle_queenside(color) {
        let rook_home = color.queenside_rook_home();
        if let (Some(transit), Some(dest)) = (home.offset(-1), home.offset(-2)) {
            if lane_is_clear(position, home, rook_home, color)
                && !is_square_attacked(position, transit, them)
                && !is_square_attacked(position, dest, them)
            {
                out.push(Move::with_effect(
                    PieceKind::King,
                    home,
                    dest,
                    SideEffect::RelocateRook {
                        from: rook_home,
                        to: transit,
                    },
                ));
            }
        }
    }
}

/// Own rook on `rook_home` and nothing between it and the king.
fn lane_is_clear(position: &Position, king: Square, rook_home: Square, color: Color) -> bool {
    if !position.board().has(rook_home, color, PieceKind::Rook) {
        return false;
    }
    let (low, high) = if king < rook_home {
        (king.index(), rook_home.index())
    } else {
        (rook_home.index(), king.index())
    };
    (low + 1..high)
        .filter_map(Square::from_index)
        .all(|sq| position.board().is_vacant(sq))
}
