//! Move application.

use chess_core::{Color, Move, Piece, PieceKind, SideEffect};

use crate::position::PositionParts;
use crate::Position;

/// Plays `m` and returns the resulting position.
///
/// `m` is expected to come from [`Position::legal_moves`]; the simulation
/// depth of `position` carries over unchanged.
///
/// # Panics
///
/// Panics if the from-square of `m` is empty.
pub fn make_move(position: &Position, m: Move) -> Position {
    apply(position, m, position.simulation_depth())
}

/// Plays `m` on a scratch copy one simulation level deeper.
pub(crate) fn simulate(position: &Position, m: Move) -> Position {
    apply(position, m, position.simulation_depth().saturating_add(1))
}

fn apply(position: &Position, m: Move, simulation_depth: u8) -> Position {
    let mut board = *position.board();
    let us = position.side_to_move();

    let moving = board
        .take(m.from())
        .unwrap_or_else(|| panic!("no piece on {} for {:?}", m.from(), m));
    let captured = board.take(m.to());
    board.put(moving.moved_to(m.to()));

    let mut pawn_removed = false;
    match m.effect() {
        Some(SideEffect::RelocateRook { from, to }) => {
            if let Some(rook) = board.take(from) {
                board.put(rook.moved_to(to));
            }
        }
        Some(SideEffect::RemovePawn(sq)) => {
            pawn_removed = board.take(sq).is_some();
        }
        Some(SideEffect::Promote(kind)) => {
            board.put(Piece::new(moving.color, kind, m.to()));
        }
        None => {}
    }

    let mut king_squares = position.king_squares();
    let mut castling = position.castling();
    if moving.kind == PieceKind::King {
        king_squares[moving.color.index()] = m.to();
        castling.remove_color(moving.color);
    }
    castling.remove_for_square(m.from());
    castling.remove_for_square(m.to());

    let en_passant = if moving.kind == PieceKind::Pawn
        && (i32::from(m.to().index()) - i32::from(m.from().index())).abs() == 16
    {
        m.from().offset(us.forward())
    } else {
        None
    };

    let halfmove_clock = if moving.kind == PieceKind::Pawn || captured.is_some() || pawn_removed {
        0
    } else {
        position.halfmove_clock().saturating_add(1)
    };
    let fullmove_number = match us {
        Color::White => position.fullmove_number(),
        Color::Black => position.fullmove_number().saturating_add(1),
    };

    Position::from_parts(PositionParts {
        board,
        side_to_move: us.opposite(),
        castling,
        en_passant,
        king_squares,
        halfmove_clock,
        fullmove_number,
        simulation_depth,
    })
}
