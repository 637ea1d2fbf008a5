//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the engine:
//! - [`Square`] for the flat 0-63 board index and square names
//! - [`stays_on_board`] for wrap-free stepping between squares
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece records
//! - [`Move`] and [`SideEffect`] for move records
//! - FEN tokenizing

mod color;
mod fen;
mod geometry;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenParser};
pub use geometry::stays_on_board;
pub use mov::{Move, MoveTextError, SideEffect};
pub use piece::{Piece, PieceKind};
pub use square::{Square, SquareError};
