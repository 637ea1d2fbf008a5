//! Chess rules engine over a square-array board.
//!
//! This crate provides:
//! - [`Board`] - 64-slot piece placement
//! - [`Position`] - Immutable game state with memoized check flag and legal moves
//! - [`GameStatus`] - Checkmate / stalemate detection
//! - [`Game`] - Move-by-move play with history and undo
//! - Move generation, legality filtering and perft in [`movegen`]
//!
//! # Architecture
//!
//! Positions are never mutated. Playing a move copies the board array into a
//! fresh [`Position`]. Legality is decided by playing each candidate on a
//! scratch position and probing whether the mover's king is attacked; scratch
//! positions are tagged with a simulation depth that bounds the recursion.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, GameStatus, Position};
//!
//! let position = Position::startpos();
//! println!("Legal moves from starting position: {}", position.legal_moves().len());
//!
//! let mut game = Game::new();
//! game.make_move_uci("e2e4").unwrap();
//! game.make_move_names("e7", "e5").unwrap();
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! println!("Position after 1.e4 e5: {}", game.to_fen());
//! ```

mod board;
mod game;
pub mod movegen;
mod position;
mod status;

pub use board::Board;
pub use game::{Game, GameError, GameMove};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    generate_legal_moves, is_king_attacked, is_square_attacked, make_move, pseudo_legal_moves,
    MAX_SIMULATION_DEPTH,
};
pub use position::{CastlingRights, Position, PositionError};
pub use status::GameStatus;
