//! Game management with move history and undo.
//!
//! [`Game`] wraps the current [`Position`] together with every position that
//! preceded it, so moves can be taken back. Moves are validated against the
//! legal move list before they are applied; a rejected move leaves the game
//! untouched.

use chess_core::{Move, MoveTextError, PieceKind, Square, SquareError};
use thiserror::Error;
use tracing::{debug, info};

use crate::movegen::make_move;
use crate::{GameStatus, Position, PositionError};

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move as played.
    pub mov: Move,
    /// UCI text of the move.
    pub uci: String,
    /// FEN of the position after the move.
    pub fen_after: String,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No legal move connects the two squares.
    #[error("no legal move from {from} to {to}")]
    NoSuchMove { from: Square, to: Square },

    /// A square name could not be parsed.
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    /// Move text could not be parsed.
    #[error(transparent)]
    InvalidMoveText(#[from] MoveTextError),

    /// The game has already ended.
    #[error("game is over: {0}")]
    GameOver(GameStatus),

    /// There is no move to take back.
    #[error("no move to undo")]
    NothingToUndo,
}

/// A chess game with history tracking.
///
/// Unlike [`Position`], which represents a single board state, `Game` keeps
/// the positions that led to the current one.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Positions before each played move, oldest first.
    ancestors: Vec<Position>,
    /// Played moves, parallel to `ancestors`.
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        Game {
            position,
            ancestors: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns all legal moves in the current position.
    pub fn legal_moves(&self) -> &[Move] {
        self.position.legal_moves()
    }

    /// Returns the squares the piece on `from` can legally move to.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.position.legal_destinations(from)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    /// Returns the state of the game in the current position.
    pub fn status(&self) -> GameStatus {
        self.position.status()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Plays the legal move from `from` to `to`.
    ///
    /// `promotion` picks the promotion piece; when it is `None` and the move
    /// promotes, a queen is chosen.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<&GameMove, GameError> {
        let status = self.status();
        if status.is_over() {
            return Err(GameError::GameOver(status));
        }

        let Some(m) = self.position.find_move(from, to, promotion) else {
            debug!(%from, %to, fen = %self.position.to_fen(), "rejected move");
            return Err(GameError::NoSuchMove { from, to });
        };

        Ok(self.apply_move(m))
    }

    /// Plays a move given in UCI notation (e.g. `"e2e4"`, `"a7a8n"`).
    pub fn make_move_uci(&mut self, uci: &str) -> Result<&GameMove, GameError> {
        let (from, to, promotion) = Move::parse_uci(uci)?;
        self.make_move(from, to, promotion)
    }

    /// Plays a move given as two square names (e.g. `"e2"`, `"e4"`).
    pub fn make_move_names(&mut self, from: &str, to: &str) -> Result<&GameMove, GameError> {
        let from = Square::from_name(from)?;
        let to = Square::from_name(to)?;
        self.make_move(from, to, None)
    }

    /// Takes back the last move.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let previous = self.ancestors.pop().ok_or(GameError::NothingToUndo)?;
        let undone = self.moves.pop().ok_or(GameError::NothingToUndo)?;
        self.position = previous;
        debug!(mv = %undone.mov, "undid move");
        Ok(undone.mov)
    }

    /// Returns the current position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    fn apply_move(&mut self, m: Move) -> &GameMove {
        let next = make_move(&self.position, m);
        let previous = std::mem::replace(&mut self.position, next);
        self.ancestors.push(previous);

        let fen_after = self.position.to_fen();
        debug!(mv = %m, fen = %fen_after, "applied move");

        let status = self.position.status();
        if status.is_over() {
            info!(%status, plies = self.moves.len() + 1, "game over");
        }

        self.moves.push(GameMove {
            mov: m,
            uci: m.to_uci(),
            fen_after,
        });
        &self.moves[self.moves.len() - 1]
    }
}
