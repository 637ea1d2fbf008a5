//! Game-over detection.

use chess_core::Color;
use std::fmt;

use crate::Position;

/// State of the game in a given position.
///
/// Derived from two facts a [`Position`] exposes separately: whether the
/// side to move has any legal move, and whether its king is attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// No legal moves and the king is attacked.
    Checkmate { winner: Color },
    /// No legal moves and the king is not attacked.
    Stalemate,
}

impl GameStatus {
    /// Classifies `position`.
    pub fn of(position: &Position) -> Self {
        if !position.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if position.is_check() {
            GameStatus::Checkmate {
                winner: position.side_to_move().opposite(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Returns true once no further move can be played.
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_ongoing() {
        let pos = Position::startpos();
        assert_eq!(pos.status(), GameStatus::Ongoing);
        assert!(!pos.status().is_over());
    }

    #[test]
    fn two_queens_mate_the_corner_king() {
        let pos = Position::from_fen("K7/qq6/8/8/8/8/8/k7 w - - 0 1").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert!(pos.is_check());
        assert_eq!(
            pos.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn single_queen_can_be_captured() {
        let pos = Position::from_fen("K7/q7/8/8/8/8/8/k7 w - - 0 1").unwrap();
        assert!(!pos.legal_moves().is_empty());
        assert!(pos.is_check());
        assert_eq!(pos.status(), GameStatus::Ongoing);
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert!(!pos.is_check());
        assert_eq!(pos.status(), GameStatus::Stalemate);
        assert!(pos.status().is_over());
    }

    #[test]
    fn display() {
        assert_eq!(GameStatus::Stalemate.to_string(), "stalemate");
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate, White wins"
        );
    }
}
