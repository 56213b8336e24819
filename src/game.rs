//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Square};
use crate::error::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub square: Square,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history.
///
/// Games always start from the standard position: an empty board with X to
/// move. The board at any point is reconstructed by replaying the move list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game at the initial position
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move
    pub fn play(&mut self, square: Square) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let new_state = current.make_move(square)?;

        self.moves.push(Move {
            square,
            player: current.to_move(),
        });

        if new_state.is_terminal() {
            self.outcome = Some(if let Some(winner) = new_state.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// Returns the board state after applying moves[0..end_index].
    /// If end_index >= moves.len(), all moves are applied.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board> {
        let mut state = Board::new();
        for m in self.moves.iter().take(end_index) {
            state = state.make_move(m.square)?;
        }
        Ok(state)
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, from the initial position onward
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    pub fn state_sequence(&self) -> Result<Vec<Board>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(Board::new());

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
