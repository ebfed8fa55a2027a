use crate::logic::board::{Position, Role, INITIAL_SHEEP, INITIAL_WOLF, SHEEP_COUNT};
use crate::logic::rules::{check_winner, is_valid_move, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub wolf: Position,
    pub sheep: [Position; SHEEP_COUNT],
    /// `None` until the first game is started.
    pub turn: Option<Role>,
    pub winner: Option<Role>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Initial layout with the wolf to move.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wolf: INITIAL_WOLF,
            sheep: INITIAL_SHEEP,
            turn: Some(Role::Wolf),
            winner: None,
        }
    }

    /// Initial layout, but nobody may move yet.
    #[must_use]
    pub const fn unstarted() -> Self {
        Self {
            wolf: INITIAL_WOLF,
            sheep: INITIAL_SHEEP,
            turn: None,
            winner: None,
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Moves the piece on `from` to `to`, hands the turn over and re-evaluates
    /// the winner. Returns the role that moved.
    ///
    /// Nothing is changed when the move is rejected.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<Role, MoveError> {
        let role = is_valid_move(self, from, to)?;

        match role {
            Role::Wolf => self.wolf = to,
            Role::Sheep => {
                for sheep in &mut self.sheep {
                    if *sheep == from {
                        *sheep = to;
                    }
                }
            }
        }

        self.turn = Some(role.opposite());
        self.update_status();

        Ok(role)
    }

    pub fn update_status(&mut self) {
        self.winner = check_winner(self.wolf, &self.sheep);
    }
}
