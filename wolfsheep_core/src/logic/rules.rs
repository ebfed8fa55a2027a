use crate::logic::board::{Piece, Position, Role};
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("destination {0} is off the board")]
    OutOfBounds(Position),
    #[error("no piece at {0}")]
    NoPieceAtSource(Position),
    #[error("square {0} is occupied")]
    TargetOccupied(Position),
    #[error("it is not the {0}'s turn")]
    NotYourTurn(Role),
    #[error("{role} cannot move from {from} to {to}")]
    InvalidMovePattern {
        role: Role,
        from: Position,
        to: Position,
    },
}

/// Returns the wolf if it stands on `position`, otherwise the first sheep there.
#[must_use]
pub fn piece_at(position: Position, wolf: Position, sheep: &[Position]) -> Option<Piece> {
    if wolf == position {
        return Some(Piece {
            role: Role::Wolf,
            position: wolf,
        });
    }
    sheep.iter().find(|&&s| s == position).map(|&s| Piece {
        role: Role::Sheep,
        position: s,
    })
}

/// Checks a move against the live state and returns the role that would move.
///
/// The checks mirror what `MoveGenerator` produces: a legal move here is
/// always one of the generated moves for the side to move, and vice versa.
pub fn is_valid_move(state: &GameState, from: Position, to: Position) -> Result<Role, MoveError> {
    if state.winner.is_some() {
        return Err(MoveError::GameOver);
    }
    if Position::new(to.x, to.y).is_none() {
        return Err(MoveError::OutOfBounds(to));
    }

    let piece = piece_at(from, state.wolf, &state.sheep).ok_or(MoveError::NoPieceAtSource(from))?;
    if piece_at(to, state.wolf, &state.sheep).is_some() {
        return Err(MoveError::TargetOccupied(to));
    }
    if state.turn != Some(piece.role) {
        return Err(MoveError::NotYourTurn(piece.role));
    }

    let (dx, dy) = from.delta(to);
    let step_ok = dx.abs() == 1
        && match piece.role {
            Role::Wolf => dy.abs() == 1,
            Role::Sheep => dy == 1,
        };
    if !step_ok {
        return Err(MoveError::InvalidMovePattern {
            role: piece.role,
            from,
            to,
        });
    }

    Ok(piece.role)
}

/// Terminal check, first match wins:
/// 1. wolf on row 0 escapes,
/// 2. a wolf without moves is trapped,
/// 3. sheep without moves hand the game to the wolf.
///
/// The sheep check runs whatever side is to move.
#[must_use]
pub fn check_winner(wolf: Position, sheep: &[Position]) -> Option<Role> {
    if wolf.y == 0 {
        return Some(Role::Wolf);
    }
    let generator = MoveGenerator::new();
    if !generator.has_legal_moves(wolf, sheep, Role::Wolf) {
        return Some(Role::Sheep);
    }
    if !generator.has_legal_moves(wolf, sheep, Role::Sheep) {
        return Some(Role::Wolf);
    }
    None
}
