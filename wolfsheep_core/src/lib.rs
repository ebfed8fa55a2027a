//! Rules engine and minimax opponent for the wolf & sheep board game.
//!
//! One wolf starts on the bottom row and tries to reach row 0; four sheep
//! start on row 0, only move forward, and try to box the wolf in. Both sides
//! move one diagonal step per turn.

pub mod controller;
pub mod engine;
pub mod logic;

pub use controller::GameController;
pub use engine::Move;
pub use logic::board::{Position, Role};
pub use logic::events::{ListenerId, MoveEvent};
pub use logic::game::GameState;
pub use logic::rules::MoveError;
