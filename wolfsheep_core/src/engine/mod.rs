use crate::logic::board::{Position, Role};
use crate::logic::game::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod eval;
pub mod search;

/// A single piece's one-step diagonal relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
}

pub trait Evaluator {
    /// Static score of a position for `rate_for`. Higher is better.
    fn evaluate(&self, wolf: Position, sheep: &[Position], rate_for: Role) -> f64;
}

pub trait Searcher {
    fn search(&mut self, game_state: &GameState, depth: u8) -> Option<(Move, SearchStats)>;
}
