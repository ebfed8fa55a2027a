use crate::engine::Move;
use crate::logic::board::{Position, Role, DIAGONALS, SHEEP_STEPS};
use crate::logic::rules::piece_at;

pub struct MoveGenerator;

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Moves for the side to move. Empty before the first game starts.
    #[must_use]
    pub fn generate_moves(&self, wolf: Position, sheep: &[Position], turn: Option<Role>) -> Vec<Move> {
        match turn {
            Some(Role::Wolf) => self.wolf_moves(wolf, sheep),
            Some(Role::Sheep) => self.sheep_moves(wolf, sheep),
            None => Vec::new(),
        }
    }

    /// The wolf's diagonal neighbours that are on the board and free of sheep.
    #[must_use]
    pub fn wolf_moves(&self, wolf: Position, sheep: &[Position]) -> Vec<Move> {
        DIAGONALS
            .iter()
            .filter_map(|&(dx, dy)| wolf.offset(dx, dy))
            .filter(|to| !sheep.contains(to))
            .map(|to| Move::new(wolf, to))
            .collect()
    }

    /// Forward moves for every sheep, by sheep index then left before right.
    #[must_use]
    pub fn sheep_moves(&self, wolf: Position, sheep: &[Position]) -> Vec<Move> {
        let mut moves = Vec::with_capacity(sheep.len() * SHEEP_STEPS.len());
        for &from in sheep {
            for &(dx, dy) in &SHEEP_STEPS {
                if let Some(to) = from.offset(dx, dy) {
                    if piece_at(to, wolf, sheep).is_none() {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }
        moves
    }

    /// Checks if `role` has at least one legal move.
    /// Returns as soon as one is found.
    #[must_use]
    pub fn has_legal_moves(&self, wolf: Position, sheep: &[Position], role: Role) -> bool {
        match role {
            Role::Wolf => DIAGONALS
                .iter()
                .filter_map(|&(dx, dy)| wolf.offset(dx, dy))
                .any(|to| !sheep.contains(&to)),
            Role::Sheep => sheep.iter().any(|&from| {
                SHEEP_STEPS
                    .iter()
                    .filter_map(|&(dx, dy)| from.offset(dx, dy))
                    .any(|to| piece_at(to, wolf, sheep).is_none())
            }),
        }
    }
}
