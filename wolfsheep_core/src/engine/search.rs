use crate::engine::eval::HeuristicEvaluator;
use crate::engine::{Evaluator, Move, SearchStats, Searcher};
use crate::logic::board::{Position, Role, SHEEP_COUNT};
use crate::logic::game::GameState;
use crate::logic::generator::MoveGenerator;

/// A hypothetical position explored by the search. Never touches live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Situation {
    pub depth: u8,
    pub wolf: Position,
    pub sheep: [Position; SHEEP_COUNT],
    pub turn: Role,
}

impl Situation {
    #[must_use]
    pub const fn new(depth: u8, wolf: Position, sheep: [Position; SHEEP_COUNT], turn: Role) -> Self {
        Self {
            depth,
            wolf,
            sheep,
            turn,
        }
    }
}

/// Successor of `situation` after `mv`: the wolf moves if it stands on
/// `mv.from`, otherwise the sheep found there. Turn flips, depth drops by one.
#[must_use]
pub fn apply_move_to_situation(mv: &Move, situation: &Situation) -> Situation {
    let mut next = *situation;
    if situation.wolf == mv.from {
        next.wolf = mv.to;
    } else {
        for sheep in &mut next.sheep {
            if *sheep == mv.from {
                *sheep = mv.to;
            }
        }
    }
    next.turn = situation.turn.opposite();
    next.depth = situation.depth.saturating_sub(1);
    next
}

/// Fixed-depth minimax with no pruning.
///
/// The root keeps the child with the highest score, every level below keeps
/// the lowest, whichever side is to move there. The first move is always
/// taken and only a strictly better score replaces it, on both sides.
pub struct MinimaxEngine<E = HeuristicEvaluator> {
    evaluator: E,
    generator: MoveGenerator,
    nodes_searched: u32,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaxEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_evaluator(HeuristicEvaluator::new())
    }
}

impl<E: Evaluator> MinimaxEngine<E> {
    pub const fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            generator: MoveGenerator::new(),
            nodes_searched: 0,
        }
    }

    #[must_use]
    pub const fn nodes_searched(&self) -> u32 {
        self.nodes_searched
    }

    /// Best move for `turn`, judged for `rate_for`. `None` when `turn` has no
    /// legal move.
    pub fn best_move(
        &mut self,
        depth: u8,
        wolf: Position,
        sheep: [Position; SHEEP_COUNT],
        turn: Role,
        rate_for: Role,
    ) -> Option<Move> {
        let root = Situation::new(depth, wolf, sheep, turn);
        let moves = self.generator.generate_moves(wolf, &sheep, Some(turn));

        let mut best: Option<(Move, f64)> = None;
        for mv in moves {
            let next = apply_move_to_situation(&mv, &root);
            let score = self.rate_situation(&next, rate_for);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
    }

    /// Score of `situation` for `rate_for`: the static evaluation at depth 0,
    /// otherwise the lowest-scoring child.
    ///
    /// A node with nothing to play is scored statically as well.
    pub fn rate_situation(&mut self, situation: &Situation, rate_for: Role) -> f64 {
        self.nodes_searched += 1;

        if situation.depth == 0 {
            return self
                .evaluator
                .evaluate(situation.wolf, &situation.sheep, rate_for);
        }

        let moves =
            self.generator
                .generate_moves(situation.wolf, &situation.sheep, Some(situation.turn));

        let mut worst: Option<f64> = None;
        for mv in &moves {
            let next = apply_move_to_situation(mv, situation);
            let score = self.rate_situation(&next, rate_for);
            if worst.is_none_or(|worst_score| score < worst_score) {
                worst = Some(score);
            }
        }

        worst.unwrap_or_else(|| {
            self.evaluator
                .evaluate(situation.wolf, &situation.sheep, rate_for)
        })
    }
}

impl<E: Evaluator> Searcher for MinimaxEngine<E> {
    fn search(&mut self, game_state: &GameState, depth: u8) -> Option<(Move, SearchStats)> {
        let turn = game_state.turn?;
        if game_state.winner.is_some() {
            return None;
        }

        self.nodes_searched = 0;
        let mv = self.best_move(depth, game_state.wolf, game_state.sheep, turn, turn)?;
        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
        };
        log::debug!(
            "{turn} search: best move {mv}, {} nodes at depth {depth}",
            stats.nodes
        );
        Some((mv, stats))
    }
}
