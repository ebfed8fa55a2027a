use crate::engine::Evaluator;
use crate::logic::board::{Position, Role, DIAGONALS};
use crate::logic::eval_constants::{
    ADVANCE_EXPONENT, EDGE_SCAN_MAX, EDGE_SCAN_MIN, WEIGHT_ADVANCE, WEIGHT_EDGE, WEIGHT_ESCAPE,
    WEIGHT_PROXIMITY,
};

/// Positional heuristic, scored for the wolf and negated for the sheep.
///
/// The wolf gains for standing near its escape row, for sheep that have
/// advanced, and for open diagonals. Every sheep close to the wolf costs it
/// points.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, wolf: Position, sheep: &[Position], rate_for: Role) -> f64 {
        let mut score = 0.0;

        // 1. Escape row
        score -= (1.0 - 1.0 / (f64::from(wolf.y) + 1.0)) * WEIGHT_ESCAPE;

        // 2. Flock
        for &s in sheep {
            let distance = f64::from(s.chebyshev(wolf));
            score -= WEIGHT_PROXIMITY / distance;
            score += f64::from(s.y).powf(ADVANCE_EXPONENT) * WEIGHT_ADVANCE;
        }

        // 3. Room on each diagonal
        for &(dx, dy) in &DIAGONALS {
            let distance = f64::from(edge_distance(wolf, dx, dy));
            score += (1.0 - 1.0 / (distance + 1.0)) * WEIGHT_EDGE;
        }

        match rate_for {
            Role::Wolf => score,
            Role::Sheep => -score,
        }
    }
}

/// Steps from `from` along `(dx, dy)` while strictly inside the scan window,
/// counting the steps taken. Sheep do not stop the scan.
pub fn edge_distance(from: Position, dx: i8, dy: i8) -> u32 {
    let inside = |x: i16, y: i16| {
        x > EDGE_SCAN_MIN && x < EDGE_SCAN_MAX && y > EDGE_SCAN_MIN && y < EDGE_SCAN_MAX
    };
    let (dx, dy) = (i16::from(dx), i16::from(dy));
    let mut x = i16::from(from.x) + dx;
    let mut y = i16::from(from.y) + dy;
    let mut distance = 0;
    while inside(x, y) {
        x += dx;
        y += dy;
        distance += 1;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::{INITIAL_SHEEP, INITIAL_WOLF};

    fn evaluator() -> HeuristicEvaluator {
        HeuristicEvaluator::new()
    }

    fn pos(x: u8, y: u8) -> Position {
        Position { x, y }
    }

    #[test]
    fn test_edge_distance_from_start() {
        assert_eq!(edge_distance(INITIAL_WOLF, -1, -1), 3);
        assert_eq!(edge_distance(INITIAL_WOLF, 1, -1), 3);
        assert_eq!(edge_distance(INITIAL_WOLF, -1, 1), 0);
        assert_eq!(edge_distance(INITIAL_WOLF, 1, 1), 0);
    }

    #[test]
    fn test_edge_distance_stops_before_row_zero() {
        // (3,3) -> (2,2) -> (1,1) -> (0,0): row/column 0 is outside the window.
        assert_eq!(edge_distance(pos(3, 3), -1, -1), 2);
        // (3,3) -> (4,4) ... (7,7) -> (8,8)
        assert_eq!(edge_distance(pos(3, 3), 1, 1), 4);
    }

    #[test]
    fn test_initial_position_score() {
        let score = evaluator().evaluate(INITIAL_WOLF, &INITIAL_SHEEP, Role::Wolf);
        let expected = -875.0 - 400.0 / 7.0 + 120.0;
        assert!((score - expected).abs() < 1e-9, "{score} != {expected}");
    }

    #[test]
    fn test_sheep_rating_is_negated() {
        let eval = evaluator();
        let sheep = [pos(0, 3), pos(2, 3), pos(5, 2), pos(7, 4)];
        let wolf = pos(3, 5);
        let for_wolf = eval.evaluate(wolf, &sheep, Role::Wolf);
        let for_sheep = eval.evaluate(wolf, &sheep, Role::Sheep);
        assert!((for_wolf + for_sheep).abs() < 1e-9);
    }

    #[test]
    fn test_wolf_prefers_rows_closer_to_escape() {
        let eval = evaluator();
        let sheep = [pos(0, 0), pos(2, 0), pos(4, 0), pos(6, 0)];
        let near = eval.evaluate(pos(3, 3), &sheep, Role::Wolf);
        let far = eval.evaluate(pos(3, 5), &sheep, Role::Wolf);
        assert!(near > far);
    }

    #[test]
    fn test_advanced_sheep_favour_wolf() {
        let eval = evaluator();
        let wolf = pos(3, 7);
        let back = [pos(0, 0), pos(2, 0), pos(4, 0), pos(6, 0)];
        let forward = [pos(0, 2), pos(2, 2), pos(4, 2), pos(6, 2)];
        assert!(eval.evaluate(wolf, &forward, Role::Wolf) > eval.evaluate(wolf, &back, Role::Wolf));
    }
}
