// Heuristic weights, all from the wolf's point of view.

// Penalty scale for the wolf's distance from its escape row.
pub const WEIGHT_ESCAPE: f64 = 1000.0;

// Penalty per sheep, divided by the Chebyshev distance to the wolf.
pub const WEIGHT_PROXIMITY: f64 = 100.0;

// Bonus for sheep that have advanced: `y^EXPONENT * WEIGHT`.
pub const WEIGHT_ADVANCE: f64 = 30.0;
pub const ADVANCE_EXPONENT: f64 = 1.4;

// Bonus scale per diagonal for room between the wolf and the edge.
pub const WEIGHT_EDGE: f64 = 80.0;

// Edge scan bounds (exclusive on both ends). Not the same as the board's
// inclusive [0, 7] range: a diagonal stops counting at rows/columns 0 and 8.
pub const EDGE_SCAN_MIN: i16 = 0;
pub const EDGE_SCAN_MAX: i16 = 8;

// Plies searched by the computer player.
pub const SEARCH_DEPTH: u8 = 3;
