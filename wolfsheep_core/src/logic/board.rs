use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: u8 = 8;
pub const SHEEP_COUNT: usize = 4;

/// The four diagonal steps, in the order the wolf's neighbours are enumerated.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Sheep only ever move towards higher `y`.
pub const SHEEP_STEPS: [(i8, i8); 2] = [(-1, 1), (1, 1)];

pub const INITIAL_WOLF: Position = Position { x: 4, y: 7 };
pub const INITIAL_SHEEP: [Position; SHEEP_COUNT] = [
    Position { x: 1, y: 0 },
    Position { x: 3, y: 0 },
    Position { x: 5, y: 0 },
    Position { x: 7, y: 0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Wolf,
    Sheep,
}

impl Role {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Wolf => Self::Sheep,
            Self::Sheep => Self::Wolf,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wolf => write!(f, "wolf"),
            Self::Sheep => write!(f, "sheep"),
        }
    }
}

/// A square on the 8x8 board. `y = 0` is the sheep's starting row and the
/// wolf's escape row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// The square `(dx, dy)` away, or `None` if it falls off the board.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = i16::from(self.x) + i16::from(dx);
        let y = i16::from(self.y) + i16::from(dy);
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        Self::new(x, y)
    }

    /// Signed `(dx, dy)` from `self` to `other`.
    #[must_use]
    pub fn delta(self, other: Self) -> (i16, i16) {
        (
            i16::from(other.x) - i16::from(self.x),
            i16::from(other.y) - i16::from(self.y),
        )
    }

    /// Chebyshev distance, i.e. the number of king steps between two squares.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub position: Position,
}
