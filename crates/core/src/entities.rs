//! Ball and paddle value types.

use crate::types::{Arena, BALL_DIAMETER, BALL_START_SPEED, PADDLE_HEIGHT, PADDLE_WIDTH};

/// The ball: top-left corner of its bounding box plus a per-tick velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    pub const fn new(x: i32, y: i32, vx: i32, vy: i32) -> Self {
        Self { x, y, vx, vy }
    }

    /// Ball at the arena center moving down-right at the starting speed.
    pub fn spawn(arena: Arena) -> Self {
        let (x, y) = arena.center();
        Self::new(x, y, BALL_START_SPEED, BALL_START_SPEED)
    }

    pub fn diameter(&self) -> i32 {
        BALL_DIAMETER
    }

    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Grow the speed magnitude by one on each axis, keeping direction.
    pub fn speed_up(&mut self) {
        self.vx += away_from_zero(self.vx);
        self.vy += away_from_zero(self.vy);
    }
}

// A zero component counts as negative.
fn away_from_zero(v: i32) -> i32 {
    if v > 0 {
        1
    } else {
        -1
    }
}

/// The paddle. Only `x` moves; `y` is pinned to the arena's paddle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
}

impl Paddle {
    /// Paddle centered horizontally on the paddle row.
    pub fn centered(arena: Arena) -> Self {
        Self {
            x: arena.max_paddle_x() / 2,
            y: arena.paddle_y(),
        }
    }

    pub fn width(&self) -> i32 {
        PADDLE_WIDTH
    }

    pub fn height(&self) -> i32 {
        PADDLE_HEIGHT
    }

    pub fn right(&self) -> i32 {
        self.x + PADDLE_WIDTH
    }
}
