//! Collision predicates.
//!
//! All tests run on the ball's position *after* it moved this tick. None of
//! them clamp: a ball past a wall stays past it, and can trigger again on the
//! next tick if it has not left the boundary zone yet.

use crate::entities::{Ball, Paddle};
use crate::types::Arena;

/// Ball touches or overlaps the left or right wall.
pub fn hits_side_wall(ball: &Ball, arena: Arena) -> bool {
    ball.x <= 0 || ball.x >= arena.width - ball.diameter()
}

/// Ball touches or overlaps the top wall. There is no bottom wall.
pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.y <= 0
}

/// Ball's bottom edge reached the paddle row while horizontally overlapping
/// the paddle.
///
/// Direction is not checked: a ball moving up through the paddle band also
/// counts.
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let d = ball.diameter();
    ball.y + d >= paddle.y && ball.x + d >= paddle.x && ball.x <= paddle.right()
}

/// Ball fell out through the bottom edge.
pub fn is_lost(ball: &Ball, arena: Arena) -> bool {
    ball.y >= arena.height
}
