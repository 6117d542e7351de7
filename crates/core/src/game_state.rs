//! Game state module - the single value advanced once per tick
//!
//! Ball, paddle, score and the Playing/GameOver state machine live in one
//! [`GameState`]. The game loop threads it through [`GameState::tick`] and
//! [`GameState::reset`]; nothing else mutates it.

use crate::collision::{hits_side_wall, hits_top_wall, is_lost, touches_paddle};
use crate::entities::{Ball, Paddle};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Per-tick input handed over by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    /// Paddle x as last written by the input adapter (already clamped).
    pub paddle_x: i32,
    /// Time since the previous tick. Informational only.
    pub elapsed_ms: u32,
}

impl TickInput {
    pub fn new(paddle_x: i32) -> Self {
        Self {
            paddle_x,
            elapsed_ms: TICK_MS,
        }
    }

    pub fn with_elapsed_ms(mut self, elapsed_ms: u32) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Arena,
    ball: Ball,
    paddle: Paddle,
    score: u32,
    status: GameStatus,
    /// Monotonic round id (increments on reset).
    episode_id: u32,
    /// Ticks simulated in the current round (frozen while GameOver).
    ticks_in_round: u64,
}

impl GameState {
    /// Start a round with the ball at the arena center and the paddle centered.
    pub fn new(arena: Arena) -> Self {
        Self::with_ball(arena, Ball::spawn(arena))
    }

    /// Start a round from an explicit ball position and velocity.
    pub fn with_ball(arena: Arena, ball: Ball) -> Self {
        Self {
            arena,
            ball,
            paddle: Paddle::centered(arena),
            score: 0,
            status: GameStatus::Playing,
            episode_id: 0,
            ticks_in_round: 0,
        }
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn paddle(&self) -> Paddle {
        self.paddle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks_in_round(&self) -> u64 {
        self.ticks_in_round
    }

    pub fn show_reset_prompt(&self) -> bool {
        self.status.is_over()
    }

    pub fn show_quit_prompt(&self) -> bool {
        self.status.is_over()
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// The paddle always follows `input.paddle_x`; physics only runs while
    /// Playing. Returns the paddle hit or ball loss that happened this tick.
    pub fn tick(&mut self, input: TickInput) -> Option<CoreEvent> {
        self.paddle.x = input.paddle_x;

        if self.status != GameStatus::Playing {
            return None;
        }
        self.ticks_in_round += 1;

        let ball = &mut self.ball;
        ball.advance();

        if hits_side_wall(ball, self.arena) {
            ball.vx = -ball.vx;
        }
        if hits_top_wall(ball) {
            ball.vy = -ball.vy;
        }

        let mut event = None;
        if touches_paddle(ball, &self.paddle) {
            ball.vy = -ball.vy;
            // Sit on the paddle so the next tick does not hit again.
            ball.y = self.paddle.y - ball.diameter();
            ball.speed_up();
            self.score += 1;
            event = Some(CoreEvent::PaddleHit { score: self.score });
        }

        if is_lost(ball, self.arena) {
            self.status = GameStatus::GameOver;
            event = Some(CoreEvent::BallLost { score: self.score });
        }

        event
    }

    /// Re-seed ball and score and return to Playing.
    ///
    /// The arena is kept and the paddle stays where the pointer put it.
    pub fn reset(&mut self) {
        self.ball = Ball::spawn(self.arena);
        self.score = 0;
        self.status = GameStatus::Playing;
        self.ticks_in_round = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            arena: self.arena,
            ball: self.ball,
            paddle: self.paddle,
            score: self.score,
            status: self.status,
            show_reset_prompt: self.show_reset_prompt(),
            show_quit_prompt: self.show_quit_prompt(),
            episode_id: self.episode_id,
        }
    }
}
