//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation: ball and paddle state, collision
//! resolution and the Playing/GameOver state machine. It has **zero
//! dependencies** on terminal, input, or timing code, making it:
//!
//! - **Deterministic**: integer physics, same inputs produce identical rounds
//! - **Testable**: feed a sequence of ticks and assert the resulting snapshots
//! - **Portable**: runs under any driver (fixed-rate thread, stepped test driver)
//!
//! # Module Structure
//!
//! - [`entities`]: ball and paddle value types
//! - [`collision`]: wall, paddle and loss predicates
//! - [`game_state`]: the single state value advanced by [`GameState::tick`]
//! - [`snapshot`]: copyable view consumed by the renderer and input adapter
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{GameState, TickInput};
//! use tui_pong_core::types::{Arena, GameStatus};
//!
//! let mut game = GameState::new(Arena::new(800, 600));
//! game.tick(TickInput::new(350));
//!
//! let snap = game.snapshot();
//! assert_eq!((snap.ball.x, snap.ball.y), (403, 303));
//! assert_eq!(snap.status, GameStatus::Playing);
//! ```
//!
//! # Timing
//!
//! Each tick moves the ball by its velocity in pixels. The elapsed time carried
//! by [`TickInput`] is informational only: there is no delta-time scaling, so a
//! slow tick simply makes the game run slower.

pub mod collision;
pub mod entities;
pub mod game_state;
pub mod snapshot;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use entities::{Ball, Paddle};
pub use game_state::{GameState, TickInput};
pub use snapshot::GameSnapshot;
