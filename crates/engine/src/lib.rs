//! Engine module - drives the simulation, input and presentation
//!
//! Everything here is backend-agnostic except the [`Display`] impl for the
//! terminal renderer. The loop itself is a plain function of "one tick":
//! [`GameLoop::step`]. Real time only enters through a [`TickDriver`], so the
//! whole loop can be exercised in tests with [`SteppedDriver`] and a
//! [`HeadlessDisplay`].
//!
//! # Per-tick order
//!
//! 1. Drain queued clicks/keys and apply the resulting commands
//! 2. Read the latest paddle x and advance the simulation
//! 3. Hand the snapshot to the presenter (off-screen render + blit)

pub mod config;
pub mod display;
pub mod driver;
pub mod game_loop;
pub mod presenter;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub use config::GameConfig;
pub use display::{Display, HeadlessDisplay};
pub use driver::{FixedRateDriver, SteppedDriver, TickDriver};
pub use game_loop::GameLoop;
pub use presenter::Presenter;
