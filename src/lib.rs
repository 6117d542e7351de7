//! TUI Pong (workspace facade crate).
//!
//! Re-exports the `tui_pong::{core,engine,input,term,types}` public API; the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_pong_core as core;
pub use tui_pong_engine as engine;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
