//! Terminal input module (engine-facing).
//!
//! This module is the input adapter: it maps `crossterm` mouse and key events
//! into paddle positions and state-machine commands. It never touches the game
//! state directly. The paddle x is published through [`SharedPointer`] and
//! clicks travel over a channel drained by the game loop once per tick.

pub mod commands;
pub mod map;
pub mod pointer;
pub mod reader;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use commands::{on_quit_prompt, resolve_click};
pub use map::{handle_event, handle_mouse_event, paddle_x_for_pointer, should_quit, InputEvent};
pub use pointer::SharedPointer;
pub use reader::{dispatch, drain_inbox, spawn_event_reader, InputMsg, MAX_MSGS_PER_TICK};
