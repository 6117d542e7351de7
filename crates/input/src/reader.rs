//! Input thread: blocks on terminal events and hands them to the game loop.
//!
//! Pointer motion is published immediately through [`SharedPointer`]; clicks and
//! quit keys are queued as [`InputMsg`] and consumed at the top of the next tick.

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::{handle_event, InputEvent};
use crate::pointer::SharedPointer;
use crate::types::{Arena, CellScale};

/// Upper bound on messages consumed per tick; the rest wait for the next tick.
pub const MAX_MSGS_PER_TICK: usize = 16;

/// Message queued for the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMsg {
    Click { col: u16, row: u16 },
    Quit,
    /// The reader stopped; no further input will arrive.
    Closed,
}

/// Spawn the input thread.
pub fn spawn_event_reader(
    pointer: Arc<SharedPointer>,
    arena: Arena,
    scale: CellScale,
    tx: Sender<InputMsg>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            let ev = match event::read() {
                Ok(ev) => ev,
                Err(e) => {
                    log::warn!("input reader stopped: {}", e);
                    let _ = tx.send(InputMsg::Closed);
                    return;
                }
            };
            if let Some(input) = handle_event(&ev) {
                if !dispatch(input, &pointer, arena, scale, &tx) {
                    return;
                }
            }
        })
}

/// Route one input event. Returns `false` once the game loop is gone.
pub fn dispatch(
    input: InputEvent,
    pointer: &SharedPointer,
    arena: Arena,
    scale: CellScale,
    tx: &Sender<InputMsg>,
) -> bool {
    match input {
        InputEvent::PointerMoved { col, row } => {
            pointer.track(col, row, arena, scale);
            true
        }
        InputEvent::Click { col, row } => {
            pointer.track(col, row, arena, scale);
            tx.send(InputMsg::Click { col, row }).is_ok()
        }
        InputEvent::Quit => tx.send(InputMsg::Quit).is_ok(),
    }
}

/// Take up to [`MAX_MSGS_PER_TICK`] queued messages without blocking.
///
/// A disconnected channel shows up as a trailing [`InputMsg::Closed`].
pub fn drain_inbox(rx: &Receiver<InputMsg>) -> ArrayVec<InputMsg, MAX_MSGS_PER_TICK> {
    let mut out = ArrayVec::new();
    while !out.is_full() {
        match rx.try_recv() {
            Ok(msg) => out.push(msg),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                out.push(InputMsg::Closed);
                break;
            }
        }
    }
    out
}
