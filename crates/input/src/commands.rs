//! Click resolution: turns a click into a state-machine command.

use crate::core::GameSnapshot;
use crate::types::{CellScale, Command, QUIT_PROMPT_OFFSET_Y, QUIT_PROMPT_TEXT};

/// Decide what a click at a cell means for the current snapshot.
///
/// While Playing clicks do nothing. While GameOver a click on the
/// "Click to Quit" text quits; any other click resets when the reset prompt is
/// showing, otherwise quits when the quit prompt is showing.
pub fn resolve_click(snap: &GameSnapshot, scale: CellScale, col: u16, row: u16) -> Option<Command> {
    if snap.playable() {
        return None;
    }
    if snap.show_quit_prompt && on_quit_prompt(snap, scale, col, row) {
        return Some(Command::Quit);
    }
    if snap.show_reset_prompt {
        Some(Command::Reset)
    } else if snap.show_quit_prompt {
        Some(Command::Quit)
    } else {
        None
    }
}

/// Whether the cell is one of those the quit prompt is drawn on.
pub fn on_quit_prompt(snap: &GameSnapshot, scale: CellScale, col: u16, row: u16) -> bool {
    let (first, last) = scale.overlay_span(snap.arena, QUIT_PROMPT_TEXT);
    scale.overlay_row(snap.arena, QUIT_PROMPT_OFFSET_Y) == row as i32
        && (first..=last).contains(&(col as i32))
}
