//! Input diagnostic: echoes mapped mouse and key events.
//!
//! Useful for checking which mouse reports a terminal emits before playing.
//! Press `q` (or `Esc`/`Ctrl-C`) to leave.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::execute;

use tui_pong::input::{handle_event, paddle_x_for_pointer, InputEvent};
use tui_pong::types::CellScale;

fn main() -> Result<()> {
    let scale = CellScale::default();
    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    let arena = scale.arena_for(cols, rows);

    enable_raw_mode()?;
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = echo(arena, scale);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    let _ = disable_raw_mode();
    result
}

fn echo(arena: tui_pong::types::Arena, scale: CellScale) -> Result<()> {
    let mut out = io::stdout();
    write!(
        out,
        "arena {}x{} px ({}x{} cells); move, click, q to quit\r\n",
        arena.width, arena.height, scale.cell_w, scale.cell_h
    )?;
    out.flush()?;

    loop {
        let ev = event::read()?;
        match handle_event(&ev) {
            Some(InputEvent::PointerMoved { col, row }) => {
                let x = paddle_x_for_pointer(scale.col_to_px(col), arena);
                write!(out, "move  col={:<4} row={:<4} paddle_x={}\r\n", col, row, x)?;
            }
            Some(InputEvent::Click { col, row }) => {
                write!(out, "click col={:<4} row={:<4}\r\n", col, row)?;
            }
            Some(InputEvent::Quit) => return Ok(()),
            None => write!(out, "      {:?}\r\n", ev)?,
        }
        out.flush()?;
    }
}
