//! TerminalRenderer: the terminal side of the display.
//!
//! Owns the full-screen session (raw mode, alternate screen, mouse capture)
//! and blits framebuffers to it by diffing against the frame currently shown.
//! Each blit is encoded into one buffer and written with a single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    pointer_visible: bool,
    pointer_cell: Option<(u16, u16)>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            pointer_visible: false,
            pointer_cell: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.pointer_visible = false;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size in cells; 80x24 when it cannot be queried.
    pub fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    /// Show or hide the pointer stand-in (the terminal cursor).
    pub fn set_pointer_visible(&mut self, visible: bool) -> Result<()> {
        if self.pointer_visible == visible {
            return Ok(());
        }
        self.pointer_visible = visible;
        self.buf.clear();
        if visible {
            if let Some((col, row)) = self.pointer_cell {
                self.buf.queue(cursor::MoveTo(col, row))?;
            }
            self.buf.queue(cursor::Show)?;
        } else {
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()
    }

    /// Park the pointer stand-in on a cell.
    ///
    /// A visible cursor moves right away; blits re-park it afterwards.
    pub fn park_pointer(&mut self, col: u16, row: u16) -> Result<()> {
        if self.pointer_cell == Some((col, row)) {
            return Ok(());
        }
        self.pointer_cell = Some((col, row));
        if !self.pointer_visible {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(col, row))?;
        self.flush_buf()
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        if self.pointer_visible {
            if let Some((col, row)) = self.pointer_cell {
                self.buf.queue(cursor::MoveTo(col, row))?;
            }
        }
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if current_style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
