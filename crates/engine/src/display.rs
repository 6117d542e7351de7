//! Display collaborator.

use anyhow::Result;

use crate::term::{FrameBuffer, TerminalRenderer, Viewport};

/// The visible surface the presenter blits to.
pub trait Display {
    /// Surface size in cells.
    fn viewport(&self) -> Viewport;

    /// Copy the back buffer to the visible surface in one operation.
    ///
    /// Implementations may swap contents with `back`; callers redraw it fully
    /// every frame.
    fn blit(&mut self, back: &mut FrameBuffer) -> Result<()>;

    fn set_pointer_visible(&mut self, visible: bool) -> Result<()>;

    /// Latest pointer cell, for surfaces that draw their own pointer.
    ///
    /// Called every tick while the game is over, whether or not a frame is
    /// blitted.
    fn track_pointer(&mut self, _col: u16, _row: u16) -> Result<()> {
        Ok(())
    }
}

impl<D: Display + ?Sized> Display for &mut D {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn blit(&mut self, back: &mut FrameBuffer) -> Result<()> {
        (**self).blit(back)
    }

    fn set_pointer_visible(&mut self, visible: bool) -> Result<()> {
        (**self).set_pointer_visible(visible)
    }

    fn track_pointer(&mut self, col: u16, row: u16) -> Result<()> {
        (**self).track_pointer(col, row)
    }
}

impl Display for TerminalRenderer {
    fn viewport(&self) -> Viewport {
        let (w, h) = self.size();
        Viewport::new(w, h)
    }

    fn blit(&mut self, back: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(back)
    }

    fn set_pointer_visible(&mut self, visible: bool) -> Result<()> {
        TerminalRenderer::set_pointer_visible(self, visible)
    }

    fn track_pointer(&mut self, col: u16, row: u16) -> Result<()> {
        self.park_pointer(col, row)
    }
}

/// In-memory display: keeps the last blitted frame.
///
/// Used by tests and benches to run the loop without a terminal.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    viewport: Viewport,
    front: FrameBuffer,
    frames: u64,
    pointer_visible: bool,
    pointer_toggles: Vec<bool>,
    pointer_cell: Option<(u16, u16)>,
}

impl HeadlessDisplay {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            front: FrameBuffer::new(viewport.width, viewport.height),
            frames: 0,
            pointer_visible: true,
            pointer_toggles: Vec::new(),
            pointer_cell: None,
        }
    }

    pub fn front(&self) -> &FrameBuffer {
        &self.front
    }

    /// Number of blits so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pointer_visible(&self) -> bool {
        self.pointer_visible
    }

    /// Every visibility change, in order.
    pub fn pointer_toggles(&self) -> &[bool] {
        &self.pointer_toggles
    }

    /// Last tracked pointer cell.
    pub fn pointer_cell(&self) -> Option<(u16, u16)> {
        self.pointer_cell
    }
}

impl Display for HeadlessDisplay {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn blit(&mut self, back: &mut FrameBuffer) -> Result<()> {
        std::mem::swap(&mut self.front, back);
        self.frames += 1;
        Ok(())
    }

    fn set_pointer_visible(&mut self, visible: bool) -> Result<()> {
        if self.pointer_visible != visible {
            self.pointer_visible = visible;
            self.pointer_toggles.push(visible);
        }
        Ok(())
    }

    fn track_pointer(&mut self, col: u16, row: u16) -> Result<()> {
        self.pointer_cell = Some((col, row));
        Ok(())
    }
}
