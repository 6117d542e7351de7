//! Presenter: off-screen render followed by a single blit.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::display::Display;
use crate::term::{FrameBuffer, GameView, RenderThrottle};

/// Keep-alive redraw interval while the picture is static.
const STATIC_REDRAW_MS: u64 = 250;

/// Draws snapshots. Holds no game data, only the reusable back buffer.
#[derive(Debug)]
pub struct Presenter {
    view: GameView,
    back: Option<FrameBuffer>,
    throttle: RenderThrottle,
}

impl Presenter {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            back: None,
            throttle: RenderThrottle::new(STATIC_REDRAW_MS),
        }
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Make the next `present` draw unconditionally.
    pub fn invalidate(&mut self) {
        self.throttle.invalidate();
    }

    /// Render `snap` into the back buffer and blit it.
    ///
    /// Skips unchanged frames while the game is over. Returns whether a frame
    /// was blitted.
    pub fn present<D: Display + ?Sized>(
        &mut self,
        snap: &GameSnapshot,
        now_ms: u64,
        display: &mut D,
    ) -> Result<bool> {
        if !self
            .throttle
            .should_render(now_ms, snap.fingerprint(), !snap.playable())
        {
            return Ok(false);
        }

        let vp = self.view.viewport_for(snap.arena);
        let back = self
            .back
            .get_or_insert_with(|| FrameBuffer::new(vp.width, vp.height));
        self.view.render_into(snap, back);
        display.blit(back)?;
        Ok(true)
    }
}
