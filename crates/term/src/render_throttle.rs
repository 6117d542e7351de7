/// Frame gate for the presenter.
///
/// While the ball is moving every tick is drawn. Once the picture is static
/// (game over) frames are only drawn when the snapshot fingerprint changes, or
/// at most once per `min_static_interval_ms` as a keep-alive.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Forget the last frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// - When `is_static=false`: always render (no throttling).
    /// - When `is_static=true`: render immediately on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = !self.has_rendered
            || !is_static
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if render {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_forces_next_frame() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7, true));
        assert!(!t.should_render(5, 7, true));
        t.invalidate();
        assert!(t.should_render(6, 7, true));
        assert!(!t.should_render(7, 7, true));
    }
}
