//! The simulation thread's loop body.

use std::ops::ControlFlow;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::core::{GameState, TickInput};
use crate::display::Display;
use crate::driver::TickDriver;
use crate::input::{drain_inbox, resolve_click, InputMsg, SharedPointer};
use crate::presenter::Presenter;
use crate::term::GameView;
use crate::types::{Arena, CellScale, Command, CoreEvent};

/// Owns the game state and the display; consumes input handed over by the
/// input thread.
pub struct GameLoop<D: Display> {
    state: GameState,
    presenter: Presenter,
    display: D,
    pointer: Arc<SharedPointer>,
    inbox: Receiver<InputMsg>,
    scale: CellScale,
    clock_ms: u64,
}

impl<D: Display> GameLoop<D> {
    pub fn new(
        arena: Arena,
        scale: CellScale,
        display: D,
        pointer: Arc<SharedPointer>,
        inbox: Receiver<InputMsg>,
    ) -> Self {
        Self {
            state: GameState::new(arena),
            presenter: Presenter::new(GameView::new(scale)),
            display,
            pointer,
            inbox,
            scale,
            clock_ms: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Show the first frame; the pointer stays hidden unless the round is over.
    pub fn start(&mut self) -> Result<()> {
        let arena = self.state.arena();
        log::info!(
            "arena {}x{} px, viewport {:?}",
            arena.width,
            arena.height,
            self.display.viewport()
        );
        self.display
            .set_pointer_visible(self.state.status().is_over())?;
        self.presenter.invalidate();
        self.presenter
            .present(&self.state.snapshot(), self.clock_ms, &mut self.display)?;
        Ok(())
    }

    /// Run one tick: commands, simulation, presentation.
    ///
    /// Breaks on quit. A tick that applied a reset presents the fresh round
    /// without advancing it.
    pub fn step(&mut self, elapsed: Duration) -> Result<ControlFlow<()>> {
        self.clock_ms = self.clock_ms.saturating_add(elapsed.as_millis() as u64);

        let mut was_reset = false;
        for msg in drain_inbox(&self.inbox) {
            let command = match msg {
                InputMsg::Click { col, row } => {
                    resolve_click(&self.state.snapshot(), self.scale, col, row)
                }
                InputMsg::Quit => Some(Command::Quit),
                InputMsg::Closed => {
                    log::warn!("input closed, leaving");
                    Some(Command::Quit)
                }
            };
            match command {
                Some(Command::Reset) => {
                    self.reset()?;
                    was_reset = true;
                }
                Some(Command::Quit) => {
                    log::info!("quit at score {}", self.state.score());
                    return Ok(ControlFlow::Break(()));
                }
                None => {}
            }
        }

        if !was_reset {
            let input = TickInput {
                paddle_x: self.pointer.paddle_x(),
                elapsed_ms: elapsed.as_millis().min(u32::MAX as u128) as u32,
            };
            match self.state.tick(input) {
                Some(CoreEvent::PaddleHit { score }) => log::debug!("paddle hit, score {}", score),
                Some(CoreEvent::BallLost { score }) => {
                    log::info!("ball lost, final score {}", score);
                    self.display.set_pointer_visible(true)?;
                }
                None => {}
            }
        }

        if self.state.status().is_over() {
            let (col, row) = self.pointer.cell();
            self.display.track_pointer(col, row)?;
        }

        self.presenter
            .present(&self.state.snapshot(), self.clock_ms, &mut self.display)?;
        Ok(ControlFlow::Continue(()))
    }

    /// Start, then step under `driver` until quit.
    pub fn run<T: TickDriver + ?Sized>(&mut self, driver: &mut T) -> Result<()> {
        self.start()?;
        driver.drive(&mut |elapsed| self.step(elapsed))
    }

    fn reset(&mut self) -> Result<()> {
        self.state.reset();
        log::info!("reset, round {}", self.state.episode_id());
        self.display.set_pointer_visible(false)?;
        self.presenter.invalidate();
        Ok(())
    }
}
