//! Tick drivers: the only place real time enters the loop.

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

/// One tick of work; `elapsed` is the time since the previous tick started.
pub type Step<'a> = dyn FnMut(Duration) -> Result<ControlFlow<()>> + 'a;

/// Calls a step function once per tick until it breaks or fails.
pub trait TickDriver {
    fn drive(&mut self, step: &mut Step<'_>) -> Result<()>;
}

/// Fixed-period driver running on the current thread.
///
/// Sleeps out the rest of each period. A tick that overruns is not
/// compensated: the next one starts immediately and no ticks are replayed.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateDriver {
    period: Duration,
}

impl FixedRateDriver {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_micros(1_000_000 / hz.max(1) as u64))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickDriver for FixedRateDriver {
    fn drive(&mut self, step: &mut Step<'_>) -> Result<()> {
        let mut last = Instant::now();
        loop {
            let start = Instant::now();
            let elapsed = start.duration_since(last);
            last = start;

            if step(elapsed)?.is_break() {
                return Ok(());
            }

            if let Some(rest) = self.period.checked_sub(start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

/// Deterministic driver: runs at most `ticks` ticks back to back, reporting
/// a fixed elapsed time and never sleeping.
#[derive(Debug, Clone, Copy)]
pub struct SteppedDriver {
    remaining: u64,
    period: Duration,
    ran: u64,
}

impl SteppedDriver {
    pub fn new(ticks: u64, period: Duration) -> Self {
        Self {
            remaining: ticks,
            period,
            ran: 0,
        }
    }

    /// Ticks executed so far.
    pub fn ran(&self) -> u64 {
        self.ran
    }
}

impl TickDriver for SteppedDriver {
    fn drive(&mut self, step: &mut Step<'_>) -> Result<()> {
        while self.remaining > 0 {
            self.remaining -= 1;
            self.ran += 1;
            if step(self.period)?.is_break() {
                break;
            }
        }
        Ok(())
    }
}
