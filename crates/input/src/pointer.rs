//! Pointer state shared between the input thread and the game loop.
//!
//! Single writer (input thread), single reader (game loop). Each value is one
//! atomic word, so the loop always sees a consistent paddle x per tick.

use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use crate::map::paddle_x_for_pointer;
use crate::types::{Arena, CellScale};

#[derive(Debug)]
pub struct SharedPointer {
    paddle_x: AtomicI32,
    /// Last pointer cell, packed as `col << 16 | row`.
    cell: AtomicU32,
}

impl SharedPointer {
    pub fn new(paddle_x: i32) -> Self {
        Self {
            paddle_x: AtomicI32::new(paddle_x),
            cell: AtomicU32::new(0),
        }
    }

    pub fn paddle_x(&self) -> i32 {
        self.paddle_x.load(Ordering::Relaxed)
    }

    pub fn cell(&self) -> (u16, u16) {
        let packed = self.cell.load(Ordering::Relaxed);
        ((packed >> 16) as u16, (packed & 0xffff) as u16)
    }

    /// Record a pointer position and publish the paddle x it implies.
    pub fn track(&self, col: u16, row: u16, arena: Arena, scale: CellScale) {
        let x = paddle_x_for_pointer(scale.col_to_px(col), arena);
        self.paddle_x.store(x, Ordering::Relaxed);
        self.cell
            .store(((col as u32) << 16) | row as u32, Ordering::Relaxed);
    }
}
