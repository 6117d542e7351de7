//! Framebuffer and style types for terminal rendering.
//!
//! Drawing helpers take signed cell coordinates and clip silently, so shapes
//! that hang off the edge of the arena (a ball leaving through the bottom)
//! need no special casing by callers.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write a string starting at (`x`, `y`). Returns the column after the last char.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) -> i32 {
        let mut cx = x;
        for ch in s.chars() {
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating. Returns the column after it.
    pub fn put_u32(&mut self, x: i32, y: i32, value: u32, style: CellStyle) -> i32 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx += 1;
        }
        cx
    }

    /// Fill the inclusive cell range `[x0, x1] x [y0, y1]`, clipped to the buffer.
    pub fn fill_span(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char, style: CellStyle) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32 - 1);
        let y1 = y1.min(self.height as i32 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put_char(x, y, ch, style);
            }
        }
    }

    /// Dump the characters row by row (tests and debugging).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

/// Number of decimal digits in `value`.
pub fn decimal_width(value: u32) -> i32 {
    let mut n = value / 10;
    let mut w = 1;
    while n > 0 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        let end = fb.put_u32(1, 0, 40213, CellStyle::default());
        assert_eq!(end, 6);
        assert_eq!(fb.to_text(), " 40213      \n");

        let mut fb = FrameBuffer::new(3, 1);
        fb.put_u32(0, 0, 0, CellStyle::default());
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');
    }

    #[test]
    fn drawing_clips_off_buffer() {
        let mut fb = FrameBuffer::new(4, 2);
        let style = CellStyle::default();
        fb.put_str(-2, 0, "abcdef", style);
        fb.fill_span(-5, 1, 1, 9, '#', style);
        assert_eq!(fb.to_text(), "cdef\n##  \n");
    }

    #[test]
    fn decimal_width_counts_digits() {
        assert_eq!(decimal_width(0), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(10), 2);
        assert_eq!(decimal_width(u32::MAX), 10);
    }
}
