#![forbid(unsafe_code)]

//! Half-block terminal renderer.
//!
//! Treats the terminal as a pixel grid twice as tall as its cell grid: the
//! upper half of each cell is painted with the foreground color of a `▀`
//! glyph and the lower half with its background color. Orbs composite onto
//! the grid with a fixed alpha, so overlapping orbs blend instead of
//! occluding each other.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};

use orbfx_core::{CircleSurface, PackedRgb};

const HALF_BLOCK: char = '▀';

/// Backdrop color behind the orbs, as linear f64 channels.
const BACKDROP: [f64; 3] = [13.0, 10.0, 32.0];

/// A software pixel buffer that composites circles and flushes to the
/// terminal as half-block cells.
#[derive(Debug)]
pub struct HalfBlockSurface {
    cols: u16,
    rows: u16,
    /// Pixel buffer, row-major, `cols` wide and `rows * 2` tall.
    pixels: Vec<[f64; 3]>,
    alpha: f64,
}

impl HalfBlockSurface {
    /// Create a surface for a terminal of `cols` x `rows` cells.
    #[must_use]
    pub fn new(cols: u16, rows: u16, alpha: f64) -> Self {
        let mut surface = Self {
            cols,
            rows,
            pixels: Vec::new(),
            alpha,
        };
        surface.reset_pixels();
        surface
    }

    /// Pixel grid width. Matches the field viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.cols)
    }

    /// Pixel grid height. Twice the cell rows, matches the field viewport
    /// height.
    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.rows) * 2.0
    }

    /// Reallocate for a new terminal size. Contents reset to the backdrop.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.reset_pixels();
    }

    fn reset_pixels(&mut self) {
        let len = usize::from(self.cols) * usize::from(self.rows) * 2;
        self.pixels.clear();
        self.pixels.resize(len, BACKDROP);
    }

    fn pixel_at(&self, x: usize, y: usize) -> [f64; 3] {
        self.pixels[y * usize::from(self.cols) + x]
    }

    /// Write the current pixel buffer to `out` as half-block cells. Does not
    /// flush the writer; callers batch a frame and flush once.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Ok(());
        }
        for row in 0..self.rows {
            queue!(out, MoveTo(0, row))?;
            for col in 0..self.cols {
                let top = self.pixel_at(usize::from(col), usize::from(row) * 2);
                let bottom = self.pixel_at(usize::from(col), usize::from(row) * 2 + 1);
                queue!(
                    out,
                    SetForegroundColor(to_color(top)),
                    SetBackgroundColor(to_color(bottom)),
                    Print(HALF_BLOCK)
                )?;
            }
        }
        Ok(())
    }
}

impl CircleSurface for HalfBlockSurface {
    fn clear(&mut self) {
        self.pixels.fill(BACKDROP);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: PackedRgb) {
        if radius <= 0.0 || self.cols == 0 || self.rows == 0 {
            return;
        }
        let width = usize::from(self.cols);
        let height = usize::from(self.rows) * 2;
        // Clip in f64: casting a negative bound to usize would saturate to 0
        // and sneak past the lo/hi comparison.
        let x_lo_f = (x - radius).floor().max(0.0);
        let x_hi_f = (x + radius).ceil().min(width as f64 - 1.0);
        let y_lo_f = (y - radius).floor().max(0.0);
        let y_hi_f = (y + radius).ceil().min(height as f64 - 1.0);
        if x_lo_f > x_hi_f || y_lo_f > y_hi_f {
            return;
        }
        let (x_lo, x_hi) = (x_lo_f as usize, x_hi_f as usize);
        let (y_lo, y_hi) = (y_lo_f as usize, y_hi_f as usize);

        let src = [
            f64::from(fill.r()),
            f64::from(fill.g()),
            f64::from(fill.b()),
        ];
        let r2 = radius * radius;
        for py in y_lo..=y_hi {
            for px in x_lo..=x_hi {
                let dx = px as f64 + 0.5 - x;
                let dy = py as f64 + 0.5 - y;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let dst = &mut self.pixels[py * width + px];
                for c in 0..3 {
                    dst[c] = dst[c] * (1.0 - self.alpha) + src[c] * self.alpha;
                }
            }
        }
    }
}

fn to_color(px: [f64; 3]) -> Color {
    Color::Rgb {
        r: px[0].round().clamp(0.0, 255.0) as u8,
        g: px[1].round().clamp(0.0, 255.0) as u8,
        b: px[2].round().clamp(0.0, 255.0) as u8,
    }
}
