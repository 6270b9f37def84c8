//! Glyph/depth framebuffer the rasterizer draws into.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::BACKGROUND_GLYPH;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("failed to allocate a {width}x{height} frame buffer")]
    Allocation {
        width: u16,
        height: u16,
        #[source]
        source: TryReserveError,
    },
}

/// A single terminal cell plus the depth of whatever sample owns it.
///
/// `depth` is an inverse-distance proxy: larger means closer to the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCell {
    pub glyph: char,
    pub depth: f32,
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self {
            glyph: BACKGROUND_GLYPH,
            depth: 0.0,
        }
    }
}

/// Fixed-size grid of [`ScreenCell`], row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<ScreenCell>,
}

impl FrameBuffer {
    /// Allocate a cleared buffer.
    ///
    /// The allocation is fallible so a terminal too large to back with memory
    /// is reported instead of aborting the process.
    pub fn try_new(width: u16, height: u16) -> Result<Self, BufferError> {
        let len = (width as usize) * (height as usize);
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|source| BufferError::Allocation {
                width,
                height,
                source,
            })?;
        cells.resize(len, ScreenCell::default());
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[ScreenCell] {
        &self.cells
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ScreenCell]> {
        // chunks_exact panics on 0; an empty buffer has no rows either way.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<ScreenCell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Reset every cell to the background glyph at depth zero.
    pub fn clear(&mut self) {
        self.cells.fill(ScreenCell::default());
    }

    /// Write one projected sample.
    ///
    /// Samples outside the grid are dropped. Inside, the sample wins only if
    /// `depth` is strictly greater than the stored one, so ties keep the first
    /// writer. Returns whether the cell changed.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, depth: f32, glyph: char) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if depth > cell.depth {
            cell.depth = depth;
            cell.glyph = glyph;
            true
        } else {
            false
        }
    }
}
