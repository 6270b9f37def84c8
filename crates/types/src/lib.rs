//! Shared constants and small value types.
//!
//! Everything here is plain data with no dependencies, so the rasterizer,
//! the animation loop and the terminal layer can all agree on the same
//! tuning without depending on each other.
//!
//! # Surface sampling
//!
//! The torus is swept over two parametric angles, each in `[0, 2π)`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `THETA_STEP` | 0.07 | Step around the tube cross-section |
//! | `PHI_STEP` | 0.02 | Step around the ring (~3.5x denser) |
//! | `CAMERA_DISTANCE` | 5.0 | Keeps the torus in front of the viewer |
//! | `LUMINANCE_SCALE` | 8.0 | Scales the normal/light dot product |
//!
//! # Animation timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 30 | Pause between frames |
//! | `SPEED_A` | 0.04 | Angle `a` increment per frame (radians) |
//! | `SPEED_B` | 0.02 | Angle `b` increment per frame (radians) |
//!
//! # Examples
//!
//! ```
//! use donut_types::{luminance_glyph, Orientation, LUMINANCE_RAMP};
//!
//! assert_eq!(luminance_glyph(-3), '.');
//! assert_eq!(luminance_glyph(99), '@');
//! assert_eq!(LUMINANCE_RAMP.len(), 12);
//!
//! let mut o = Orientation::default();
//! o.advance(0.04, 0.02);
//! assert_eq!(o, Orientation::new(0.04, 0.02));
//! ```

/// Glyphs ordered from sparse to dense ink coverage.
pub const LUMINANCE_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Glyph for cells no sample reached this frame.
pub const BACKGROUND_GLYPH: char = ' ';

/// Parametric step around the tube cross-section (radians).
pub const THETA_STEP: f32 = 0.07;

/// Parametric step around the ring (radians).
pub const PHI_STEP: f32 = 0.02;

/// Camera offset added to the depth term.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Multiplier turning the normal/light dot product into a ramp index.
pub const LUMINANCE_SCALE: f32 = 8.0;

/// Horizontal projection scale is `width / SCALE_X_DIVISOR`.
pub const SCALE_X_DIVISOR: f32 = 2.2;

/// Vertical projection scale is `height / SCALE_Y_DIVISOR`.
pub const SCALE_Y_DIVISOR: f32 = 1.1;

/// Torus size used when the user gives nothing usable.
pub const DEFAULT_TORUS_SIZE: u32 = 4;

/// Frame interval in milliseconds (~33 FPS).
pub const FRAME_MS: u64 = 30;

/// Per-frame increment of orientation angle `a` (radians).
pub const SPEED_A: f32 = 0.04;

/// Per-frame increment of orientation angle `b` (radians).
pub const SPEED_B: f32 = 0.02;

/// Terminal size assumed when the real one can't be queried.
pub const FALLBACK_WIDTH: u16 = 80;
pub const FALLBACK_HEIGHT: u16 = 24;

/// Smallest buffer we ever render into.
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// Map a signed intensity to a ramp glyph, clamping on both ends.
#[inline]
pub fn luminance_glyph(index: i32) -> char {
    let last = (LUMINANCE_RAMP.len() - 1) as i32;
    LUMINANCE_RAMP[index.clamp(0, last) as usize]
}

/// Whether `ch` is one of the ramp glyphs.
pub fn is_ramp_glyph(ch: char) -> bool {
    LUMINANCE_RAMP.contains(&ch)
}

/// Rotation state of the torus.
///
/// Both angles grow without bound; trigonometric periodicity does the wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation `a` (radians).
    pub a: f32,
    /// Rotation `b` (radians).
    pub b: f32,
}

impl Orientation {
    pub const fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    pub fn advance(&mut self, da: f32, db: f32) {
        self.a += da;
        self.b += db;
    }
}
