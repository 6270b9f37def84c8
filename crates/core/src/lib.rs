//! Core rendering module - pure, deterministic, and testable
//!
//! This crate turns an orientation into a frame of ASCII glyphs. It has
//! **zero dependencies** on terminals or timing, which keeps it:
//!
//! - **Deterministic**: identical inputs produce identical frames
//! - **Testable**: every property can be checked against a plain buffer
//! - **Fast**: rendering reuses the caller's buffer and never allocates
//!
//! # Module Structure
//!
//! - [`fb`]: glyph/depth framebuffer with a bounds-checked, depth-tested write path
//! - [`raster`]: parametric torus sweep, rotation, projection and shading
//! - [`config`]: sampling and projection tuning
//!
//! # Example
//!
//! ```
//! use donut_core::{render, FrameBuffer};
//! use donut_types::BACKGROUND_GLYPH;
//!
//! let mut fb = FrameBuffer::try_new(80, 24).unwrap();
//! render(0.0, 0.0, 3, &mut fb);
//!
//! assert!(fb.cells().iter().any(|c| c.glyph != BACKGROUND_GLYPH));
//! ```

pub mod config;
pub mod fb;
pub mod raster;

pub use donut_types as types;

pub use config::RenderConfig;
pub use fb::{BufferError, FrameBuffer, ScreenCell};
pub use raster::{render, render_with};
