//! Terminal output module.
//!
//! Flushes a glyph framebuffer to a real terminal and answers how big that
//! terminal is. The rasterizer never sees any of this; it only fills a
//! buffer.

pub mod renderer;
pub mod size;

pub use donut_core as core;
pub use donut_types as types;

pub use renderer::{encode_frame_into, TerminalRenderer};
pub use size::{terminal_dimensions, Dimensions};
