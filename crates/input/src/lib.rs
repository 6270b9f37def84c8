//! Terminal input module.
//!
//! Maps `crossterm` key events to the quit request, paces frames while
//! listening for it, and reads the torus size at startup.

pub mod map;
pub mod poll;
pub mod prompt;

pub use donut_types as types;

pub use map::should_quit;
pub use poll::wait_for_quit;
pub use prompt::{parse_torus_size, read_torus_size, PROMPT};
