//! ASCII donut (workspace facade crate).
//!
//! Exposes `ascii_donut::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use donut_core as core;
pub use donut_engine as engine;
pub use donut_input as input;
pub use donut_term as term;
pub use donut_types as types;
