//! Animation engine.
//!
//! Owns the frame buffer and the orientation, drives the rasterizer once per
//! frame and hands the result to a [`Display`]. Timing goes through a
//! [`Pacer`] and stopping through a [`CancelToken`], so tests can run a
//! bounded number of frames without a terminal or real sleeps.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use anyhow::Result;
//! use donut_core::FrameBuffer;
//! use donut_engine::{AnimationConfig, AnimationLoop, CancelToken, Display};
//!
//! struct Discard;
//! impl Display for Discard {
//!     fn present(&mut self, _fb: &FrameBuffer) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let config = AnimationConfig { max_frames: Some(3), ..AnimationConfig::default() };
//! let mut anim = AnimationLoop::new(config, 4, 80, 24).unwrap();
//! let mut no_wait = |_: Duration| -> Result<()> { Ok(()) };
//! let frames = anim.run(&mut Discard, &mut no_wait, &CancelToken::new()).unwrap();
//! assert_eq!(frames, 3);
//! ```

pub mod animation;
pub mod config;

pub use donut_core as core;
pub use donut_types as types;

pub use animation::{AnimationLoop, CancelToken, Display, Pacer, SleepPacer};
pub use config::AnimationConfig;
