//! The frame loop: render, present, advance, wait.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use donut_core::{render_with, BufferError, FrameBuffer};

use crate::config::AnimationConfig;
use crate::types::Orientation;

/// Where finished frames go.
pub trait Display {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

/// Waits out the gap between two frames.
pub trait Pacer {
    fn wait(&mut self, interval: Duration) -> Result<()>;
}

impl<F> Pacer for F
where
    F: FnMut(Duration) -> Result<()>,
{
    fn wait(&mut self, interval: Duration) -> Result<()> {
        self(interval)
    }
}

/// Blocking sleep for the whole interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, interval: Duration) -> Result<()> {
        thread::sleep(interval);
        Ok(())
    }
}

/// Cloneable stop flag checked once per frame.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns the frame buffer and the orientation for the life of the process.
pub struct AnimationLoop {
    config: AnimationConfig,
    size: u32,
    orientation: Orientation,
    fb: FrameBuffer,
    frames: u64,
}

impl AnimationLoop {
    /// Allocate the frame buffer once, sized `width` x `height`.
    pub fn new(
        config: AnimationConfig,
        size: u32,
        width: u16,
        height: u16,
    ) -> Result<Self, BufferError> {
        let fb = FrameBuffer::try_new(width, height)?;
        Ok(Self {
            config,
            size,
            orientation: Orientation::default(),
            fb,
            frames: 0,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Render and present one frame, then advance the orientation.
    pub fn step<D: Display + ?Sized>(&mut self, display: &mut D) -> Result<()> {
        let Orientation { a, b } = self.orientation;
        render_with(&self.config.render, a, b, self.size, &mut self.fb);
        display.present(&self.fb)?;
        self.orientation.advance(self.config.speed_a, self.config.speed_b);
        self.frames += 1;
        Ok(())
    }

    /// Run until `cancel` fires or `max_frames` is reached.
    ///
    /// Returns the number of frames presented by this call.
    pub fn run<D, P>(
        &mut self,
        display: &mut D,
        pacer: &mut P,
        cancel: &CancelToken,
    ) -> Result<u64>
    where
        D: Display + ?Sized,
        P: Pacer + ?Sized,
    {
        let start = self.frames;
        log::info!(
            "animating {}x{} size={} every {:?}",
            self.fb.width(),
            self.fb.height(),
            self.size,
            self.config.frame_interval
        );

        while !cancel.is_cancelled() && !self.reached_limit() {
            self.step(display)?;
            pacer.wait(self.config.frame_interval)?;
        }

        let ran = self.frames - start;
        log::info!("stopped after {} frames", ran);
        Ok(ran)
    }

    fn reached_limit(&self) -> bool {
        match self.config.max_frames {
            Some(max) => self.frames >= max,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Count(u32);

    impl Display for Count {
        fn present(&mut self, _fb: &FrameBuffer) -> Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    #[test]
    fn step_advances_once() {
        let mut anim = AnimationLoop::new(AnimationConfig::default(), 3, 40, 12).unwrap();
        let mut d = Count::default();
        anim.step(&mut d).unwrap();
        assert_eq!(d.0, 1);
        assert_eq!(anim.frames(), 1);
        assert_eq!(anim.orientation(), Orientation::new(0.04, 0.02));
    }

    #[test]
    fn run_honours_max_frames() {
        let config = AnimationConfig {
            max_frames: Some(5),
            frame_interval: Duration::ZERO,
            ..AnimationConfig::default()
        };
        let mut anim = AnimationLoop::new(config, 3, 40, 12).unwrap();
        let mut d = Count::default();
        let ran = anim
            .run(&mut d, &mut SleepPacer, &CancelToken::new())
            .unwrap();
        assert_eq!(ran, 5);
        assert_eq!(d.0, 5);
    }

    #[test]
    fn cancelled_token_runs_nothing() {
        let mut anim = AnimationLoop::new(AnimationConfig::default(), 3, 40, 12).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let ran = anim
            .run(&mut Count::default(), &mut SleepPacer, &cancel)
            .unwrap();
        assert_eq!(ran, 0);
    }

    #[test]
    fn token_clones_share_state() {
        let a = CancelToken::new();
        let b = a.clone();
        b.cancel();
        assert!(a.is_cancelled());
    }
}
