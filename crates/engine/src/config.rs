//! Animation configuration, read from the environment.

use std::str::FromStr;
use std::time::Duration;

use donut_core::RenderConfig;

use crate::types::{FRAME_MS, MIN_HEIGHT, MIN_WIDTH, SPEED_A, SPEED_B};

/// Everything tunable about a run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Pause between frames.
    pub frame_interval: Duration,
    /// Per-frame increment of angle `a` (radians).
    pub speed_a: f32,
    /// Per-frame increment of angle `b` (radians).
    pub speed_b: f32,
    /// Stop after this many frames; `None` runs until cancelled.
    pub max_frames: Option<u64>,
    pub min_width: u16,
    pub min_height: u16,
    /// Torus size given up front, skipping the prompt.
    pub size: Option<u32>,
    pub render: RenderConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(FRAME_MS),
            speed_a: SPEED_A,
            speed_b: SPEED_B,
            max_frames: None,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
            size: None,
            render: RenderConfig::default(),
        }
    }
}

impl AnimationConfig {
    /// Create from `DONUT_*` environment variables.
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`AnimationConfig::from_env`] with a custom variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let get = |key: &str| lookup(key).map(|s| s.trim().to_string());

        let frame_interval = parse(get("DONUT_FRAME_MS"))
            .map(Duration::from_millis)
            .unwrap_or(d.frame_interval);

        let speed_a = parse_finite(get("DONUT_SPEED_A")).unwrap_or(d.speed_a);
        let speed_b = parse_finite(get("DONUT_SPEED_B")).unwrap_or(d.speed_b);

        let max_frames = parse::<u64>(get("DONUT_MAX_FRAMES")).or(d.max_frames);

        let min_width = parse::<u16>(get("DONUT_MIN_WIDTH"))
            .filter(|w| *w > 0)
            .unwrap_or(d.min_width);
        let min_height = parse::<u16>(get("DONUT_MIN_HEIGHT"))
            .filter(|h| *h > 0)
            .unwrap_or(d.min_height);

        let size = parse::<u32>(get("DONUT_SIZE")).filter(|s| *s > 0);

        // Divisors feed a division; zero or negative would blow the torus off screen.
        let scale_x_divisor = parse_finite(get("DONUT_SCALE_X"))
            .filter(|v| *v > 0.0)
            .unwrap_or(d.render.scale_x_divisor);
        let scale_y_divisor = parse_finite(get("DONUT_SCALE_Y"))
            .filter(|v| *v > 0.0)
            .unwrap_or(d.render.scale_y_divisor);

        Self {
            frame_interval,
            speed_a,
            speed_b,
            max_frames,
            min_width,
            min_height,
            size,
            render: RenderConfig {
                scale_x_divisor,
                scale_y_divisor,
                ..d.render
            },
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| s.parse().ok())
}

fn parse_finite(value: Option<String>) -> Option<f32> {
    parse::<f32>(value).filter(|v| v.is_finite())
}
