//! Rasterizer tuning.

use crate::types::{
    CAMERA_DISTANCE, LUMINANCE_SCALE, PHI_STEP, SCALE_X_DIVISOR, SCALE_Y_DIVISOR, THETA_STEP,
};

/// Sampling density, camera and projection constants for [`crate::render_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Step around the tube cross-section (radians).
    pub theta_step: f32,
    /// Step around the ring (radians).
    pub phi_step: f32,
    pub camera_distance: f32,
    pub luminance_scale: f32,
    /// `scale_x = width / scale_x_divisor`.
    pub scale_x_divisor: f32,
    /// `scale_y = height / scale_y_divisor`.
    pub scale_y_divisor: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theta_step: THETA_STEP,
            phi_step: PHI_STEP,
            camera_distance: CAMERA_DISTANCE,
            luminance_scale: LUMINANCE_SCALE,
            scale_x_divisor: SCALE_X_DIVISOR,
            scale_y_divisor: SCALE_Y_DIVISOR,
        }
    }
}

impl RenderConfig {
    /// Projection scales for a `width` x `height` buffer.
    pub fn scales(&self, width: u16, height: u16) -> (f32, f32) {
        (
            width as f32 / self.scale_x_divisor,
            height as f32 / self.scale_y_divisor,
        )
    }
}
