//! Torus rasterizer.
//!
//! Sweeps the parametric torus surface, rotates every sample by the two
//! orientation angles, projects it with a perspective divide and keeps the
//! closest sample per cell. Pure: the only side effect is the buffer.

use std::f32::consts::TAU;

use crate::config::RenderConfig;
use crate::fb::FrameBuffer;
use crate::types::luminance_glyph;

/// Render one frame with the default tuning.
///
/// `size` is the ratio of the tube-center radius to the tube radius (which
/// is fixed at 1). Every cell of `fb` is overwritten.
pub fn render(a: f32, b: f32, size: u32, fb: &mut FrameBuffer) {
    render_with(&RenderConfig::default(), a, b, size, fb);
}

/// Render one frame with explicit tuning.
pub fn render_with(config: &RenderConfig, a: f32, b: f32, size: u32, fb: &mut FrameBuffer) {
    fb.clear();

    // A non-positive step would never reach 2π.
    if !(config.theta_step > 0.0 && config.phi_step > 0.0) {
        return;
    }

    let half_w = (fb.width() / 2) as i32;
    let half_h = (fb.height() / 2) as i32;
    let (scale_x, scale_y) = config.scales(fb.width(), fb.height());
    let ring = size as f32;

    let (sin_a, cos_a) = a.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();

    let mut theta = 0.0f32;
    while theta < TAU {
        let (sin_theta, cos_theta) = theta.sin_cos();
        // Distance of this tube slice from the ring's axis.
        let circle_x = cos_theta + ring;

        let mut phi = 0.0f32;
        while phi < TAU {
            let (sin_phi, cos_phi) = phi.sin_cos();

            let circle_y = sin_phi * circle_x * cos_a - sin_theta * sin_a;
            let norm_z =
                1.0 / (sin_phi * circle_x * sin_a + sin_theta * cos_a + config.camera_distance);

            // Camera inside the ring: the distance term can hit zero.
            if norm_z.is_finite() {
                let x = offset(
                    half_w,
                    scale_x * norm_z * (cos_phi * circle_x * cos_b + circle_y * sin_b),
                );
                let y = offset(
                    half_h,
                    scale_y * norm_z * (cos_phi * circle_x * sin_b - circle_y * cos_b),
                );

                let lum = config.luminance_scale
                    * ((sin_theta * sin_a - sin_phi * cos_theta * cos_a) * cos_b
                        - sin_phi * cos_theta * sin_a
                        - sin_theta * cos_a
                        - cos_phi * cos_theta * sin_b);

                fb.plot(x, y, norm_z, luminance_glyph(lum as i32));
            }

            phi += config.phi_step;
        }
        theta += config.theta_step;
    }
}

/// Screen coordinate `center + delta`, truncated toward zero.
///
/// Saturates instead of overflowing so far-off samples still fail the
/// bounds check in [`FrameBuffer::plot`].
#[inline]
fn offset(center: i32, delta: f32) -> i32 {
    center.saturating_add(delta as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{is_ramp_glyph, BACKGROUND_GLYPH};

    fn lit_cells(fb: &FrameBuffer) -> usize {
        fb.cells()
            .iter()
            .filter(|c| c.glyph != BACKGROUND_GLYPH)
            .count()
    }

    #[test]
    fn renders_something_at_rest() {
        let mut fb = FrameBuffer::try_new(80, 24).unwrap();
        render(0.0, 0.0, 3, &mut fb);
        assert!(lit_cells(&fb) > 0);
    }

    #[test]
    fn overwrites_previous_frame() {
        let mut fb = FrameBuffer::try_new(40, 20).unwrap();
        fb.plot(0, 0, 100.0, 'X');
        render(0.3, 1.1, 3, &mut fb);
        assert!(fb.cells().iter().all(|c| c.glyph != 'X'));
    }

    #[test]
    fn depth_matches_glyph_presence() {
        let mut fb = FrameBuffer::try_new(60, 20).unwrap();
        render(1.0, 2.0, 3, &mut fb);
        for c in fb.cells() {
            if c.glyph == BACKGROUND_GLYPH {
                assert_eq!(c.depth, 0.0);
            } else {
                assert!(is_ramp_glyph(c.glyph));
                assert!(c.depth > 0.0);
            }
        }
    }

    #[test]
    fn zero_distance_term_is_skipped() {
        // theta = 0, phi ~ 1.0 puts the f32 distance term at exactly zero.
        let mut fb = FrameBuffer::try_new(80, 24).unwrap();
        render(-0.9940796, 0.0, 6, &mut fb);
        for c in fb.cells() {
            assert!(c.depth.is_finite());
            assert!(c.glyph == BACKGROUND_GLYPH || is_ramp_glyph(c.glyph));
        }
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(offset(40, f32::INFINITY), i32::MAX);
        assert_eq!(offset(40, f32::NEG_INFINITY), i32::MIN + 40);
        assert_eq!(offset(40, f32::NAN), 40);
        assert_eq!(offset(40, -2.9), 38);
    }

    #[test]
    fn zero_size_does_not_panic() {
        let mut fb = FrameBuffer::try_new(30, 10).unwrap();
        render(0.7, 0.2, 0, &mut fb);
    }

    #[test]
    fn non_positive_step_only_clears() {
        let config = RenderConfig {
            phi_step: 0.0,
            ..RenderConfig::default()
        };
        let mut fb = FrameBuffer::try_new(10, 5).unwrap();
        fb.plot(1, 1, 1.0, '@');
        render_with(&config, 0.0, 0.0, 3, &mut fb);
        assert_eq!(lit_cells(&fb), 0);
    }

    #[test]
    fn zero_area_buffer_is_fine() {
        let mut fb = FrameBuffer::try_new(0, 0).unwrap();
        render(0.0, 0.0, 4, &mut fb);
        assert!(fb.cells().is_empty());
    }
}
