//! Orthographic camera over the unit square.
//!
//! The view looks at `x, y ∈ [0, 1]` with depth `z ∈ [-5, 5]`. Panning shifts
//! the window, zooming scales it about its centre, and the whole scene spins
//! slowly about the vertical axis.

use glam::{Mat4, Vec2, Vec3};

/// Default pan distance per key press, in world units.
pub const DEFAULT_PAN_STEP: f32 = 0.05;
/// Default zoom factor per key press.
pub const DEFAULT_ZOOM_STEP: f32 = 1.1;
/// Default spin per idle iteration, in degrees.
pub const DEFAULT_SPIN_DEGREES: f32 = 0.1;

const NEAR: f32 = -5.0;
const FAR: f32 = 5.0;
const MIN_ZOOM: f32 = 0.05;
const MAX_ZOOM: f32 = 50.0;

/// Pan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    Up,
    Down,
    Left,
    Right,
}

/// Orthographic camera with pan, zoom and a constant spin.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Offset of the view window, in world units.
    pub pan: Vec2,
    /// Magnification. 1.0 shows the unit square.
    pub zoom: f32,
    /// Accumulated rotation about the vertical axis, in degrees.
    pub yaw_degrees: f32,
    pub pan_step: f32,
    pub zoom_step: f32,
    pub spin_degrees: f32,
}

impl Camera {
    pub fn new(pan_step: f32, zoom_step: f32, spin_degrees: f32) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            yaw_degrees: 0.0,
            pan_step,
            zoom_step,
            spin_degrees,
        }
    }

    pub fn pan(&mut self, direction: Pan) {
        let delta = match direction {
            Pan::Up => Vec2::Y,
            Pan::Down => Vec2::NEG_Y,
            Pan::Left => Vec2::NEG_X,
            Pan::Right => Vec2::X,
        };
        self.pan += delta * self.pan_step;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * self.zoom_step).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / self.zoom_step).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Advance the spin by one idle iteration.
    pub fn tick(&mut self) {
        self.yaw_degrees = (self.yaw_degrees + self.spin_degrees) % 360.0;
    }

    /// View-projection matrix for a viewport with the given aspect ratio.
    ///
    /// The unit square always fits the shorter side of the viewport.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let half = 0.5 / self.zoom;
        let (half_w, half_h) = if aspect >= 1.0 {
            (half * aspect, half)
        } else {
            (half, half / aspect.max(f32::EPSILON))
        };
        let center = Vec2::splat(0.5) - self.pan;
        let proj = Mat4::orthographic_rh(
            center.x - half_w,
            center.x + half_w,
            center.y - half_h,
            center.y + half_h,
            NEAR,
            FAR,
        );
        // Spin about the vertical line through the centre of the view.
        let pivot = Vec3::new(center.x, 0.0, 0.0);
        let spin = Mat4::from_translation(pivot)
            * Mat4::from_rotation_y(self.yaw_degrees.to_radians())
            * Mat4::from_translation(-pivot);
        proj * spin
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_PAN_STEP, DEFAULT_ZOOM_STEP, DEFAULT_SPIN_DEGREES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn project(camera: &Camera, aspect: f32, point: Vec3) -> Vec3 {
        let clip = camera.view_proj(aspect) * Vec4::new(point.x, point.y, point.z, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn test_unit_square_fills_square_viewport() {
        let camera = Camera::default();
        let lo = project(&camera, 1.0, Vec3::new(0.0, 0.0, 0.0));
        let hi = project(&camera, 1.0, Vec3::new(1.0, 1.0, 0.0));
        assert!((lo.x + 1.0).abs() < 1e-5 && (lo.y + 1.0).abs() < 1e-5);
        assert!((hi.x - 1.0).abs() < 1e-5 && (hi.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_depth_range_maps_into_zero_one() {
        let camera = Camera::default();
        for z in [-4.9, 0.0, 4.9] {
            let ndc = project(&camera, 1.0, Vec3::new(0.5, 0.5, z));
            assert!((0.0..=1.0).contains(&ndc.z), "z {} -> {}", z, ndc.z);
        }
    }

    #[test]
    fn test_pan_moves_scene() {
        let mut camera = Camera::default();
        camera.pan(Pan::Right);
        let center = project(&camera, 1.0, Vec3::splat(0.5));
        assert!(center.x > 0.0);

        camera.pan(Pan::Left);
        camera.pan(Pan::Up);
        let center = project(&camera, 1.0, Vec3::splat(0.5));
        assert!(center.x.abs() < 1e-5);
        assert!(center.y > 0.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.zoom_in();
        assert!(camera.zoom > 1.0);
        for _ in 0..500 {
            camera.zoom_out();
        }
        assert_eq!(camera.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_tick_wraps() {
        let mut camera = Camera::new(0.1, 1.1, 90.0);
        for _ in 0..5 {
            camera.tick();
        }
        assert!((camera.yaw_degrees - 90.0).abs() < 1e-4);
    }
}
