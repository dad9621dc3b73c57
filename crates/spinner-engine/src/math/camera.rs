use glam::{Mat4, Vec3};

/// Fixed camera: left-handed look-at view and perspective projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraConfig {
    /// Camera at `(0, 0, 2)` looking at the origin, 45° FOV, planes 1..`far`.
    pub fn looking_at_origin(far: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 2.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            near: 1.0,
            far,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    /// Perspective projection mapping depth into `[0, 1]`.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, aspect, self.near, self.far)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::looking_at_origin(100.0)
    }
}
