use glam::Mat4;

use super::CameraConfig;

/// Rotation about +Y by `angle` radians.
#[inline]
pub fn rotation(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}

/// Full world-view-projection matrix for a rotation angle.
///
/// Row-vector reading: `rotation(angle) * view * projection`.
pub fn compose(angle: f32, camera: &CameraConfig, aspect: f32) -> Mat4 {
    camera.projection(aspect) * camera.view() * rotation(angle)
}

/// GPU layout of the `transform` uniform (`mat4x4<f32>`, 64 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Transform {
    pub matrix: [[f32; 4]; 4],
}

impl Transform {
    pub const SIZE: u64 = std::mem::size_of::<Transform>() as u64;

    #[inline]
    pub fn from_mat4(m: Mat4) -> Self {
        Self { matrix: m.to_cols_array_2d() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    const EPS: f32 = 1e-5;

    fn assert_mat_close(a: Mat4, b: Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).abs() <= EPS, "component {i}: {x} vs {y}");
        }
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_zero_is_identity() {
        assert_mat_close(rotation(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn rotation_quarter_turn_maps_x_to_minus_z() {
        let p = rotation(std::f32::consts::FRAC_PI_2).transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn negated_angle_is_inverse_rotation() {
        for t in [0.016f32, 0.5, 1.7, 42.0] {
            assert_mat_close(rotation(-t), rotation(t).inverse());
        }
    }

    // ── compose ───────────────────────────────────────────────────────────

    #[test]
    fn compose_equals_rotation_view_projection_product() {
        let cam = CameraConfig::looking_at_origin(100.0);
        let aspect = 800.0 / 600.0;
        for step in 0..50 {
            let t = step as f32 * 0.016;
            let expected = cam.projection(aspect) * cam.view() * rotation(t);
            assert_mat_close(compose(t, &cam, aspect), expected);
        }
    }

    #[test]
    fn compose_applies_rotation_first() {
        // Row-vector order: a point is rotated, then viewed, then projected.
        let cam = CameraConfig::default();
        let aspect = 1.0;
        let t = 0.7;
        let p = Vec4::new(0.45, -0.5, 0.0, 1.0);

        let staged = cam.projection(aspect) * (cam.view() * (rotation(t) * p));
        let direct = compose(t, &cam, aspect) * p;
        assert!((staged - direct).length() < EPS);
    }

    #[test]
    fn triangle_apex_lands_in_front_of_camera() {
        let cam = CameraConfig::default();
        let clip = compose(0.0, &cam, 4.0 / 3.0) * Vec4::new(0.0, 0.5, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.y > 0.0 && ndc.y < 1.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    // ── Transform ─────────────────────────────────────────────────────────

    #[test]
    fn transform_is_64_bytes() {
        assert_eq!(Transform::SIZE, 64);
    }

    #[test]
    fn transform_preserves_column_major_layout() {
        let m = compose(1.0, &CameraConfig::default(), 1.5);
        let t = Transform::from_mat4(m);
        assert_eq!(t.matrix[3], m.w_axis.to_array());
        assert_eq!(Mat4::from_cols_array_2d(&t.matrix), m);
    }
}
