//! Transform math.
//!
//! Matrices are `glam` column-major `Mat4`s and are uploaded as-is to WGSL
//! `mat4x4<f32>` uniforms. The D3D-style row-vector product
//! `rotation * view * projection` is written `projection * view * rotation`
//! in column-vector form; both describe the same transform.

mod camera;
mod transform;

pub use camera::CameraConfig;
pub use transform::{compose, rotation, Transform};
