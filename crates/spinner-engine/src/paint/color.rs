/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// The triangle is drawn without blending, so no premultiplication is
/// applied; channels go to the GPU unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::rgba(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::rgba(0.0, 0.0, 1.0, 1.0);

    /// The deep blue the single-target variant clears to.
    pub const DEEP_BLUE: Self = Self::rgba(0.0, 0.2, 0.4, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_array_keeps_channel_order() {
        assert_eq!(Color::rgba(0.1, 0.2, 0.3, 0.4).to_array(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn to_wgpu_widens_channels() {
        let c = Color::DEEP_BLUE.to_wgpu();
        assert_eq!(c.r, 0.0);
        assert!((c.g - 0.2).abs() < 1e-6);
        assert!((c.b - 0.4).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
