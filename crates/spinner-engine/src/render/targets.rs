/// Direction a target slot's triangle spins in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RotationDirection {
    #[default]
    Forward,
    /// Uses the negated time, mirroring the forward rotation.
    Reverse,
}

impl RotationDirection {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            RotationDirection::Forward => 1.0,
            RotationDirection::Reverse => -1.0,
        }
    }

    /// Rotation angle in radians for an accumulated time in seconds.
    #[inline]
    pub fn angle(self, elapsed_secs: f32) -> f32 {
        self.sign() * elapsed_secs
    }
}

/// One render target draw per frame.
///
/// Every slot renders into the surface's current backbuffer with its own
/// transform uniform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct TargetSlot {
    pub direction: RotationDirection,
}

impl TargetSlot {
    pub const FORWARD: Self = Self { direction: RotationDirection::Forward };
    pub const REVERSE: Self = Self { direction: RotationDirection::Reverse };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_angle_is_negated_forward() {
        for t in [0.0f32, 0.016, 0.16, 3.5, 1000.0] {
            assert_eq!(RotationDirection::Reverse.angle(t), -RotationDirection::Forward.angle(t));
        }
    }

    #[test]
    fn default_slot_spins_forward() {
        assert_eq!(TargetSlot::default(), TargetSlot::FORWARD);
        assert_eq!(RotationDirection::Forward.angle(0.5), 0.5);
    }
}
