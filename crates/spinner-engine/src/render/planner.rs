use glam::Mat4;
use winit::dpi::PhysicalSize;

use crate::coords::Viewport;
use crate::math::{compose, CameraConfig};
use crate::paint::Color;
use crate::time::{FrameTime, StepClock};

use super::TargetSlot;

/// One draw call for one target slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetDraw {
    pub slot: usize,
    pub angle: f32,
    pub transform: Mat4,

    /// First draw of the frame clears color and depth; later draws load.
    pub clear: bool,
}

/// Everything the GPU side needs to record one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub time: FrameTime,
    pub viewport: Viewport,
    pub clear_color: Color,
    pub draws: Vec<TargetDraw>,
}

/// GPU-free half of the frame renderer.
///
/// Each call to [`plan`](Self::plan) advances the fixed-step clock once and
/// computes the transform of every target slot for the new time.
#[derive(Debug, Clone)]
pub struct FramePlanner {
    clock: StepClock,
    camera: CameraConfig,
    slots: Vec<TargetSlot>,
    clear_color: Color,
}

impl FramePlanner {
    pub fn new(clock: StepClock, camera: CameraConfig, slots: Vec<TargetSlot>, clear_color: Color) -> Self {
        Self {
            clock,
            camera,
            slots,
            clear_color,
        }
    }

    #[inline]
    pub fn clock(&self) -> &StepClock {
        &self.clock
    }

    /// Advances time by one step and plans the frame for a `size` surface.
    pub fn plan(&mut self, size: PhysicalSize<u32>) -> FramePlan {
        let time = self.clock.tick();
        let viewport = Viewport::from_size(size);
        let aspect = viewport.aspect_ratio();
        let t = time.elapsed_secs();

        let draws = self
            .slots
            .iter()
            .enumerate()
            .map(|(slot, target)| {
                let angle = target.direction.angle(t);
                TargetDraw {
                    slot,
                    angle,
                    transform: compose(angle, &self.camera, aspect),
                    clear: slot == 0,
                }
            })
            .collect();

        FramePlan {
            time,
            viewport,
            clear_color: self.clear_color,
            draws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rotation;
    use std::time::Duration;

    fn planner(slots: Vec<TargetSlot>) -> FramePlanner {
        FramePlanner::new(StepClock::new(), CameraConfig::default(), slots, Color::BLACK)
    }

    fn size() -> PhysicalSize<u32> {
        PhysicalSize::new(800, 600)
    }

    #[test]
    fn single_slot_plans_one_clearing_draw() {
        let mut p = planner(vec![TargetSlot::FORWARD]);
        let plan = p.plan(size());
        assert_eq!(plan.draws.len(), 1);
        assert!(plan.draws[0].clear);
        assert_eq!(plan.clear_color, Color::BLACK);
    }

    #[test]
    fn only_first_slot_clears() {
        let mut p = planner(vec![TargetSlot::FORWARD, TargetSlot::REVERSE]);
        let plan = p.plan(size());
        let clears: Vec<bool> = plan.draws.iter().map(|d| d.clear).collect();
        assert_eq!(clears, vec![true, false]);
    }

    #[test]
    fn dual_slots_mirror_each_other_every_step() {
        let mut p = planner(vec![TargetSlot::FORWARD, TargetSlot::REVERSE]);
        for _ in 0..100 {
            let plan = p.plan(size());
            assert_eq!(plan.draws[1].angle, -plan.draws[0].angle);
        }
    }

    #[test]
    fn viewport_follows_surface_size() {
        let mut p = planner(vec![TargetSlot::FORWARD]);
        let plan = p.plan(PhysicalSize::new(1024, 768));
        assert_eq!(plan.viewport, Viewport::full(1024, 768));
    }

    #[test]
    fn transform_uses_surface_aspect() {
        let mut p = planner(vec![TargetSlot::FORWARD]);
        let plan = p.plan(size());
        let cam = CameraConfig::default();
        let expected = cam.projection(800.0 / 600.0) * cam.view() * rotation(plan.draws[0].angle);
        let (a, b) = (plan.draws[0].transform.to_cols_array(), expected.to_cols_array());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() <= 1e-5);
        }
    }

    #[test]
    fn ten_frames_at_16ms() {
        let mut p = planner(vec![TargetSlot::FORWARD, TargetSlot::REVERSE]);
        let plan = (0..10).map(|_| p.plan(size())).last().unwrap();

        assert_eq!(plan.time.elapsed, Duration::from_millis(160));
        assert_eq!(plan.time.frame_index, 9);
        assert!((plan.draws[0].angle - 0.16).abs() < 1e-6);
        assert!((plan.draws[1].angle + 0.16).abs() < 1e-6);
    }
}
