use glam::Vec2;
use undertow_anim::{AnimationError, PhysicsModel};

/// A damped point mass on a spring anchored at the origin.
///
/// Integrated with semi-implicit Euler, which keeps the oscillation stable
/// at the step sizes the demo uses.
pub struct SpringPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    stiffness: f32,
    damping: f32,
}

impl SpringPoint {
    pub fn new(position: Vec2, stiffness: f32, damping: f32) -> SpringPoint {
        SpringPoint {
            position,
            velocity: Vec2::ZERO,
            stiffness,
            damping,
        }
    }
}

impl PhysicsModel for SpringPoint {
    fn on_advance_time_step(&mut self, dt: f64) -> Result<(), AnimationError> {
        let dt = dt as f32;

        let accel = -self.stiffness * self.position - self.damping * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;

        Ok(())
    }
}
