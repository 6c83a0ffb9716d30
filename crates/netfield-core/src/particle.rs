use crate::params::FieldParams;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Units per frame.
    pub vel: Vec2,
    /// Radius, fixed for the particle's lifetime.
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Uniform position inside `surface`, velocity in `[-max_speed, max_speed]`
    /// per axis, radius in `[min_radius, max_radius]`.
    pub fn spawn<R: Rng>(rng: &mut R, surface: Surface, params: &FieldParams) -> Self {
        let pos = Vec2::new(
            rng.gen::<f32>() * surface.width,
            rng.gen::<f32>() * surface.height,
        );
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
        );
        let size = params.min_radius + rng.gen::<f32>() * (params.max_radius - params.min_radius);
        Self { pos, vel, size }
    }

    /// One frame of motion: drift, bounce off the edges, then get pushed
    /// away from the pointer if it is close.
    pub fn step(&mut self, surface: Surface, pointer: Option<Vec2>, params: &FieldParams) {
        self.pos += self.vel;
        self.reflect(surface);
        if let Some(p) = pointer {
            self.repel_from(p, params.repulsion_radius, params.repulsion_strength);
        }
    }

    /// Turn the velocity back toward the interior on any axis where the
    /// particle is outside the surface. Position is left as is; the overshoot
    /// is undone by the following frames.
    pub fn reflect(&mut self, surface: Surface) {
        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > surface.width {
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > surface.height {
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Displace the particle directly away from `pointer`. Velocity is not
    /// touched, so the particle resumes its path once the pointer leaves.
    /// Returns whether a nudge was applied.
    pub fn repel_from(&mut self, pointer: Vec2, radius: f32, strength: f32) -> bool {
        let to_pointer = pointer - self.pos;
        let distance = to_pointer.length();
        let force = repulsion_force(distance, radius);
        // at distance 0 there is no direction to push in
        if force <= 0.0 || distance <= 0.0 {
            return false;
        }
        self.pos -= to_pointer / distance * force * strength;
        true
    }
}

/// `(radius - distance) / radius` inside the radius, 0 at or beyond it.
pub fn repulsion_force(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        (radius - distance) / radius
    }
}
