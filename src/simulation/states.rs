//! Core state type for the particle simulation.
//!
//! A `Particle` is a point mass in screen space (pixels, y pointing down)
//! carrying its position, velocity and the acceleration evaluated at the
//! start of the most recently completed step.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub mass: f64, // fixed at construction
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration
}

impl Particle {
    /// Particle at rest acceleration-wise; `init` seeds `a` later
    pub fn new(mass: f64, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            mass,
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
            a: NVec2::zeros(),
        }
    }

    /// Particle with zero velocity
    pub fn at_rest(mass: f64, x: f64, y: f64) -> Self {
        Self::new(mass, x, y, 0.0, 0.0)
    }
}
