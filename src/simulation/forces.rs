//! Force / acceleration contributors for the particle engine
//!
//! Defines the per-axis `Acceleration` trait and the constant-magnitude
//! pull law the simulation runs on

use crate::simulation::params::G;
use crate::simulation::states::{NVec2, Particle};

/// Coordinate axis an acceleration is evaluated along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis
    pub fn of(self, v: &NVec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Trait for acceleration sources operating on a particle slice
/// Implementations must be pure: they read `particles` and mutate nothing
pub trait Acceleration {
    /// Scalar acceleration felt by `p` along `axis` due to every particle in `particles`
    fn acceleration(&self, p: &Particle, particles: &[Particle], axis: Axis) -> f64;

    /// Both axes at once
    fn field(&self, p: &Particle, particles: &[Particle]) -> NVec2 {
        NVec2::new(
            self.acceleration(p, particles, Axis::X),
            self.acceleration(p, particles, Axis::Y),
        )
    }
}

/// Distance-independent pull
///
/// Every other particle contributes a pull equal to its mass, directed toward
/// it along the axis, regardless of separation. Pairs closer than
/// `f64::EPSILON` on that axis contribute nothing, which also removes the
/// self-pair.
#[derive(Debug, Clone, Copy)]
pub struct ConstantPull {
    pub g: f64, // pull constant
}

impl Default for ConstantPull {
    fn default() -> Self {
        Self { g: G }
    }
}

impl Acceleration for ConstantPull {
    fn acceleration(&self, p: &Particle, particles: &[Particle], axis: Axis) -> f64 {
        let mut a = 0.0;
        for other in particles {
            // signed separation along the axis, from `other` to `p`
            let dv = axis.of(&p.x) - axis.of(&other.x);
            if dv.abs() > f64::EPSILON {
                let sign = if dv < 0.0 { -1.0 } else { 1.0 };
                // kept unsimplified: -sign * dv * m / dv
                a += -sign * dv * other.mass / dv;
            }
        }
        a * self.g
    }
}
