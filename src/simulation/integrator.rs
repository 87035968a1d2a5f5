//! Fixed-step time integration for the particle system
//!
//! Both functions read an immutable pre-step slice and write a fresh
//! post-step buffer, so every particle in a step sees the same positions.

use super::boundary::Boundary;
use super::forces::Acceleration;
use super::states::Particle;

/// Seed accelerations for the first step
/// Each particle gets half the field at its current position; the factor of
/// 1/2 stands in for the acceleration at the previous half step
pub fn bootstrap(current: &[Particle], next: &mut Vec<Particle>, forces: &dyn Acceleration) {
    next.clear();
    next.extend(current.iter().map(|p| {
        let mut seeded = p.clone();
        seeded.a = forces.field(p, current) / 2.0;
        seeded
    }));
}

/// Advance every particle by one velocity-Verlet step of size `dt`
///
/// The new acceleration is evaluated from the *pre-move* slice, not the
/// freshly displaced positions. Trajectories depend on this ordering.
pub fn verlet_step(
    current: &[Particle],
    next: &mut Vec<Particle>,
    forces: &dyn Acceleration,
    boundary: &Boundary,
    dt: f64,
) {
    let half_dt = 0.5 * dt; // half step dt/2

    next.clear();
    next.extend(current.iter().map(|p| {
        let mut moved = p.clone();

        // Drift: x_n+1 = x_n + dt (v_n + dt/2 a_n)
        moved.x += dt * (p.v + half_dt * p.a);

        // a_n+1, from the old array
        moved.a = forces.field(p, current);

        // Clamp before the kick so the reflected velocity gets corrected too
        boundary.reflect(&mut moved);

        // Kick: v_n+1 = v_n + dt/2 (a_n + a_n+1)
        moved.v += half_dt * (p.a + moved.a);

        moved
    }));
}
