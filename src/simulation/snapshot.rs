//! Render projection of the particle state
//!
//! Turns particles into drawable discs. Colors come from a fixed-seed
//! generator that is re-created on every call, so the color of the N-th
//! particle never depends on how often a snapshot was taken.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::states::{NVec2, Particle};

/// Seed of the per-call color stream
pub const COLOR_SEED: u64 = 6;

/// Mass-to-screen scaling of a disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscStyle {
    pub radius_per_mass: f64,
    pub offset_per_mass: [f64; 2], // subtracted from the position to get the origin
}

impl DiscStyle {
    /// Free-flying layout: radius 3m, origin shifted by (10m, 2m)
    pub const PLAIN: DiscStyle = DiscStyle {
        radius_per_mass: 3.0,
        offset_per_mass: [10.0, 2.0],
    };

    /// Boxed layout: radius 3m, disc centered on the particle
    pub const CENTERED: DiscStyle = DiscStyle {
        radius_per_mass: 3.0,
        offset_per_mass: [3.0, 3.0],
    };
}

/// A filled circle ready to draw, in screen coordinates (y down)
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub origin: NVec2, // top-left corner of the disc's bounding box
    pub color: [u8; 3],
}

impl Disc {
    /// Center of the drawn circle
    pub fn center(&self) -> NVec2 {
        self.origin + NVec2::new(self.radius, self.radius)
    }
}

/// Project `particles` to discs, in order
pub fn project(particles: &[Particle], style: &DiscStyle) -> Vec<Disc> {
    let mut colors = StdRng::seed_from_u64(COLOR_SEED);
    particles
        .iter()
        .map(|p| {
            let color = [
                colors.gen_range(0..=255),
                colors.gen_range(0..=255),
                colors.gen_range(0..=255),
            ];
            Disc {
                mass: p.mass,
                x: p.x.x,
                y: p.x.y,
                radius: p.mass * style.radius_per_mass,
                origin: NVec2::new(
                    p.x.x - p.mass * style.offset_per_mass[0],
                    p.x.y - p.mass * style.offset_per_mass[1],
                ),
                color,
            }
        })
        .collect()
}
