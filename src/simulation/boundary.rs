//! Boundary policy applied after the position update of each step

use crate::simulation::states::Particle;

pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;
pub const MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Boundary {
    /// Particles move freely
    #[default]
    None,
    /// Keep particles within `margin` of the `[0, width] x [0, height]` box
    Box { width: f64, height: f64, margin: f64 },
}

impl Boundary {
    /// The 800x600 box with a margin of 10
    pub fn window() -> Self {
        Boundary::Box {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            margin: MARGIN,
        }
    }

    /// Clamp an escaping coordinate to the margin and point the matching
    /// velocity component back inward. Only position and velocity change.
    pub fn reflect(&self, p: &mut Particle) {
        let Boundary::Box { width, height, margin } = *self else {
            return;
        };

        if p.x.x < margin {
            p.x.x = margin;
            p.v.x = p.v.x.abs();
        } else if p.x.x > width - margin {
            p.x.x = width - margin;
            p.v.x = -p.v.x.abs();
        }

        if p.x.y < margin {
            p.x.y = margin;
            p.v.y = p.v.y.abs();
        } else if p.x.y > height - margin {
            p.x.y = height - margin;
            p.v.y = -p.v.y.abs();
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, Boundary::Box { .. })
    }
}
