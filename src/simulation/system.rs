//! The particle system: owned state plus its setup/run lifecycle
//!
//! A `ParticleSystem` is filled with `push`, bootstrapped once with `init`
//! and then advanced with `update`. Each step reads the current buffer and
//! writes a second one; the two are swapped afterwards.

use log::{info, warn};

use super::boundary::Boundary;
use super::forces::{Acceleration, ConstantPull};
use super::integrator::{bootstrap, verlet_step};
use super::snapshot::{project, Disc, DiscStyle};
use super::states::Particle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Setup,
    Running,
}

pub struct ParticleSystem {
    particles: Vec<Particle>, // current state, insertion order
    scratch: Vec<Particle>, // write buffer for the next step
    counter: u64, // completed updates since init
    dt: f64, // fixed step
    forces: Box<dyn Acceleration + Send + Sync>,
    boundary: Boundary,
    style: DiscStyle,
    phase: Phase,
}

impl ParticleSystem {
    /// Empty, unbounded system with the constant pull law
    ///
    /// `dt` must be strictly positive and finite; it is not checked here.
    pub fn new(dt: f64) -> Self {
        Self {
            particles: Vec::new(),
            scratch: Vec::new(),
            counter: 0,
            dt,
            forces: Box::new(ConstantPull::default()),
            boundary: Boundary::None,
            style: DiscStyle::PLAIN,
            phase: Phase::Setup,
        }
    }

    /// Keep particles inside `boundary`. Boxed systems also switch the
    /// snapshot to centered discs.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self.style = if boundary.is_bounded() {
            DiscStyle::CENTERED
        } else {
            DiscStyle::PLAIN
        };
        self
    }

    /// Replace the disc layout used by `snapshot`
    pub fn with_style(mut self, style: DiscStyle) -> Self {
        self.style = style;
        self
    }

    /// Replace the force law
    pub fn with_forces<T>(mut self, forces: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.forces = Box::new(forces);
        self
    }

    /// Append a particle. Only meaningful before `init`.
    pub fn push(&mut self, particle: Particle) {
        if self.phase == Phase::Running {
            warn!("push after init: particle {} starts with zero acceleration", self.particles.len());
        }
        self.particles.push(particle);
    }

    /// Reset the step counter and seed every acceleration with half the field
    pub fn init(&mut self) {
        self.counter = 0;
        bootstrap(&self.particles, &mut self.scratch, &*self.forces);
        std::mem::swap(&mut self.particles, &mut self.scratch);
        self.phase = Phase::Running;
        info!("initialized {} particles, dt = {:e}", self.particles.len(), self.dt);
    }

    /// Advance all particles by one step of `dt`
    pub fn update(&mut self) {
        if self.phase == Phase::Setup {
            warn!("update before init: accelerations are not seeded");
            self.phase = Phase::Running;
        }
        verlet_step(
            &self.particles,
            &mut self.scratch,
            &*self.forces,
            &self.boundary,
            self.dt,
        );
        std::mem::swap(&mut self.particles, &mut self.scratch);
        self.counter += 1;
    }

    /// Render-ready discs for the current state
    pub fn snapshot(&self) -> Vec<Disc> {
        project(&self.particles, &self.style)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn step_count(&self) -> u64 {
        self.counter
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn style(&self) -> &DiscStyle {
        &self.style
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
