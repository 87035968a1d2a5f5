//! Build fully-initialized simulation scenarios
//!
//! A `Scenario` bundles a bootstrapped `ParticleSystem` with the frame
//! settings the viewer needs. It can be built:
//! - as a jittered ring around the window center (`circle`)
//! - as particles scattered inside the boundary box (`random`)
//! - from a validated YAML `ScenarioConfig` (`from_config`)
//!
//! Scenarios are inserted into Bevy as a `Resource` and consumed by the
//! stepping and drawing systems

use std::f64::consts::PI;

use bevy::prelude::Resource;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::simulation::boundary::{Boundary, MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::simulation::params::Parameters;
use crate::simulation::states::Particle;
use crate::simulation::system::ParticleSystem;

/// Seed of the generator used to place particles
pub const SETUP_SEED: u64 = 6;

/// Radius of the initial ring, in pixels
pub const RING_RADIUS: f64 = 150.0;

/// Bevy resource representing a running simulation
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: ParticleSystem,
    pub window: [f64; 2], // width, height in pixels
}

impl Scenario {
    /// Wrap `particles` into an initialized system
    pub fn new(parameters: Parameters, boundary: Boundary, window: [f64; 2], particles: Vec<Particle>) -> Self {
        let mut system = ParticleSystem::new(parameters.dt).with_boundary(boundary);
        for p in particles {
            system.push(p);
        }
        system.init();

        Self {
            parameters,
            system,
            window,
        }
    }

    /// `count` particles on a ring of radius 150 around the window center,
    /// kept inside the window box. `steps` sets the step size.
    pub fn circle(count: usize, steps: usize) -> Result<Self, ConfigError> {
        let parameters = step_parameters(steps)?;
        let mut rng = StdRng::seed_from_u64(SETUP_SEED);

        let center = (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
        let da = 2.0 * PI / count.max(1) as f64;
        let particles = (0..count)
            .map(|k| {
                let angle = k as f64 * da;
                let mass = random_mass(&mut rng);
                let x = center.0 + RING_RADIUS * angle.cos() + rng.gen_range(-1.0..1.0);
                let y = center.1 + RING_RADIUS * angle.sin() + rng.gen_range(-1.0..1.0);
                let (vx, vy) = random_velocity(&mut rng);
                Particle::new(mass, x, y, vx, vy)
            })
            .collect();

        info!("circle scenario: {} particles, dt = {:e}", count, parameters.dt);
        Ok(Self::new(parameters, Boundary::window(), [WINDOW_WIDTH, WINDOW_HEIGHT], particles))
    }

    /// `count` particles scattered uniformly inside the margin of the window box
    pub fn random(count: usize, steps: usize) -> Result<Self, ConfigError> {
        let parameters = step_parameters(steps)?;
        let mut rng = StdRng::seed_from_u64(SETUP_SEED);

        let particles = (0..count)
            .map(|_| {
                let mass = random_mass(&mut rng);
                let x = rng.gen_range(MARGIN..WINDOW_WIDTH - MARGIN);
                let y = rng.gen_range(MARGIN..WINDOW_HEIGHT - MARGIN);
                let (vx, vy) = random_velocity(&mut rng);
                Particle::new(mass, x, y, vx, vy)
            })
            .collect();

        info!("random scenario: {} particles, dt = {:e}", count, parameters.dt);
        Ok(Self::new(parameters, Boundary::window(), [WINDOW_WIDTH, WINDOW_HEIGHT], particles))
    }

    /// Build from a YAML-facing config, validating it first
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Particles: map `ParticleConfig` -> runtime `Particle`
        let particles = cfg
            .particles
            .iter()
            .map(|pc| Particle::new(pc.m, pc.x[0], pc.x[1], pc.v[0], pc.v[1]))
            .collect();

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            steps_per_frame: cfg.engine.steps_per_frame,
        };

        let boundary = cfg
            .engine
            .boundary
            .as_ref()
            .map(|b| b.to_boundary())
            .unwrap_or_default();

        info!("config scenario: {} particles, dt = {:e}, bounded = {}", cfg.particles.len(), parameters.dt, boundary.is_bounded());
        Ok(Self::new(parameters, boundary, cfg.engine.window, particles))
    }

    /// Run one displayed frame worth of integration steps
    pub fn advance_frame(&mut self) {
        for _ in 0..self.parameters.steps_per_frame {
            self.system.update();
        }
    }
}

fn step_parameters(steps: usize) -> Result<Parameters, ConfigError> {
    if steps == 0 {
        return Err(ConfigError::NonPositive { name: "steps", value: 0.0 });
    }
    Ok(Parameters::from_step_count(steps))
}

/// One of 1.0, 1.5, 2.0
fn random_mass(rng: &mut StdRng) -> f64 {
    0.5 * (rng.gen_range(0..=360) % 3) as f64 + 1.0
}

fn random_velocity(rng: &mut StdRng) -> (f64, f64) {
    (1.25 * rng.gen_range(-1.0..1.0), 1.25 * rng.gen_range(-1.0..1.0))
}
