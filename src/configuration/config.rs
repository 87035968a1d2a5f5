//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – frame pacing, window size and optional boundary box
//! - [`ParametersConfig`] – the integration step
//! - [`ParticleConfig`]   – initial state for each particle
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   steps_per_frame: 100
//!   window: [800, 600]
//!   boundary:             # omit for free-flying particles
//!     width: 800
//!     height: 600
//!     margin: 10
//!
//! parameters:
//!   dt: 0.0016666
//!
//! particles:
//!   - m: 1.0
//!     x: [300.0, 300.0]
//!     v: [0.0, 0.0]
//!   - m: 1.5
//!     x: [500.0, 300.0]
//! ```
//!
//! [`ScenarioConfig::validate`] must pass before a scenario is built from it.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::boundary::{Boundary, MARGIN, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::simulation::params::STEPS_PER_FRAME;

/// Axis-aligned box the particles are kept inside
#[derive(Deserialize, Debug, Clone)]
pub struct BoundaryConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

/// Frame pacing and presentation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize, // integration steps per rendered frame
    #[serde(default = "default_window")]
    pub window: [f64; 2], // window size in pixels
    #[serde(default)]
    pub boundary: Option<BoundaryConfig>, // `None` - particles fly freely
}

/// Global numerical parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // time step size
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug)]
pub struct ParticleConfig {
    pub m: f64, // mass
    pub x: Vec<f64>, // initial position in pixels
    #[serde(default = "default_velocity")]
    pub v: Vec<f64>, // initial velocity in pixels per time unit
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub particles: Vec<ParticleConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: default_steps_per_frame(),
            window: default_window(),
            boundary: None,
        }
    }
}

impl BoundaryConfig {
    pub fn to_boundary(&self) -> Boundary {
        Boundary::Box {
            width: self.width,
            height: self.height,
            margin: self.margin,
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reject anything the integrator would silently turn into NaNs
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.parameters.dt)?;
        positive("steps_per_frame", self.engine.steps_per_frame as f64)?;
        positive("window width", self.engine.window[0])?;
        positive("window height", self.engine.window[1])?;

        if let Some(b) = &self.engine.boundary {
            positive("boundary width", b.width)?;
            positive("boundary height", b.height)?;
            finite("boundary margin", b.margin)?;
            if b.margin < 0.0 || 2.0 * b.margin >= b.width.min(b.height) {
                return Err(ConfigError::DegenerateBoundary {
                    width: b.width,
                    height: b.height,
                    margin: b.margin,
                });
            }
        }

        for (index, p) in self.particles.iter().enumerate() {
            if !(p.m.is_finite() && p.m > 0.0) {
                return Err(ConfigError::InvalidMass { index, mass: p.m });
            }
            for (field, values) in [("x", &p.x), ("v", &p.v)] {
                if values.len() != 2 {
                    return Err(ConfigError::WrongArity { index, field, len: values.len() });
                }
                for &value in values {
                    finite(field, value)?;
                }
            }
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { name, value });
    }
    Ok(())
}

fn default_width() -> f64 { WINDOW_WIDTH }
fn default_height() -> f64 { WINDOW_HEIGHT }
fn default_margin() -> f64 { MARGIN }
fn default_steps_per_frame() -> usize { STEPS_PER_FRAME }
fn default_window() -> [f64; 2] { [WINDOW_WIDTH, WINDOW_HEIGHT] }
fn default_velocity() -> Vec<f64> { vec![0.0, 0.0] }
