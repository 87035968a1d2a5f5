//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings a driver needs:
//! - the fixed integration step `dt`,
//! - how many integration steps run per displayed frame.
//!
//! The pull constant `G` is global and never configurable.

/// Strength of the pairwise pull (not the physical gravitational constant)
pub const G: f64 = 9.8;

/// Integration steps executed per displayed frame
pub const STEPS_PER_FRAME: usize = 100;

/// Frame rate the step-count rule is calibrated against
pub const FRAME_RATE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size
    pub steps_per_frame: usize, // updates per rendered frame
}

impl Parameters {
    /// Derive `dt` from a step-count knob: `dt = 1 / (60 * steps * 0.1)`
    ///
    /// Larger `steps` means a finer step and slower-looking motion.
    pub fn from_step_count(steps: usize) -> Self {
        Self {
            dt: 1.0 / FRAME_RATE / steps as f64 / 0.1,
            steps_per_frame: STEPS_PER_FRAME,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from_step_count(1000)
    }
}
