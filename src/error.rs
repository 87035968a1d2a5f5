//! Errors raised while turning user input into a runnable scenario.
//! The simulation core itself never fails.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),

    #[error("`{name}` must be greater than zero, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("`{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("particle {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("particle {index}: `{field}` needs 2 components, got {len}")]
    WrongArity { index: usize, field: &'static str, len: usize },

    #[error("boundary margin {margin} leaves no room in a {width}x{height} box")]
    DegenerateBoundary { width: f64, height: f64, margin: f64 },
}
