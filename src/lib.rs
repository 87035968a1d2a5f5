pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, NVec2};
pub use simulation::params::{Parameters, G, STEPS_PER_FRAME};
pub use simulation::forces::{Acceleration, Axis, ConstantPull};
pub use simulation::boundary::Boundary;
pub use simulation::snapshot::{Disc, DiscStyle};
pub use simulation::system::ParticleSystem;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BoundaryConfig, EngineConfig, ParametersConfig, ParticleConfig, ScenarioConfig};
pub use error::ConfigError;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_update;
