pub mod states;
pub mod params;
pub mod forces;
pub mod boundary;
pub mod integrator;
pub mod snapshot;
pub mod system;
pub mod scenario;
