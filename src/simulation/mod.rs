pub mod driver;
pub mod signal;

pub use driver::{Simulation, SimulationBuilder};
pub use signal::{Signal, STATUS_HINT};
